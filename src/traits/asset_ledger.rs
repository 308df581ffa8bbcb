//! Contract required of the external fungible-asset collaborators.
//!
//! A pool never holds assets itself. Each side of the pair is backed by an
//! [`AssetLedger`] handle that moves balances between user accounts and the
//! pool's custody. The pool trusts only what it asked for: reserves are
//! updated by the amounts it requested, never by re-reading balances.

use std::sync::Arc;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;

/// External fungible-asset collaborator.
///
/// Implementations may call back into the pool from inside a transfer
/// (hooks, callbacks). The pool rejects such nested calls with
/// [`AmmError::ReentrantCall`](crate::error::AmmError::ReentrantCall).
///
/// Callbacks must run on the calling thread: a transfer that hands control
/// to another thread and waits for it to call the same pool deadlocks,
/// because the pool admits one mutating call at a time.
pub trait AssetLedger: Send + Sync {
    /// Identifier of the asset this ledger moves.
    fn asset_id(&self) -> AssetId;

    /// Moves `amount` from `from` into pool custody.
    ///
    /// # Errors
    ///
    /// Any [`TransferError`] means nothing was moved.
    fn transfer_into(&self, from: &AccountId, amount: Amount) -> Result<(), TransferError>;

    /// Moves `amount` from pool custody to `to`.
    ///
    /// # Errors
    ///
    /// Any [`TransferError`] means nothing was moved.
    fn transfer_out(&self, to: &AccountId, amount: Amount) -> Result<(), TransferError>;
}

impl<T: AssetLedger + ?Sized> AssetLedger for Arc<T> {
    fn asset_id(&self) -> AssetId {
        (**self).asset_id()
    }

    fn transfer_into(&self, from: &AccountId, amount: Amount) -> Result<(), TransferError> {
        (**self).transfer_into(from, amount)
    }

    fn transfer_out(&self, to: &AccountId, amount: Amount) -> Result<(), TransferError> {
        (**self).transfer_out(to, amount)
    }
}
