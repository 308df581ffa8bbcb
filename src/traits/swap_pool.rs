//! Swap surface of a two-asset pool.
//!
//! [`SwapPool`] covers quoting, execution and the read-only projections a
//! trader needs:
//!
//! 1. **Quote**: [`SwapPool::quote_swap_output`] prices a trade without
//!    touching state.
//! 2. **Execute**: [`SwapPool::swap`] moves the assets and updates reserves.
//! 3. **Inspect**: [`SwapPool::reserves`], [`SwapPool::assets`] and
//!    [`SwapPool::fee_tier`].
//!
//! # Fee Deduction Invariant
//!
//! The fee is taken from the input before the pricing curve is applied and
//! never leaves the pool:
//!
//! ```text
//! net_input  = floor(amount_in × (10_000 − fee_bps) / 10_000)
//! amount_out = floor(net_input × reserve_out / (reserve_in + net_input))
//! ```
//!
//! The input reserve grows by the full `amount_in`, so fee revenue shows up
//! as a larger `reserve_a × reserve_b`.

use crate::domain::{AccountId, Amount, AssetId, AssetPair, FeeTier, Reserves, SwapQuote};
use crate::error::AmmError;

/// Core trait for pools that exchange one asset for the other.
///
/// Mutating methods take `&self`: pools synchronise internally so a single
/// instance can be shared between threads and handed to collaborators.
///
/// # Errors
///
/// Common error variants:
///
/// - [`AmmError::InvalidAsset`]: asset is not part of the pool pair
/// - [`AmmError::ZeroLiquidity`]: a reserve is empty
/// - [`AmmError::TransferFailed`]: a collaborator refused a transfer
/// - [`AmmError::ReentrantCall`]: another call is in flight on the pool
pub trait SwapPool {
    /// Prices a swap of `amount_in` of `asset_in` against current reserves.
    ///
    /// Pure: no state changes. A zero input quotes a zero output.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset_in` is not in the pair.
    fn quote_swap_output(&self, asset_in: &AssetId, amount_in: Amount)
        -> Result<SwapQuote, AmmError>;

    /// Sells `amount_in` of `asset_in` from `caller` and pays the other
    /// asset back. Returns the amount paid out.
    ///
    /// All-or-nothing: on error, reserves and balances are as before.
    ///
    /// Unlike [`quote_swap_output`](Self::quote_swap_output), which prices a
    /// zero input at zero, a swap that would pay out nothing is an error:
    /// zero input, or dust the fee and rounding reduce to zero output, is
    /// rejected before any transfer so the caller never donates input.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset_in` is not in the pair.
    /// - [`AmmError::ZeroLiquidity`] if either reserve is empty.
    /// - [`AmmError::InsufficientOutputAmount`] if the trade pays nothing,
    ///   including `amount_in == 0`.
    /// - [`AmmError::TransferFailed`] if either transfer fails.
    /// - [`AmmError::ReentrantCall`] if called from inside another call.
    fn swap(&self, caller: &AccountId, asset_in: &AssetId, amount_in: Amount)
        -> Result<Amount, AmmError>;

    /// Current reserves, read as one consistent snapshot.
    #[must_use]
    fn reserves(&self) -> Reserves;

    /// The pool's asset pair, in configuration order.
    #[must_use]
    fn assets(&self) -> &AssetPair;

    /// The fee charged on swap input, fixed for the life of the pool.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;
}
