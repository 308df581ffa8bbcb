//! Unified error types for the Hydra CPMM engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Failures reported by external asset collaborators are described by
//! [`TransferError`] and surface to callers wrapped in
//! [`AmmError::TransferFailed`].

use core::fmt;

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId, Shares};

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Direction of an asset movement relative to pool custody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransferDirection {
    /// Caller → pool custody.
    Into,
    /// Pool custody → caller.
    Out,
}

impl fmt::Display for TransferDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Into => write!(f, "into pool"),
            Self::Out => write!(f, "out of pool"),
        }
    }
}

/// Failure reported by an [`AssetLedger`](crate::traits::AssetLedger)
/// collaborator when it refuses or cannot complete a transfer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The debited account does not hold enough of the asset.
    #[error("insufficient balance for {account}: have {have}, need {need}")]
    InsufficientBalance {
        /// Account that was debited.
        account: AccountId,
        /// Balance held at the time of the transfer.
        have: Amount,
        /// Amount the transfer required.
        need: Amount,
    },

    /// Crediting the destination would overflow its balance.
    #[error("balance overflow on credit")]
    Overflow,

    /// The collaborator rejected the transfer for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Errors produced by pool construction, quoting and state transitions.
///
/// Every failing operation leaves pool state exactly as it was before the
/// call: either the error is raised before any mutation, or the mutation is
/// rolled back before the error is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmmError {
    /// The asset is not one of the pool's two configured assets.
    #[error("asset {0} is not part of this pool")]
    InvalidAsset(AssetId),

    /// A non-initial deposit does not match the current reserve ratio.
    #[error("deposit does not match the pool reserve ratio")]
    InvalidRatio,

    /// The deposit is too small to mint a single pool share.
    #[error("deposit too small to mint any pool shares")]
    ZeroSharesMinted,

    /// A share operation was requested with a zero amount.
    #[error("share amount must be positive")]
    ZeroShares,

    /// The caller holds fewer pool shares than the operation requires.
    #[error("insufficient shares: have {have}, need {need}")]
    InsufficientShares {
        /// Shares held by the caller.
        have: Shares,
        /// Shares the operation required.
        need: Shares,
    },

    /// An asset collaborator did not complete a requested transfer.
    #[error("transfer of asset {asset} {direction} failed: {source}")]
    TransferFailed {
        /// Asset whose collaborator failed.
        asset: AssetId,
        /// Direction of the failed movement.
        direction: TransferDirection,
        /// Failure reported by the collaborator.
        #[source]
        source: TransferError,
    },

    /// A mutating operation was invoked while another one is in flight
    /// on the same pool.
    #[error("re-entrant call rejected: another operation is in flight on this pool")]
    ReentrantCall,

    /// A swap was requested while one of the reserves is empty.
    #[error("pool has no liquidity to swap against")]
    ZeroLiquidity,

    /// The swap output is below the caller's minimum (or zero).
    #[error("insufficient output amount: minimum {minimum}, actual {actual}")]
    InsufficientOutputAmount {
        /// Minimum acceptable output.
        minimum: Amount,
        /// Output the pool would pay.
        actual: Amount,
    },

    /// The requested output cannot be paid from the current reserve.
    #[error("requested output exceeds available reserve")]
    InsufficientReserve,

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Fee parameter outside of `[0, 10_000)` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl AmmError {
    /// Wraps a collaborator failure for `asset` in the given `direction`.
    pub(crate) fn transfer(
        asset: AssetId,
        direction: TransferDirection,
        source: TransferError,
    ) -> Self {
        Self::TransferFailed {
            asset,
            direction,
            source,
        }
    }

    /// Returns `true` if the error came from an asset collaborator.
    #[must_use]
    pub const fn is_transfer_failure(&self) -> bool {
        matches!(self, Self::TransferFailed { .. })
    }
}
