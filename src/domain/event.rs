//! Structured notifications emitted by completed pool operations.

use core::fmt;

use super::{AccountId, Amount, AssetId, Shares};

/// Record of a completed state transition.
///
/// Events are appended to the pool's journal only after an operation has
/// fully succeeded (bookkeeping applied and every asset transfer done), so
/// an indexer replaying them sees exactly the committed history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PoolEvent {
    /// A swap was executed.
    Swap {
        /// Account that sold `asset_in`.
        caller: AccountId,
        /// Asset paid into the pool.
        asset_in: AssetId,
        /// Asset paid out of the pool.
        asset_out: AssetId,
        /// Gross input, fee included.
        amount_in: Amount,
        /// Output paid to the caller.
        amount_out: Amount,
    },
    /// Liquidity was deposited.
    Deposit {
        /// Depositor.
        caller: AccountId,
        /// Asset A deposited.
        amount_a: Amount,
        /// Asset B deposited.
        amount_b: Amount,
        /// Shares minted to the depositor.
        shares_minted: Shares,
    },
    /// Liquidity was withdrawn.
    Withdrawal {
        /// Redeemer.
        caller: AccountId,
        /// Shares burned.
        shares_burned: Shares,
        /// Asset A returned.
        amount_a: Amount,
        /// Asset B returned.
        amount_b: Amount,
    },
    /// Pool shares moved between accounts.
    SharesTransferred {
        /// Sender.
        from: AccountId,
        /// Recipient.
        to: AccountId,
        /// Shares moved.
        shares: Shares,
    },
}

impl PoolEvent {
    /// Account that initiated the operation.
    #[must_use]
    pub const fn actor(&self) -> AccountId {
        match self {
            Self::Swap { caller, .. }
            | Self::Deposit { caller, .. }
            | Self::Withdrawal { caller, .. } => *caller,
            Self::SharesTransferred { from, .. } => *from,
        }
    }

    /// Short operation name, as used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Swap { .. } => "swap",
            Self::Deposit { .. } => "deposit",
            Self::Withdrawal { .. } => "withdrawal",
            Self::SharesTransferred { .. } => "shares_transferred",
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap {
                caller,
                amount_in,
                amount_out,
                ..
            } => write!(f, "swap by {caller}: in={amount_in} out={amount_out}"),
            Self::Deposit {
                caller,
                amount_a,
                amount_b,
                shares_minted,
            } => write!(
                f,
                "deposit by {caller}: a={amount_a} b={amount_b} shares={shares_minted}"
            ),
            Self::Withdrawal {
                caller,
                shares_burned,
                amount_a,
                amount_b,
            } => write!(
                f,
                "withdrawal by {caller}: shares={shares_burned} a={amount_a} b={amount_b}"
            ),
            Self::SharesTransferred { from, to, shares } => {
                write!(f, "share transfer {from} -> {to}: {shares}")
            }
        }
    }
}
