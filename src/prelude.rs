//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, DepositQuote, FeeTier, PoolEvent,
    Reserves, Rounding, Shares, Side, SwapQuote, Withdrawal,
};

pub use crate::traits::{AssetLedger, LiquidityPool, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::error::{AmmError, Result, TransferDirection, TransferError};

pub use crate::ledger::InMemoryLedger;

pub use crate::pools::ConstantProductPool;
