//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the value types that model a two-asset pool:
//! asset and account identities, amounts, pool shares, fees, reserve
//! snapshots, quotes and the events emitted by completed operations.
//! All types use newtypes with validated constructors to enforce invariants.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod basis_points;
mod event;
mod fee_tier;
mod quote;
mod reserves;
mod rounding;
mod shares;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::{AssetPair, Side};
pub use basis_points::BasisPoints;
pub use event::PoolEvent;
pub use fee_tier::FeeTier;
pub use quote::{DepositQuote, SwapQuote, Withdrawal};
pub use reserves::Reserves;
pub use rounding::Rounding;
pub use shares::Shares;
