//! Core trait abstractions.
//!
//! - [`AssetLedger`]: the external asset collaborator a pool moves funds
//!   through.
//! - [`SwapPool`]: quoting and executing swaps.
//! - [`LiquidityPool`]: deposits, withdrawals and share balances.

mod asset_ledger;
mod liquidity_pool;
mod swap_pool;

pub use asset_ledger::AssetLedger;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
