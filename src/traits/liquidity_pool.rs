//! Liquidity provision on top of [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! Pool shares only change through [`LiquidityPool::add_liquidity`] (mint)
//! and [`LiquidityPool::remove_liquidity`] (burn):
//!
//! ```text
//! total_shares = Σ share_balance(account)   for all accounts
//! ```
//!
//! Balanced deposits and withdrawals preserve `reserve_a / reserve_b`
//! exactly; all rounding favours the holders who stay in the pool.

use super::SwapPool;
use crate::domain::{AccountId, Amount, Shares, Withdrawal};
use crate::error::AmmError;

/// Trait for pools that accept deposits and redeem pool shares.
pub trait LiquidityPool: SwapPool {
    /// Deposits `amount_a` and `amount_b` from `caller` and mints shares.
    ///
    /// The first deposit mints `isqrt(amount_a × amount_b)`; later ones must
    /// match the reserve ratio exactly and mint
    /// `floor(amount_a × total_shares / reserve_a)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidRatio`] if the deposit is unbalanced.
    /// - [`AmmError::ZeroSharesMinted`] if the deposit mints nothing.
    /// - [`AmmError::TransferFailed`] if either pull fails; neither is kept.
    /// - [`AmmError::ReentrantCall`] if called from inside another call.
    fn add_liquidity(
        &self,
        caller: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Shares, AmmError>;

    /// Burns `shares` held by `caller` and pays out the proportional part of
    /// both reserves, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroShares`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `caller` holds fewer.
    /// - [`AmmError::TransferFailed`] if either push fails; shares are restored.
    /// - [`AmmError::ReentrantCall`] if called from inside another call.
    fn remove_liquidity(&self, caller: &AccountId, shares: Shares)
        -> Result<Withdrawal, AmmError>;

    /// Total pool shares in circulation.
    #[must_use]
    fn total_shares(&self) -> Shares;

    /// Pool shares held by `account`.
    #[must_use]
    fn share_balance(&self, account: &AccountId) -> Shares;
}
