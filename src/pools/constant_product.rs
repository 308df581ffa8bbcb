//! Constant Product pool: reserve ledger and accounting engine.
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves
//! of the two assets. Fees are deducted from the input amount **before**
//! the pricing formula is applied and stay in the pool.
//!
//! # Swap Algorithm (Asset A → Asset B)
//!
//! 1. `net_input = floor(amount_in × (10 000 − fee_bps) / 10 000)`
//! 2. `amount_out = floor(reserve_b × net_input / (reserve_a + net_input))`
//! 3. `reserve_a += amount_in` (fee stays in the pool)
//! 4. `reserve_b -= amount_out`
//!
//! # Liquidity
//!
//! - First deposit mints `isqrt(amount_a × amount_b)` shares.
//! - Later deposits must satisfy `reserve_a × amount_b == reserve_b × amount_a`
//!   exactly and mint `floor(amount_a × total_shares / reserve_a)`.
//! - Redeeming `s` shares pays `floor(reserve × s / total_shares)` of each asset.
//!
//! # Transactions
//!
//! Every mutating call runs behind the pool's call gate and follows the
//! same shape: validate and price against a snapshot, move assets through
//! the collaborators, and commit bookkeeping under one short write lock.
//! If a collaborator fails after bookkeeping was committed, the snapshot is
//! restored and any transfer already made is reversed before the error is
//! returned.

use parking_lot::{Mutex, RwLock};
use primitive_types::U256;
use tracing::{debug, error, info, warn};

use super::call_gate::CallGate;
use super::share_ledger::ShareLedger;
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositQuote, FeeTier, PoolEvent, Reserves, Rounding,
    Shares, Side, SwapQuote, Withdrawal,
};
use crate::error::{AmmError, Result, TransferDirection};
use crate::math::{integer_sqrt, mul_div, narrow, CheckedArithmetic};
use crate::traits::{AssetLedger, LiquidityPool, SwapPool};

/// Bookkeeping guarded by the pool's state lock.
#[derive(Debug, Default)]
struct PoolState {
    reserves: Reserves,
    shares: ShareLedger,
}

/// Everything a single-account operation may touch, captured before it
/// commits.
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    reserves: Reserves,
    total_shares: Shares,
    account: AccountId,
    balance: Shares,
}

impl PoolState {
    fn checkpoint(&self, account: &AccountId) -> Checkpoint {
        Checkpoint {
            reserves: self.reserves,
            total_shares: self.shares.total(),
            account: *account,
            balance: self.shares.balance_of(account),
        }
    }

    fn restore(&mut self, checkpoint: &Checkpoint) {
        self.reserves = checkpoint.reserves;
        self.shares.restore(
            &checkpoint.account,
            checkpoint.balance,
            checkpoint.total_shares,
        );
    }
}

/// A Constant Product AMM pool (`x · y = k`) over two external asset
/// ledgers.
///
/// The pool is created empty from a [`PoolConfig`] and is seeded by its
/// first deposit. All methods take `&self`; share the pool between threads
/// or collaborators through an `Arc`.
///
/// # Example
///
/// ```rust
/// use hydra_cpmm::config::PoolConfig;
/// use hydra_cpmm::domain::{AccountId, Amount, AssetId, FeeTier};
/// use hydra_cpmm::ledger::InMemoryLedger;
/// use hydra_cpmm::pools::ConstantProductPool;
/// use hydra_cpmm::traits::SwapPool;
///
/// let custody = AccountId::from_bytes([0xff; 32]);
/// let alice = AccountId::from_bytes([1; 32]);
/// let (a, b) = (AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]));
///
/// let config = PoolConfig::for_assets(a, b, FeeTier::TIER_0_30_PERCENT).expect("valid config");
/// let pool = ConstantProductPool::new(
///     config,
///     InMemoryLedger::new(a, custody),
///     InMemoryLedger::new(b, custody),
/// )
/// .expect("ledgers match config");
///
/// pool.ledger_a().mint(&alice, Amount::new(40_000)).expect("mint");
/// pool.ledger_b().mint(&alice, Amount::new(20_000)).expect("mint");
///
/// pool.add_liquidity(&alice, Amount::new(20_000), Amount::new(20_000)).expect("deposit");
/// let out = pool.swap(&alice, &a, Amount::new(20_000)).expect("swap");
/// assert_eq!(out, Amount::new(9_984));
/// ```
#[derive(Debug)]
pub struct ConstantProductPool<L> {
    config: PoolConfig,
    ledger_a: L,
    ledger_b: L,
    state: RwLock<PoolState>,
    gate: CallGate,
    events: Mutex<Vec<PoolEvent>>,
}

impl<L: AssetLedger> ConstantProductPool<L> {
    /// Creates an empty pool over `ledger_a` and `ledger_b`.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`PoolConfig::validate`].
    /// - Returns [`AmmError::InvalidConfiguration`] if a ledger does not
    ///   move the asset configured for its side.
    pub fn new(config: PoolConfig, ledger_a: L, ledger_b: L) -> Result<Self> {
        config.validate()?;
        if ledger_a.asset_id() != config.assets().asset_a() {
            return Err(AmmError::InvalidConfiguration(
                "ledger A does not move the configured asset A",
            ));
        }
        if ledger_b.asset_id() != config.assets().asset_b() {
            return Err(AmmError::InvalidConfiguration(
                "ledger B does not move the configured asset B",
            ));
        }

        info!(
            asset_a = %config.assets().asset_a(),
            asset_b = %config.assets().asset_b(),
            fee = %config.fee_tier().basis_points(),
            "constant product pool created"
        );

        Ok(Self {
            config,
            ledger_a,
            ledger_b,
            state: RwLock::new(PoolState::default()),
            gate: CallGate::default(),
            events: Mutex::new(Vec::new()),
        })
    }

    /// Returns the pool configuration.
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the ledger backing asset A.
    pub const fn ledger_a(&self) -> &L {
        &self.ledger_a
    }

    /// Returns the ledger backing asset B.
    pub const fn ledger_b(&self) -> &L {
        &self.ledger_b
    }

    /// Current reserves.
    pub fn reserves(&self) -> Reserves {
        self.state.read().reserves
    }

    /// Total pool shares in circulation.
    pub fn total_shares(&self) -> Shares {
        self.state.read().shares.total()
    }

    /// Pool shares held by `account`.
    pub fn share_balance(&self, account: &AccountId) -> Shares {
        self.state.read().shares.balance_of(account)
    }

    /// The constant-product invariant `reserve_a × reserve_b`.
    pub fn invariant(&self) -> U256 {
        self.reserves().product()
    }

    /// Takes every event recorded since the last drain, oldest first.
    pub fn drain_events(&self) -> Vec<PoolEvent> {
        core::mem::take(&mut *self.events.lock())
    }

    // -- quotes --------------------------------------------------------------

    /// Prices selling `amount_in` of `asset_in` against current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset_in` is not in the pair.
    /// - [`AmmError::ZeroLiquidity`] if the input reserve is empty and the
    ///   fee-reduced input is zero, leaving the formula undefined.
    pub fn quote_swap_output(&self, asset_in: &AssetId, amount_in: Amount) -> Result<SwapQuote> {
        let side_in = self.config.assets().side_of(asset_in)?;
        let (reserve_in, reserve_out) = self.reserves().oriented(side_in);
        let quote = swap_output(self.config.fee_tier(), amount_in, reserve_in, reserve_out)?;
        debug!(asset_in = %asset_in, %quote, "swap output quoted");
        Ok(quote)
    }

    /// Prices buying `amount_out` of `asset_out`: the returned quote carries
    /// the smallest input that pays at least `amount_out`, and the exact
    /// output that input buys.
    ///
    /// ```text
    /// net_input = ceil(reserve_in × amount_out / (reserve_out − amount_out))
    /// amount_in = ceil(net_input × 10 000 / (10 000 − fee_bps))
    /// ```
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset_out` is not in the pair.
    /// - [`AmmError::ZeroLiquidity`] if either reserve is empty.
    /// - [`AmmError::InsufficientReserve`] if `amount_out` is the whole
    ///   output reserve or more.
    /// - [`AmmError::Overflow`] if the required input exceeds `u128`.
    pub fn quote_swap_input(&self, asset_out: &AssetId, amount_out: Amount) -> Result<SwapQuote> {
        let side_in = self.config.assets().side_of(asset_out)?.opposite();
        let reserves = self.reserves();
        let (reserve_in, reserve_out) = reserves.oriented(side_in);
        let fee_tier = self.config.fee_tier();

        if amount_out.is_zero() {
            return swap_output(fee_tier, Amount::ZERO, reserve_in, reserve_out);
        }
        if reserves.has_empty_side() {
            return Err(AmmError::ZeroLiquidity);
        }
        if amount_out >= reserve_out {
            return Err(AmmError::InsufficientReserve);
        }

        let remaining = reserve_out.safe_sub(&amount_out)?;
        let net_input = mul_div(
            reserve_in.get(),
            amount_out.get(),
            remaining.widen(),
            Rounding::Up,
        )?;
        let amount_in = fee_tier.gross_input(Amount::new(net_input))?;

        let quote = swap_output(fee_tier, amount_in, reserve_in, reserve_out)?;
        debug!(asset_out = %asset_out, %quote, "swap input quoted");
        Ok(quote)
    }

    /// Previews [`add_liquidity`](Self::add_liquidity) with identical
    /// validation.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidRatio`] if the deposit is unbalanced.
    /// - [`AmmError::ZeroSharesMinted`] if the deposit mints nothing.
    /// - [`AmmError::Overflow`] if reserves or supply would overflow.
    pub fn quote_add_liquidity(&self, amount_a: Amount, amount_b: Amount) -> Result<DepositQuote> {
        let state = self.state.read();
        plan_deposit(&state, amount_a, amount_b).map(|(quote, _)| quote)
    }

    /// Previews redeeming `shares`, without checking who holds them.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroShares`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `shares` exceeds the supply.
    pub fn quote_remove_liquidity(&self, shares: Shares) -> Result<Withdrawal> {
        if shares.is_zero() {
            return Err(AmmError::ZeroShares);
        }
        let state = self.state.read();
        let total = state.shares.total();
        if shares > total {
            return Err(AmmError::InsufficientShares {
                have: total,
                need: shares,
            });
        }
        redemption(&state, shares)
    }

    // -- state transitions ---------------------------------------------------

    /// Sells `amount_in` of `asset_in` and requires at least
    /// `min_amount_out` back.
    ///
    /// # Errors
    ///
    /// As [`SwapPool::swap`], plus [`AmmError::InsufficientOutputAmount`]
    /// when the output is below `min_amount_out`.
    pub fn swap_with_limit(
        &self,
        caller: &AccountId,
        asset_in: &AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<Amount> {
        let _permit = self.gate.enter("swap")?;

        let side_in = self.config.assets().side_of(asset_in)?;
        let side_out = side_in.opposite();
        let before = self.reserves();
        if before.has_empty_side() {
            return Err(AmmError::ZeroLiquidity);
        }

        let (reserve_in, reserve_out) = before.oriented(side_in);
        let quote = swap_output(self.config.fee_tier(), amount_in, reserve_in, reserve_out)?;
        let amount_out = quote.amount_out();
        if amount_out.is_zero() || amount_out < min_amount_out {
            return Err(AmmError::InsufficientOutputAmount {
                minimum: min_amount_out,
                actual: amount_out,
            });
        }
        let after = Reserves::from_oriented(
            side_in,
            reserve_in.safe_add(&amount_in)?,
            reserve_out.safe_sub(&amount_out)?,
        );

        self.pull(side_in, caller, amount_in)?;
        self.state.write().reserves = after;

        if let Err(err) = self.push(side_out, caller, amount_out) {
            self.state.write().reserves = before;
            warn!(caller = %caller, error = %err, "swap rolled back");
            self.compensate(side_in, TransferDirection::Out, caller, amount_in);
            return Err(err);
        }

        let asset_out = self.config.assets().asset(side_out);
        info!(
            caller = %caller,
            asset_in = %asset_in,
            asset_out = %asset_out,
            amount_in = %amount_in,
            amount_out = %amount_out,
            "swap executed"
        );
        self.record(PoolEvent::Swap {
            caller: *caller,
            asset_in: *asset_in,
            asset_out,
            amount_in,
            amount_out,
        });
        Ok(amount_out)
    }

    /// Deposits both assets from `caller` and mints pool shares.
    ///
    /// # Errors
    ///
    /// See [`LiquidityPool::add_liquidity`].
    pub fn add_liquidity(
        &self,
        caller: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Shares> {
        let _permit = self.gate.enter("add_liquidity")?;

        let (quote, after) = {
            let state = self.state.read();
            plan_deposit(&state, amount_a, amount_b)?
        };

        self.pull(Side::A, caller, amount_a)?;
        if let Err(err) = self.pull(Side::B, caller, amount_b) {
            warn!(caller = %caller, error = %err, "deposit rolled back");
            self.compensate(Side::A, TransferDirection::Out, caller, amount_a);
            return Err(err);
        }

        let committed = {
            let mut state = self.state.write();
            let minted = state.shares.mint(caller, quote.shares);
            if minted.is_ok() {
                state.reserves = after;
            }
            minted
        };
        if let Err(err) = committed {
            warn!(caller = %caller, error = %err, "deposit rolled back");
            self.compensate(Side::A, TransferDirection::Out, caller, amount_a);
            self.compensate(Side::B, TransferDirection::Out, caller, amount_b);
            return Err(err);
        }

        info!(
            caller = %caller,
            amount_a = %amount_a,
            amount_b = %amount_b,
            shares_minted = %quote.shares,
            initial = quote.initial,
            "liquidity added"
        );
        self.record(PoolEvent::Deposit {
            caller: *caller,
            amount_a,
            amount_b,
            shares_minted: quote.shares,
        });
        Ok(quote.shares)
    }

    /// Burns `shares` held by `caller` and pays out both assets.
    ///
    /// Shares are burned and reserves reduced before any asset leaves the
    /// pool, so a callback from a collaborator cannot redeem them twice.
    ///
    /// # Errors
    ///
    /// See [`LiquidityPool::remove_liquidity`].
    pub fn remove_liquidity(&self, caller: &AccountId, shares: Shares) -> Result<Withdrawal> {
        let _permit = self.gate.enter("remove_liquidity")?;

        if shares.is_zero() {
            return Err(AmmError::ZeroShares);
        }

        let (withdrawal, checkpoint) = {
            let mut state = self.state.write();
            let have = state.shares.balance_of(caller);
            if have < shares {
                return Err(AmmError::InsufficientShares { have, need: shares });
            }
            let withdrawal = redemption(&state, shares)?;
            let after = Reserves::new(
                state.reserves.a().safe_sub(&withdrawal.amount_a)?,
                state.reserves.b().safe_sub(&withdrawal.amount_b)?,
            );
            let checkpoint = state.checkpoint(caller);
            state.shares.burn(caller, shares)?;
            state.reserves = after;
            (withdrawal, checkpoint)
        };

        if let Err(err) = self.push(Side::A, caller, withdrawal.amount_a) {
            self.state.write().restore(&checkpoint);
            warn!(caller = %caller, error = %err, "withdrawal rolled back");
            return Err(err);
        }
        if let Err(err) = self.push(Side::B, caller, withdrawal.amount_b) {
            self.state.write().restore(&checkpoint);
            warn!(caller = %caller, error = %err, "withdrawal rolled back");
            self.compensate(
                Side::A,
                TransferDirection::Into,
                caller,
                withdrawal.amount_a,
            );
            return Err(err);
        }

        info!(
            caller = %caller,
            shares_burned = %shares,
            amount_a = %withdrawal.amount_a,
            amount_b = %withdrawal.amount_b,
            "liquidity removed"
        );
        self.record(PoolEvent::Withdrawal {
            caller: *caller,
            shares_burned: shares,
            amount_a: withdrawal.amount_a,
            amount_b: withdrawal.amount_b,
        });
        Ok(withdrawal)
    }

    /// Moves `shares` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroShares`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `from` holds fewer.
    /// - [`AmmError::ReentrantCall`] if called from inside another call.
    pub fn transfer_shares(&self, from: &AccountId, to: &AccountId, shares: Shares) -> Result<()> {
        let _permit = self.gate.enter("transfer_shares")?;

        if shares.is_zero() {
            return Err(AmmError::ZeroShares);
        }
        self.state.write().shares.transfer(from, to, shares)?;

        info!(from = %from, to = %to, shares = %shares, "shares transferred");
        self.record(PoolEvent::SharesTransferred {
            from: *from,
            to: *to,
            shares,
        });
        Ok(())
    }

    // -- collaborator plumbing -----------------------------------------------

    const fn ledger(&self, side: Side) -> &L {
        match side {
            Side::A => &self.ledger_a,
            Side::B => &self.ledger_b,
        }
    }

    fn pull(&self, side: Side, from: &AccountId, amount: Amount) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        self.ledger(side)
            .transfer_into(from, amount)
            .map_err(|source| {
                AmmError::transfer(
                    self.config.assets().asset(side),
                    TransferDirection::Into,
                    source,
                )
            })
    }

    fn push(&self, side: Side, to: &AccountId, amount: Amount) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        self.ledger(side)
            .transfer_out(to, amount)
            .map_err(|source| {
                AmmError::transfer(
                    self.config.assets().asset(side),
                    TransferDirection::Out,
                    source,
                )
            })
    }

    /// Reverses a transfer that already succeeded during a failed call.
    fn compensate(
        &self,
        side: Side,
        direction: TransferDirection,
        account: &AccountId,
        amount: Amount,
    ) {
        let result = match direction {
            TransferDirection::Into => self.pull(side, account, amount),
            TransferDirection::Out => self.push(side, account, amount),
        };
        if let Err(err) = result {
            error!(
                account = %account,
                asset = %self.config.assets().asset(side),
                amount = %amount,
                error = %err,
                "compensating transfer failed; custody and reserves need reconciliation"
            );
        }
    }

    fn record(&self, event: PoolEvent) {
        self.events.lock().push(event);
    }
}

/// Applies the fee and the constant-product formula.
fn swap_output(
    fee_tier: FeeTier,
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<SwapQuote> {
    if amount_in.is_zero() {
        return Ok(SwapQuote::new(
            Amount::ZERO,
            Amount::ZERO,
            Amount::ZERO,
            reserve_in,
            reserve_out,
        ));
    }
    let net_input = fee_tier.net_input(amount_in);
    let denominator = reserve_in.widen() + net_input.widen();
    if denominator.is_zero() {
        return Err(AmmError::ZeroLiquidity);
    }
    let amount_out = mul_div(
        net_input.get(),
        reserve_out.get(),
        denominator,
        Rounding::Down,
    )?;
    Ok(SwapQuote::new(
        amount_in,
        net_input,
        Amount::new(amount_out),
        reserve_in,
        reserve_out,
    ))
}

/// Validates a deposit against `state` and returns the quote together with
/// the reserves it would leave behind.
fn plan_deposit(
    state: &PoolState,
    amount_a: Amount,
    amount_b: Amount,
) -> Result<(DepositQuote, Reserves)> {
    let reserves = state.reserves;
    let total = state.shares.total();

    if !reserves.is_empty()
        && reserves.a().widen() * amount_b.widen() != reserves.b().widen() * amount_a.widen()
    {
        return Err(AmmError::InvalidRatio);
    }

    let initial = total.is_zero();
    let shares = if initial {
        narrow(integer_sqrt(amount_a.widen() * amount_b.widen()))?
    } else {
        mul_div(
            amount_a.get(),
            total.get(),
            reserves.a().widen(),
            Rounding::Down,
        )?
    };
    let shares = Shares::new(shares);
    if shares.is_zero() {
        return Err(AmmError::ZeroSharesMinted);
    }
    // the new supply must fit before anything is pulled
    let _supply = total.safe_add(&shares)?;

    let after = Reserves::new(
        reserves.a().safe_add(&amount_a)?,
        reserves.b().safe_add(&amount_b)?,
    );
    let quote = DepositQuote {
        amount_a,
        amount_b,
        shares,
        initial,
    };
    Ok((quote, after))
}

/// Proportional share of both reserves for `shares`, rounded down.
fn redemption(state: &PoolState, shares: Shares) -> Result<Withdrawal> {
    let total = state.shares.total().widen();
    let amount_a = mul_div(
        state.reserves.a().get(),
        shares.get(),
        total,
        Rounding::Down,
    )?;
    let amount_b = mul_div(
        state.reserves.b().get(),
        shares.get(),
        total,
        Rounding::Down,
    )?;
    Ok(Withdrawal::new(Amount::new(amount_a), Amount::new(amount_b)))
}

impl<L: AssetLedger> SwapPool for ConstantProductPool<L> {
    fn quote_swap_output(&self, asset_in: &AssetId, amount_in: Amount) -> Result<SwapQuote> {
        Self::quote_swap_output(self, asset_in, amount_in)
    }

    /// Executes a swap with no output floor beyond "pays something".
    fn swap(&self, caller: &AccountId, asset_in: &AssetId, amount_in: Amount) -> Result<Amount> {
        self.swap_with_limit(caller, asset_in, amount_in, Amount::ZERO)
    }

    fn reserves(&self) -> Reserves {
        Self::reserves(self)
    }

    fn assets(&self) -> &AssetPair {
        self.config.assets()
    }

    fn fee_tier(&self) -> FeeTier {
        self.config.fee_tier()
    }
}

impl<L: AssetLedger> LiquidityPool for ConstantProductPool<L> {
    fn add_liquidity(
        &self,
        caller: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Shares> {
        Self::add_liquidity(self, caller, amount_a, amount_b)
    }

    fn remove_liquidity(&self, caller: &AccountId, shares: Shares) -> Result<Withdrawal> {
        Self::remove_liquidity(self, caller, shares)
    }

    fn total_shares(&self) -> Shares {
        Self::total_shares(self)
    }

    fn share_balance(&self, account: &AccountId) -> Shares {
        Self::share_balance(self, account)
    }
}
