//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Swap reversibility**: round-trip A→B→A returns ≤ original.
//! 2. **Invariant preservation**: `reserve_a × reserve_b` never decreases
//!    across swaps, and a swap never pays out the whole reserve.
//! 3. **Output monotonicity**: a larger input never buys less.
//! 4. **Ratio preservation**: balanced deposits keep `reserve_a / reserve_b`
//!    exactly.
//! 5. **No gain from redemption**: withdrawing and re-depositing never
//!    leaves the redeemer better off.
//! 6. **Price movement direction**: selling A makes A cheaper.
//! 7. **Integer square root bounds**: `r² ≤ n < (r + 1)²`.

#![allow(clippy::panic)]

use primitive_types::U256;
use proptest::prelude::*;

use super::ConstantProductPool;
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, FeeTier, Shares, Side};
use crate::ledger::InMemoryLedger;
use crate::math::integer_sqrt;
use crate::traits::SwapPool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const CUSTODY: AccountId = AccountId::from_bytes([0xff; 32]);
const SEEDER: AccountId = AccountId::from_bytes([0x01; 32]);
const TRADER: AccountId = AccountId::from_bytes([0x02; 32]);

/// Balance given to every test account, far above any reserve used here.
const FUNDING: u128 = 1_000_000_000_000;

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn make_pool(ra: u128, rb: u128) -> ConstantProductPool<InMemoryLedger> {
    let Ok(config) = PoolConfig::for_assets(asset_a(), asset_b(), FeeTier::TIER_0_30_PERCENT)
    else {
        panic!("valid config");
    };
    let Ok(pool) = ConstantProductPool::new(
        config,
        InMemoryLedger::new(asset_a(), CUSTODY),
        InMemoryLedger::new(asset_b(), CUSTODY),
    ) else {
        panic!("valid pool");
    };
    for account in [SEEDER, TRADER] {
        let Ok(()) = pool.ledger_a().mint(&account, Amount::new(FUNDING)) else {
            panic!("mint A");
        };
        let Ok(()) = pool.ledger_b().mint(&account, Amount::new(FUNDING)) else {
            panic!("mint B");
        };
    }
    let Ok(_) = pool.add_liquidity(&SEEDER, Amount::new(ra), Amount::new(rb)) else {
        panic!("seed deposit");
    };
    pool
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        divisor in 10u128..=1_000u128,
    ) {
        let swap_in = (ra / divisor).max(1);
        let pool = make_pool(ra, rb);

        let Ok(received_b) = pool.swap(&TRADER, &asset_a(), Amount::new(swap_in)) else {
            return Ok(());
        };
        let Ok(final_a) = pool.swap(&TRADER, &asset_b(), received_b) else {
            return Ok(());
        };

        prop_assert!(
            final_a.get() < swap_in,
            "round-trip should lose value: final={} original={}",
            final_a, swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_preservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((any::<bool>(), 1u128..=5_000_000u128), 1..8),
    ) {
        let pool = make_pool(ra, rb);

        for (a_to_b, amount) in swaps {
            let asset_in = if a_to_b { asset_a() } else { asset_b() };
            let before = pool.reserves();
            let side_in = if a_to_b { Side::A } else { Side::B };
            let (_, reserve_out) = before.oriented(side_in);
            let k_before = pool.invariant();

            let Ok(out) = pool.swap(&TRADER, &asset_in, Amount::new(amount)) else {
                prop_assert_eq!(pool.reserves(), before);
                continue;
            };

            prop_assert!(out < reserve_out, "swap drained the output reserve");
            prop_assert!(
                pool.invariant() >= k_before,
                "k decreased: before={} after={}",
                k_before, pool.invariant()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Output Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_monotonic_in_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        small in 0u128..=1_000_000u128,
        extra in 0u128..=1_000_000u128,
    ) {
        let pool = make_pool(ra, rb);
        let Ok(q_small) = pool.quote_swap_output(&asset_a(), Amount::new(small)) else {
            panic!("quote on seeded pool");
        };
        let Ok(q_large) = pool.quote_swap_output(&asset_a(), Amount::new(small + extra)) else {
            panic!("quote on seeded pool");
        };
        prop_assert!(q_large.amount_out() >= q_small.amount_out());
        prop_assert!(q_large.fee() >= q_small.fee());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Ratio Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_balanced_deposit_preserves_ratio(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        scale in 1u128..=50u128,
    ) {
        let pool = make_pool(ra, rb);
        let g = gcd(ra, rb);
        let (deposit_a, deposit_b) = (ra / g * scale, rb / g * scale);

        let before = pool.reserves();
        let Ok(_) = pool.add_liquidity(&TRADER, Amount::new(deposit_a), Amount::new(deposit_b))
        else {
            // dust deposits mint nothing and are rejected
            prop_assert_eq!(pool.reserves(), before);
            return Ok(());
        };
        let after = pool.reserves();

        prop_assert_eq!(
            after.a().widen() * before.b().widen(),
            after.b().widen() * before.a().widen()
        );
    }

    #[test]
    fn prop_unbalanced_deposit_rejected(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        skew in 1u128..=1_000u128,
    ) {
        let pool = make_pool(ra, rb);
        let g = gcd(ra, rb);
        let (deposit_a, deposit_b) = (ra / g, rb / g + skew);

        prop_assert_eq!(
            pool.add_liquidity(&TRADER, Amount::new(deposit_a), Amount::new(deposit_b)),
            Err(crate::error::AmmError::InvalidRatio)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: No Gain From Redemption
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_withdraw_then_redeposit_never_gains(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in 1u128..=100u128,
    ) {
        let pool = make_pool(ra, rb);
        let total = pool.total_shares();
        let burn = Shares::new((total.get() * fraction / 100).max(1));
        let before = pool.reserves();

        let Ok(withdrawal) = pool.remove_liquidity(&SEEDER, burn) else {
            panic!("seeder holds every share");
        };

        // never more than the exact proportional claim
        prop_assert!(
            withdrawal.amount_a.widen() * total.widen() <= before.a().widen() * burn.widen()
        );
        prop_assert!(
            withdrawal.amount_b.widen() * total.widen() <= before.b().widen() * burn.widen()
        );

        if let Ok(minted) =
            pool.add_liquidity(&SEEDER, withdrawal.amount_a, withdrawal.amount_b)
        {
            prop_assert!(minted <= burn, "re-deposit minted {} > burned {}", minted, burn);
            prop_assert_eq!(pool.reserves(), before);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Price Movement Direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_selling_a_makes_a_cheaper(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let before = pool.reserves();
        let swap_in = (ra / 100).max(1);

        let Ok(_) = pool.swap(&TRADER, &asset_a(), Amount::new(swap_in)) else {
            return Ok(());
        };
        let after = pool.reserves();

        // price of A in B: reserve_b / reserve_a
        prop_assert!(
            after.b().widen() * before.a().widen() < before.b().widen() * after.a().widen()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 7: Integer Square Root Bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_integer_sqrt_bounds(x in any::<u128>(), y in any::<u128>()) {
        let n = U256::from(x) * U256::from(y);
        let r = integer_sqrt(n);
        prop_assert!(r * r <= n);
        let next = r + U256::one();
        // (r + 1)² may not fit in 256 bits, in which case it exceeds n anyway
        prop_assert!(next.checked_mul(next).map_or(true, |sq| sq > n));
    }

    #[test]
    fn prop_integer_sqrt_small(n in 0u64..=1_000_000u64) {
        let r = integer_sqrt(U256::from(n)).low_u64();
        prop_assert!(r * r <= n);
        prop_assert!((r + 1) * (r + 1) > n);
    }
}
