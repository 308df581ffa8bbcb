//! Constant Product AMM walkthrough (Uniswap V2 style).
//!
//! Seeds a pool, trades against it in both directions, shows a slippage
//! limit and a rolled-back swap, then redeems the liquidity. Pool logs are
//! printed through `tracing-subscriber`; set `RUST_LOG=debug` to see quotes.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use hydra_cpmm::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    println!("=== Constant Product AMM (x · y = k) ===\n");

    // ── 1. Assets, accounts and ledgers ─────────────────────────────────
    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    let custody = AccountId::from_bytes([0xff; 32]);
    let alice = AccountId::from_bytes([0xa1; 32]);
    let bob = AccountId::from_bytes([0xb0; 32]);

    let config = PoolConfig::for_assets(usdc, weth, FeeTier::TIER_0_30_PERCENT)?;
    let pool = ConstantProductPool::new(
        config,
        InMemoryLedger::new(usdc, custody),
        InMemoryLedger::new(weth, custody),
    )?;
    for account in [&alice, &bob] {
        pool.ledger_a().mint(account, Amount::new(1_000_000))?;
        pool.ledger_b().mint(account, Amount::new(1_000_000))?;
    }
    println!("Pool: {usdc} / {weth}");
    println!("  Fee tier: {}", pool.config().fee_tier());

    // ── 2. Seed the pool ────────────────────────────────────────────────
    let seeded = pool.add_liquidity(&alice, Amount::new(20_000), Amount::new(20_000))?;
    println!("\n--- Alice seeds 20 000 / 20 000 ---");
    println!("  Shares minted: {seeded}");
    println!("  Reserves:      {}", pool.reserves());
    println!("  k:             {}", pool.invariant());

    // ── 3. Quote, then swap A → B ───────────────────────────────────────
    let quote = pool.quote_swap_output(&usdc, Amount::new(20_000))?;
    println!("\n--- Bob sells 20 000 USDC ---");
    println!("  Quote:    {quote}");
    let out_b = pool.swap(&bob, &usdc, Amount::new(20_000))?;
    println!("  Received: {out_b} WETH");
    println!("  Reserves: {}", pool.reserves());
    println!("  k:        {}", pool.invariant());

    // ── 4. Swap the proceeds back B → A ─────────────────────────────────
    let out_a = pool.swap(&bob, &weth, out_b)?;
    println!("\n--- Bob sells the {out_b} WETH back ---");
    println!("  Received: {out_a} USDC (lost {} to fee and rounding)", 20_000 - out_a.get());

    // ── 5. Exact-out quote and a slippage limit ─────────────────────────
    let needed = pool.quote_swap_input(&weth, Amount::new(1_000))?;
    println!("\n--- Buying exactly 1 000 WETH ---");
    println!("  Requires {} USDC (pays {})", needed.amount_in(), needed.amount_out());
    let too_greedy = Amount::new(needed.amount_out().get() + 1);
    match pool.swap_with_limit(&bob, &usdc, needed.amount_in(), too_greedy) {
        Err(err) => println!("  Limit {too_greedy} rejected: {err}"),
        Ok(out) => println!("  Unexpectedly filled: {out}"),
    }

    // ── 6. A transfer failure rolls the swap back ───────────────────────
    pool.ledger_b().freeze(&bob);
    let before = pool.reserves();
    if let Err(err) = pool.swap(&bob, &usdc, Amount::new(5_000)) {
        println!("\n--- Payout to a frozen account ---");
        println!("  Error:    {err}");
        println!("  Reserves unchanged: {}", pool.reserves() == before);
    }
    pool.ledger_b().unfreeze(&bob);

    // ── 7. Redeem everything ────────────────────────────────────────────
    let withdrawal = pool.remove_liquidity(&alice, seeded)?;
    println!("\n--- Alice redeems {seeded} shares ---");
    println!(
        "  Received: {} USDC + {} WETH",
        withdrawal.amount_a, withdrawal.amount_b
    );
    println!("  Reserves: {}", pool.reserves());

    // ── 8. Event journal ────────────────────────────────────────────────
    println!("\n--- Events ---");
    for event in pool.drain_events() {
        println!("  [{}] {event}", event.kind());
    }

    Ok(())
}
