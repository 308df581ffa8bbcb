//! # Hydra CPMM
//!
//! Constant-product automated market maker engine for a single pair of
//! fungible assets: the reserve ledger, the pool-share token and the
//! accounting rules that move between them.
//!
//! The engine never holds assets itself. Each side of the pair is backed by
//! an external [`AssetLedger`](traits::AssetLedger) collaborator; the pool
//! asks it to pull from or push to a caller and keeps its own record of the
//! reserves. All arithmetic is integer-only with 256-bit intermediates, and
//! every rounding favours the pool.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | yes | `Serialize`/`Deserialize` for config, domain types and events |
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//!
//! let custody = AccountId::from_bytes([0xff; 32]);
//! let alice = AccountId::from_bytes([0xa1; 32]);
//! let usdc = AssetId::from_bytes([1; 32]);
//! let weth = AssetId::from_bytes([2; 32]);
//!
//! // 1. Configure the pair and the fee
//! let config = PoolConfig::for_assets(usdc, weth, FeeTier::TIER_0_30_PERCENT)
//!     .expect("distinct assets");
//!
//! // 2. Create the pool over one ledger per asset
//! let pool = ConstantProductPool::new(
//!     config,
//!     InMemoryLedger::new(usdc, custody),
//!     InMemoryLedger::new(weth, custody),
//! )
//! .expect("ledgers match config");
//! pool.ledger_a().mint(&alice, Amount::new(1_000_000)).expect("mint");
//! pool.ledger_b().mint(&alice, Amount::new(1_000_000)).expect("mint");
//!
//! // 3. Seed it: the first deposit mints √(a × b) shares
//! let shares = pool
//!     .add_liquidity(&alice, Amount::new(20_000), Amount::new(15_000))
//!     .expect("deposit");
//! assert_eq!(shares, Shares::new(17_320));
//!
//! // 4. Trade against it
//! let out = pool.swap(&alice, &usdc, Amount::new(1_000)).expect("swap");
//! assert!(out < Amount::new(750));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │     Caller       │  swap / add_liquidity / remove_liquidity
//! └────────┬─────────┘
//!          │ call gate (one mutating call at a time, no re-entry)
//!          ▼
//! ┌──────────────────┐
//! │ ConstantProduct  │  reserves + share ledger behind an RwLock,
//! │      Pool        │  snapshot / restore around collaborator calls
//! └────────┬─────────┘
//!          │ transfer_into / transfer_out
//!          ▼
//! ┌──────────────────┐
//! │   AssetLedger ×2 │  external fungible-asset collaborators
//! └──────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`FeeTier`](domain::FeeTier), [`PoolEvent`](domain::PoolEvent), etc. |
//! | [`traits`] | Core abstractions: [`AssetLedger`](traits::AssetLedger), [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): asset pair and fee |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) reference collaborator |
//! | [`math`]   | Checked arithmetic, 256-bit `mul_div`, integer square root |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
