//! Reference implementations of [`AssetLedger`](crate::traits::AssetLedger).
//!
//! [`InMemoryLedger`] keeps balances for one asset in memory and holds the
//! pool's funds under a dedicated custody account. It is what the demo and
//! the test-suite run pools against, and a template for adapters to real
//! token ledgers.

mod in_memory;

pub use in_memory::InMemoryLedger;
