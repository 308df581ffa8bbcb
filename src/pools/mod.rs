//! Pool implementations.
//!
//! [`ConstantProductPool`] is the reserve ledger and accounting engine for a
//! single asset pair. It owns the pool-share token and delegates the two
//! pooled assets to [`AssetLedger`](crate::traits::AssetLedger)
//! collaborators.

mod call_gate;
pub mod constant_product;
mod share_ledger;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
