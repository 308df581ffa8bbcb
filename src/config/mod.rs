//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a constant-product pool:
//! the ordered asset pair and the swap fee. It is validated once, when the
//! pool is built, and never changes afterwards.

mod pool_config;

pub use pool_config::PoolConfig;
