//! Integer arithmetic for pool accounting.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe updates of
//! reserves and share balances, [`mul_div`] for every `a × b / d` ratio
//! the engine computes (256-bit intermediates, explicit rounding), and
//! [`integer_sqrt`] for seeding the share supply on the first deposit.
//!
//! No floating point is used on any accounting path.

mod checked;
mod rounding;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use rounding::{mul_div, narrow};
pub use sqrt::integer_sqrt;
