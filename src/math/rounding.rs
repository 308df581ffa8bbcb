//! Multiply-then-divide with explicit rounding.
//!
//! Every ratio in the engine has the shape `a × b / d`: swap output,
//! minted shares, proportional redemption, exact-out input. [`mul_div`]
//! forms the product in 256 bits so it never overflows, then divides with
//! an explicit [`Rounding`] direction.
//!
//! # Convention
//!
//! **Always round against the caller** (pool-favourable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`] |
//! | Shares minted | [`Rounding::Down`] |
//! | Redeemed amounts | [`Rounding::Down`] |
//! | Exact-out input | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use hydra_cpmm::domain::Rounding;
//! use hydra_cpmm::math::mul_div;
//! use primitive_types::U256;
//!
//! assert_eq!(mul_div(10, 1, U256::from(3u8), Rounding::Down), Ok(3));
//! assert_eq!(mul_div(10, 1, U256::from(3u8), Rounding::Up), Ok(4));
//! // u128::MAX × 2 / 4 would overflow a u128 product
//! assert_eq!(
//!     mul_div(u128::MAX, 2, U256::from(4u8), Rounding::Down),
//!     Ok(u128::MAX / 2)
//! );
//! ```

use primitive_types::U256;

use crate::domain::Rounding;
use crate::error::AmmError;

/// Computes `a × b / denominator` with the given rounding.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in a `u128`.
pub fn mul_div(
    a: u128,
    b: u128,
    denominator: U256,
    rounding: Rounding,
) -> crate::error::Result<u128> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    // (2^128 - 1)^2 < 2^256: the product cannot overflow
    let product = U256::from(a) * U256::from(b);
    let (quotient, remainder) = product.div_mod(denominator);
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        quotient + U256::one()
    } else {
        quotient
    };
    narrow(quotient)
}

/// Narrows a 256-bit value back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if `value` exceeds `u128::MAX`.
pub fn narrow(value: U256) -> crate::error::Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(AmmError::Overflow("quotient exceeds u128"));
    }
    Ok(value.low_u128())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: u128) -> U256 {
        U256::from(v)
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(
            mul_div(1, 1, U256::zero(), Rounding::Down),
            Err(AmmError::DivisionByZero)
        );
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(mul_div(20, 5, d(10), Rounding::Down), Ok(10));
        assert_eq!(mul_div(20, 5, d(10), Rounding::Up), Ok(10));
    }

    #[test]
    fn remainder_rounds_as_requested() {
        assert_eq!(mul_div(9, 1, d(10), Rounding::Down), Ok(0));
        assert_eq!(mul_div(9, 1, d(10), Rounding::Up), Ok(1));
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(mul_div(0, u128::MAX, d(7), Rounding::Up), Ok(0));
    }

    #[test]
    fn wide_product_narrow_quotient() {
        assert_eq!(
            mul_div(u128::MAX, u128::MAX, d(u128::MAX), Rounding::Down),
            Ok(u128::MAX)
        );
    }

    #[test]
    fn quotient_overflow() {
        assert!(matches!(
            mul_div(u128::MAX, 2, d(1), Rounding::Down),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn round_up_at_the_edge_overflows() {
        // MAX × MAX / (MAX - 1) is just above MAX
        assert!(mul_div(u128::MAX, u128::MAX, d(u128::MAX - 1), Rounding::Up).is_err());
    }

    #[test]
    fn swap_scenario_output() {
        // 19_940 × 20_000 / (20_000 + 19_940) = 9_984.97 → 9_984
        assert_eq!(mul_div(19_940, 20_000, d(39_940), Rounding::Down), Ok(9_984));
    }
}
