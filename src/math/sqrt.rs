//! Deterministic integer square root.

use primitive_types::U256;

/// Largest `z` such that `z × z <= n`.
///
/// Runs Newton's method on integers with a fixed seed so every
/// implementation mints the same initial share count for the same deposit:
///
/// 1. `n == 0` → `0`; `n ∈ {1, 2, 3}` → `1`.
/// 2. Otherwise seed `x₀ = n / 2 + 1` and iterate
///    `x_{k+1} = (n / x_k + x_k) / 2` while the sequence strictly
///    decreases; the last decreasing term is the result.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::math::integer_sqrt;
/// use primitive_types::U256;
///
/// assert_eq!(integer_sqrt(U256::from(300_000_000u64)), U256::from(17_320u64));
/// assert_eq!(integer_sqrt(U256::from(3u8)), U256::one());
/// ```
#[must_use]
pub fn integer_sqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    if n <= U256::from(3u8) {
        return U256::one();
    }
    let two = U256::from(2u8);
    let mut z = n;
    let mut x = n / two + U256::one();
    while x < z {
        z = x;
        x = (n / x + x) / two;
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isqrt(n: u128) -> u128 {
        integer_sqrt(U256::from(n)).low_u128()
    }

    #[test]
    fn small_values() {
        let expected = [0u128, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as u128), *want, "isqrt({n})");
        }
    }

    #[test]
    fn perfect_squares() {
        for root in [2u128, 10, 1_000, 1_000_000, 4_294_967_295] {
            assert_eq!(isqrt(root * root), root);
            assert_eq!(isqrt(root * root - 1), root - 1);
            assert_eq!(isqrt(root * root + 1), root);
        }
    }

    #[test]
    fn initial_deposit_scenario() {
        // floor(sqrt(20_000 × 15_000))
        assert_eq!(isqrt(300_000_000), 17_320);
    }

    #[test]
    fn floor_bound_holds_for_sampled_values() {
        let mut n: u128 = 7;
        for _ in 0..200 {
            let z = isqrt(n);
            assert!(z * z <= n);
            assert!((z + 1) * (z + 1) > n);
            n = n.wrapping_mul(31).wrapping_add(17) % (1u128 << 100);
        }
    }

    #[test]
    fn full_width_input() {
        let root = integer_sqrt(U256::MAX);
        assert_eq!(root, U256::from(u128::MAX));
    }
}
