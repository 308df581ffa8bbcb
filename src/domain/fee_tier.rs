//! Swap fee rate built on [`BasisPoints`].

use core::fmt;

use primitive_types::U256;

use super::basis_points::BPS_DENOMINATOR;
use super::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;
use crate::math::mul_div;

/// The pool's swap fee, fixed for the life of the pool.
///
/// A `FeeTier` always holds a value in `[0, 10_000)` basis points: a 100%
/// fee would leave nothing for the pricing curve and is rejected at
/// construction. The fee is never transferred anywhere; it stays in the
/// pool as extra reserve backing for share holders.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, BasisPoints, FeeTier};
///
/// let tier = FeeTier::new(BasisPoints::new(30)).expect("valid fee");
/// // floor(20_000 × 9_970 / 10_000)
/// assert_eq!(tier.net_input(Amount::new(20_000)), Amount::new(19_940));
/// assert!(FeeTier::new(BasisPoints::new(10_000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.05% fee, typical for correlated pairs.
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee, the classic constant-product default.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee for volatile pairs.
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a fee tier from basis points.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `basis_points >= 10_000`.
    pub fn new(basis_points: BasisPoints) -> crate::error::Result<Self> {
        if basis_points.get() >= BPS_DENOMINATOR {
            return Err(AmmError::InvalidFee("fee must be below 10_000 bp"));
        }
        Ok(Self(basis_points))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Part of `amount_in` that reaches the pricing curve:
    /// `floor(amount_in × (10_000 − fee) / 10_000)`.
    ///
    /// Rounds down, so the pool always keeps at least the nominal fee.
    pub fn net_input(&self, amount_in: Amount) -> Amount {
        let scaled = amount_in.widen() * U256::from(self.0.complement().get());
        let net = scaled / U256::from(BPS_DENOMINATOR);
        // net <= amount_in, so it always fits back into u128
        Amount::new(net.low_u128())
    }

    /// Smallest gross input whose [`net_input`](Self::net_input) is at
    /// least `net`: `ceil(net × 10_000 / (10_000 − fee))`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds `u128`.
    pub fn gross_input(&self, net: Amount) -> crate::error::Result<Amount> {
        let complement = U256::from(self.0.complement().get());
        mul_div(net.get(), u128::from(BPS_DENOMINATOR), complement, Rounding::Up).map(Amount::new)
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = AmmError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(BasisPoints::new(value))
    }
}

impl From<FeeTier> for u32 {
    fn from(tier: FeeTier) -> Self {
        tier.0.get()
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
