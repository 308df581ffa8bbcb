//! Snapshot of the two pool reserves.

use core::fmt;

use primitive_types::U256;

use super::{Amount, Side};

/// The pool's recorded holdings of asset A and asset B.
///
/// Reserves are the engine's own bookkeeping. They are moved additively
/// and subtractively by the engine and never re-read from the asset
/// collaborators, so a direct donation to the pool's custody account does
/// not move the price.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, Reserves, Side};
///
/// let r = Reserves::new(Amount::new(20_000), Amount::new(15_000));
/// assert_eq!(r.on(Side::B), Amount::new(15_000));
/// assert_eq!(r.product().low_u128(), 300_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reserves {
    a: Amount,
    b: Amount,
}

impl Reserves {
    /// Empty reserves.
    pub const EMPTY: Self = Self {
        a: Amount::ZERO,
        b: Amount::ZERO,
    };

    /// Creates a reserve snapshot.
    #[must_use]
    pub const fn new(a: Amount, b: Amount) -> Self {
        Self { a, b }
    }

    /// Reserve of asset A.
    pub const fn a(&self) -> Amount {
        self.a
    }

    /// Reserve of asset B.
    pub const fn b(&self) -> Amount {
        self.b
    }

    /// Reserve on `side`.
    pub const fn on(&self, side: Side) -> Amount {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    /// Returns `(reserve_in, reserve_out)` for a swap selling `side_in`.
    #[must_use]
    pub const fn oriented(&self, side_in: Side) -> (Amount, Amount) {
        match side_in {
            Side::A => (self.a, self.b),
            Side::B => (self.b, self.a),
        }
    }

    /// Rebuilds reserves from swap-oriented values.
    #[must_use]
    pub const fn from_oriented(side_in: Side, reserve_in: Amount, reserve_out: Amount) -> Self {
        match side_in {
            Side::A => Self::new(reserve_in, reserve_out),
            Side::B => Self::new(reserve_out, reserve_in),
        }
    }

    /// Returns `true` if either reserve is zero.
    #[must_use]
    pub const fn has_empty_side(&self) -> bool {
        self.a.is_zero() || self.b.is_zero()
    }

    /// Returns `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    /// The constant-product invariant `k = reserve_a × reserve_b`.
    #[must_use]
    pub fn product(&self) -> U256 {
        self.a.widen() * self.b.widen()
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reserves(a={}, b={})", self.a, self.b)
    }
}
