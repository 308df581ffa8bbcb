//! Explicit rounding direction for integer division.

/// Rounding direction for every division in the engine.
///
/// The engine always rounds in the pool's favour: payouts (swap output,
/// redemption, minted shares) round [`Down`](Self::Down); amounts charged
/// to the caller (exact-out input) round [`Up`](Self::Up).
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(Rounding::Up.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_is_up() {
        assert!(Rounding::Up.is_up());
        assert!(!Rounding::Up.is_down());
    }

    #[test]
    fn down_is_down() {
        assert!(Rounding::Down.is_down());
        assert!(!Rounding::Down.is_up());
    }
}
