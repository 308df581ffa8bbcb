//! Pure results of pricing a swap, deposit or withdrawal.

use core::fmt;

use super::{Amount, Shares};

/// Priced swap against a reserve snapshot.
///
/// Produced by both exact-in and exact-out quoting. `reserve_in` and
/// `reserve_out` are the reserves the quote was priced against, so a caller
/// can tell whether the pool moved before executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapQuote {
    amount_in: Amount,
    net_input: Amount,
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
}

impl SwapQuote {
    pub(crate) const fn new(
        amount_in: Amount,
        net_input: Amount,
        amount_out: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Self {
        Self {
            amount_in,
            net_input,
            amount_out,
            reserve_in,
            reserve_out,
        }
    }

    /// Input the caller pays.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Input after the fee, as seen by the pricing curve.
    pub const fn net_input(&self) -> Amount {
        self.net_input
    }

    /// Output the pool pays.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Reserve of the input asset before the swap.
    pub const fn reserve_in(&self) -> Amount {
        self.reserve_in
    }

    /// Reserve of the output asset before the swap.
    pub const fn reserve_out(&self) -> Amount {
        self.reserve_out
    }

    /// Fee retained by the pool: `amount_in − net_input`.
    pub const fn fee(&self) -> Amount {
        Amount::new(self.amount_in.get() - self.net_input.get())
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote(in={}, out={}, fee={})",
            self.amount_in,
            self.amount_out,
            self.fee()
        )
    }
}

/// Assets paid out for burning pool shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Withdrawal {
    /// Amount of asset A returned.
    pub amount_a: Amount,
    /// Amount of asset B returned.
    pub amount_b: Amount,
}

impl Withdrawal {
    /// Creates a withdrawal result.
    #[must_use]
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }
}

/// Shares a deposit would mint, with the amounts it would pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositQuote {
    /// Amount of asset A pulled from the caller.
    pub amount_a: Amount,
    /// Amount of asset B pulled from the caller.
    pub amount_b: Amount,
    /// Shares minted to the caller.
    pub shares: Shares,
    /// `true` if this deposit seeds an empty pool.
    pub initial: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_is_difference_between_gross_and_net() {
        let q = SwapQuote::new(
            Amount::new(20_000),
            Amount::new(19_940),
            Amount::new(9_984),
            Amount::new(20_000),
            Amount::new(20_000),
        );
        assert_eq!(q.fee(), Amount::new(60));
        assert_eq!(q.to_string(), "SwapQuote(in=20000, out=9984, fee=60)");
    }
}
