//! Pool-share token bookkeeping.
//!
//! Unlike the two pooled assets, the share token is owned by the pool: it
//! mints and burns directly and its total supply is authoritative.

use std::collections::HashMap;

use crate::domain::{AccountId, Shares};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// Share balances and total supply.
///
/// Invariant: `total == Σ balances`. Zero balances are pruned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ShareLedger {
    balances: HashMap<AccountId, Shares>,
    total: Shares,
}

impl ShareLedger {
    pub(crate) const fn total(&self) -> Shares {
        self.total
    }

    pub(crate) fn balance_of(&self, account: &AccountId) -> Shares {
        self.balances.get(account).copied().unwrap_or(Shares::ZERO)
    }

    /// Credits `shares` to `account` and grows the supply.
    pub(crate) fn mint(&mut self, account: &AccountId, shares: Shares) -> Result<()> {
        let total = self.total.safe_add(&shares)?;
        let balance = self.balance_of(account).safe_add(&shares)?;
        self.total = total;
        self.set_balance(account, balance);
        Ok(())
    }

    /// Debits `shares` from `account` and shrinks the supply.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientShares`] if `account` holds fewer.
    pub(crate) fn burn(&mut self, account: &AccountId, shares: Shares) -> Result<()> {
        let have = self.balance_of(account);
        let balance = have
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares { have, need: shares })?;
        self.total = self.total.safe_sub(&shares)?;
        self.set_balance(account, balance);
        Ok(())
    }

    /// Moves `shares` from `from` to `to`; the supply is unchanged.
    pub(crate) fn transfer(&mut self, from: &AccountId, to: &AccountId, shares: Shares) -> Result<()> {
        let have = self.balance_of(from);
        let debited = have
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares { have, need: shares })?;
        if from == to {
            return Ok(());
        }
        let credited = self.balance_of(to).safe_add(&shares)?;
        self.set_balance(from, debited);
        self.set_balance(to, credited);
        Ok(())
    }

    /// Puts `account` and the supply back to previously observed values.
    pub(crate) fn restore(&mut self, account: &AccountId, balance: Shares, total: Shares) {
        self.set_balance(account, balance);
        self.total = total;
    }

    fn set_balance(&mut self, account: &AccountId, balance: Shares) {
        if balance.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, balance);
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn account(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    #[test]
    fn mint_and_burn_track_supply() {
        let mut ledger = ShareLedger::default();
        let Ok(()) = ledger.mint(&account(1), Shares::new(100)) else {
            panic!("mint failed");
        };
        let Ok(()) = ledger.mint(&account(2), Shares::new(50)) else {
            panic!("mint failed");
        };
        assert_eq!(ledger.total(), Shares::new(150));

        let Ok(()) = ledger.burn(&account(1), Shares::new(100)) else {
            panic!("burn failed");
        };
        assert_eq!(ledger.total(), Shares::new(50));
        assert_eq!(ledger.balance_of(&account(1)), Shares::ZERO);
        assert!(!ledger.balances.contains_key(&account(1)));
    }

    #[test]
    fn burn_more_than_held_is_rejected() {
        let mut ledger = ShareLedger::default();
        let Ok(()) = ledger.mint(&account(1), Shares::new(5)) else {
            panic!("mint failed");
        };
        assert_eq!(
            ledger.burn(&account(1), Shares::new(9)),
            Err(AmmError::InsufficientShares {
                have: Shares::new(5),
                need: Shares::new(9),
            })
        );
        assert_eq!(ledger.total(), Shares::new(5));
    }

    #[test]
    fn transfer_keeps_supply() {
        let mut ledger = ShareLedger::default();
        let Ok(()) = ledger.mint(&account(1), Shares::new(10)) else {
            panic!("mint failed");
        };
        let Ok(()) = ledger.transfer(&account(1), &account(2), Shares::new(4)) else {
            panic!("transfer failed");
        };
        assert_eq!(ledger.balance_of(&account(1)), Shares::new(6));
        assert_eq!(ledger.balance_of(&account(2)), Shares::new(4));
        assert_eq!(ledger.total(), Shares::new(10));
    }

    #[test]
    fn self_transfer_is_noop() {
        let mut ledger = ShareLedger::default();
        let Ok(()) = ledger.mint(&account(1), Shares::new(10)) else {
            panic!("mint failed");
        };
        let Ok(()) = ledger.transfer(&account(1), &account(1), Shares::new(10)) else {
            panic!("transfer failed");
        };
        assert_eq!(ledger.balance_of(&account(1)), Shares::new(10));
    }

    #[test]
    fn restore_undoes_burn() {
        let mut ledger = ShareLedger::default();
        let Ok(()) = ledger.mint(&account(1), Shares::new(10)) else {
            panic!("mint failed");
        };
        let before = ledger.clone();
        let Ok(()) = ledger.burn(&account(1), Shares::new(3)) else {
            panic!("burn failed");
        };
        ledger.restore(&account(1), Shares::new(10), Shares::new(10));
        assert_eq!(ledger, before);
    }
}
