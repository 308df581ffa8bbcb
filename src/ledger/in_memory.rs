//! In-memory fungible-asset ledger.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;
use crate::traits::AssetLedger;

/// Balances of a single asset, plus a custody account for the pool.
///
/// `transfer_into` debits the caller and credits custody; `transfer_out`
/// does the reverse. Accounts can be frozen to make transfers touching them
/// fail, which is how callers exercise a pool's rollback paths.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{AccountId, Amount, AssetId};
/// use hydra_cpmm::ledger::InMemoryLedger;
/// use hydra_cpmm::traits::AssetLedger;
///
/// let custody = AccountId::from_bytes([0xff; 32]);
/// let alice = AccountId::from_bytes([1; 32]);
/// let ledger = InMemoryLedger::new(AssetId::from_bytes([7; 32]), custody);
///
/// ledger.mint(&alice, Amount::new(100)).expect("mint");
/// ledger.transfer_into(&alice, Amount::new(40)).expect("pull");
/// assert_eq!(ledger.balance_of(&alice), Amount::new(60));
/// assert_eq!(ledger.custody_balance(), Amount::new(40));
/// ```
#[derive(Debug)]
pub struct InMemoryLedger {
    asset: AssetId,
    custody: AccountId,
    balances: Mutex<HashMap<AccountId, Amount>>,
    frozen: Mutex<HashSet<AccountId>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger for `asset` whose pool funds sit in `custody`.
    #[must_use]
    pub fn new(asset: AssetId, custody: AccountId) -> Self {
        Self {
            asset,
            custody,
            balances: Mutex::new(HashMap::new()),
            frozen: Mutex::new(HashSet::new()),
        }
    }

    /// The custody account holding pool funds.
    #[must_use]
    pub const fn custody(&self) -> AccountId {
        self.custody
    }

    /// Credits `amount` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Overflow`] if the balance would overflow.
    pub fn mint(&self, account: &AccountId, amount: Amount) -> Result<(), TransferError> {
        let mut balances = self.balances.lock();
        let balance = balances.entry(*account).or_insert(Amount::ZERO);
        *balance = balance
            .checked_add(&amount)
            .ok_or(TransferError::Overflow)?;
        Ok(())
    }

    /// Balance held by `account`.
    #[must_use]
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances
            .lock()
            .get(account)
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Balance held in pool custody.
    #[must_use]
    pub fn custody_balance(&self) -> Amount {
        self.balance_of(&self.custody)
    }

    /// Makes every transfer debiting or crediting `account` fail.
    pub fn freeze(&self, account: &AccountId) {
        self.frozen.lock().insert(*account);
    }

    /// Lifts a previous [`freeze`](Self::freeze).
    pub fn unfreeze(&self, account: &AccountId) {
        self.frozen.lock().remove(account);
    }

    fn move_balance(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        {
            let frozen = self.frozen.lock();
            if frozen.contains(from) || frozen.contains(to) {
                return Err(TransferError::Rejected("account frozen".to_string()));
            }
        }

        let mut balances = self.balances.lock();
        let have = balances.get(from).copied().unwrap_or(Amount::ZERO);
        let debited = have
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientBalance {
                account: *from,
                have,
                need: amount,
            })?;
        if from == to {
            return Ok(());
        }
        let credited = balances
            .get(to)
            .copied()
            .unwrap_or(Amount::ZERO)
            .checked_add(&amount)
            .ok_or(TransferError::Overflow)?;

        balances.insert(*from, debited);
        balances.insert(*to, credited);
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn asset_id(&self) -> AssetId {
        self.asset
    }

    fn transfer_into(&self, from: &AccountId, amount: Amount) -> Result<(), TransferError> {
        self.move_balance(from, &self.custody, amount)
    }

    fn transfer_out(&self, to: &AccountId, amount: Amount) -> Result<(), TransferError> {
        self.move_balance(&self.custody, to, amount)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn account(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    fn ledger() -> InMemoryLedger {
        InMemoryLedger::new(AssetId::from_bytes([9; 32]), account(0xff))
    }

    #[test]
    fn transfer_into_moves_to_custody() {
        let ledger = ledger();
        let Ok(()) = ledger.mint(&account(1), Amount::new(500)) else {
            panic!("mint failed");
        };
        let Ok(()) = ledger.transfer_into(&account(1), Amount::new(200)) else {
            panic!("pull failed");
        };
        assert_eq!(ledger.balance_of(&account(1)), Amount::new(300));
        assert_eq!(ledger.custody_balance(), Amount::new(200));
    }

    #[test]
    fn transfer_out_moves_from_custody() {
        let ledger = ledger();
        let Ok(()) = ledger.mint(&ledger.custody(), Amount::new(50)) else {
            panic!("mint failed");
        };
        let Ok(()) = ledger.transfer_out(&account(2), Amount::new(50)) else {
            panic!("push failed");
        };
        assert_eq!(ledger.balance_of(&account(2)), Amount::new(50));
        assert_eq!(ledger.custody_balance(), Amount::ZERO);
    }

    #[test]
    fn insufficient_balance_moves_nothing() {
        let ledger = ledger();
        let Ok(()) = ledger.mint(&account(1), Amount::new(10)) else {
            panic!("mint failed");
        };
        let result = ledger.transfer_into(&account(1), Amount::new(11));
        assert_eq!(
            result,
            Err(TransferError::InsufficientBalance {
                account: account(1),
                have: Amount::new(10),
                need: Amount::new(11),
            })
        );
        assert_eq!(ledger.balance_of(&account(1)), Amount::new(10));
        assert_eq!(ledger.custody_balance(), Amount::ZERO);
    }

    #[test]
    fn frozen_account_rejects_transfers() {
        let ledger = ledger();
        let Ok(()) = ledger.mint(&account(1), Amount::new(10)) else {
            panic!("mint failed");
        };
        ledger.freeze(&account(1));
        assert!(matches!(
            ledger.transfer_into(&account(1), Amount::new(1)),
            Err(TransferError::Rejected(_))
        ));
        ledger.unfreeze(&account(1));
        assert!(ledger.transfer_into(&account(1), Amount::new(1)).is_ok());
    }

    #[test]
    fn mint_overflow_is_reported() {
        let ledger = ledger();
        let Ok(()) = ledger.mint(&account(1), Amount::MAX) else {
            panic!("mint failed");
        };
        assert_eq!(
            ledger.mint(&account(1), Amount::new(1)),
            Err(TransferError::Overflow)
        );
    }

    #[test]
    fn zero_transfer_succeeds() {
        let ledger = ledger();
        assert!(ledger.transfer_into(&account(3), Amount::ZERO).is_ok());
    }
}
