//! Chart-of-accounts repository.
//!
//! Accounts are administrative data: seeded at startup, read-only to the
//! posting paths.

use glint_core::coa::Account;
use glint_shared::AppError;
use glint_shared::AppResult;
use glint_shared::types::AccountId;

use crate::LedgerStore;

impl LedgerStore {
    /// Registers an account in the chart.
    ///
    /// # Errors
    ///
    /// Returns a conflict for a duplicate code and a validation error for
    /// an unknown parent.
    pub fn register_account(&self, account: Account) -> AppResult<Account> {
        let mut inner = self.write_inner()?;

        if inner.accounts_by_code.contains_key(&account.code) {
            return Err(AppError::Conflict(format!(
                "account code {} already exists",
                account.code
            )));
        }
        if let Some(parent_id) = account.parent_id {
            if !inner.accounts.contains_key(&parent_id) {
                return Err(AppError::Validation(format!(
                    "parent account {parent_id} not found"
                )));
            }
        }

        inner.accounts_by_code.insert(account.code.clone(), account.id);
        inner.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    /// Looks up an account by id.
    pub fn account(&self, id: AccountId) -> AppResult<Account> {
        self.read_inner()?
            .accounts
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("account {id} not found")))
    }

    /// Looks up an account by code.
    pub fn account_by_code(&self, code: &str) -> AppResult<Account> {
        let inner = self.read_inner()?;
        inner
            .accounts_by_code
            .get(code)
            .and_then(|id| inner.accounts.get(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("account {code} not found")))
    }

    /// Lists the chart ordered by code.
    pub fn list_accounts(&self) -> AppResult<Vec<Account>> {
        let inner = self.read_inner()?;
        let mut accounts: Vec<Account> = inner.accounts.values().cloned().collect();
        accounts.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(accounts)
    }
}
