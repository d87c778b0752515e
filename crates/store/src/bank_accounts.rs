//! Bank account (payment method) repository.

use glint_core::posting::{BankAccount, BankAccountKind};
use glint_shared::types::BankAccountId;
use glint_shared::{AppError, AppResult};

use crate::LedgerStore;

/// Input for creating a bank account.
#[derive(Debug, Clone)]
pub struct CreateBankAccountInput {
    /// Unique short code, e.g. "BANK-USD".
    pub code: String,
    /// Display name.
    pub name: String,
    /// Payment method classification.
    pub kind: BankAccountKind,
    /// Declared currency of the account.
    pub currency: String,
    /// Code of the COA leaf this method posts to.
    pub ledger_account_code: String,
}

impl LedgerStore {
    /// Creates a bank account linked to a postable ledger account.
    ///
    /// # Errors
    ///
    /// Returns a conflict for a duplicate code, not-found for an unknown
    /// ledger account, and a validation error when the linked account is
    /// not a postable leaf or the currency is empty.
    pub fn create_bank_account(&self, input: CreateBankAccountInput) -> AppResult<BankAccount> {
        let mut inner = self.write_inner()?;

        if input.currency.trim().is_empty() {
            return Err(AppError::Validation("currency must not be empty".to_string()));
        }
        if inner.bank_accounts_by_code.contains_key(&input.code) {
            return Err(AppError::Conflict(format!(
                "bank account code {} already exists",
                input.code
            )));
        }

        let ledger_account = inner
            .accounts_by_code
            .get(&input.ledger_account_code)
            .and_then(|id| inner.accounts.get(id))
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "ledger account {} not found",
                    input.ledger_account_code
                ))
            })?;
        if !ledger_account.is_postable() {
            return Err(AppError::Validation(format!(
                "ledger account {} is not a postable leaf account",
                ledger_account.code
            )));
        }

        let bank_account = BankAccount {
            id: BankAccountId::new(),
            code: input.code,
            name: input.name,
            kind: input.kind,
            currency: input.currency,
            ledger_account_id: ledger_account.id,
            is_active: true,
        };

        inner
            .bank_accounts_by_code
            .insert(bank_account.code.clone(), bank_account.id);
        inner.bank_accounts.insert(bank_account.id, bank_account.clone());
        Ok(bank_account)
    }

    /// Looks up a bank account by id.
    pub fn bank_account(&self, id: BankAccountId) -> AppResult<BankAccount> {
        self.read_inner()?
            .bank_accounts
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("bank account {id} not found")))
    }

    /// Lists bank accounts ordered by code.
    pub fn list_bank_accounts(&self) -> AppResult<Vec<BankAccount>> {
        let inner = self.read_inner()?;
        let mut bank_accounts: Vec<BankAccount> = inner.bank_accounts.values().cloned().collect();
        bank_accounts.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(bank_accounts)
    }

    /// Soft-deactivates a bank account.
    ///
    /// Historical GL lines keep referencing the linked ledger account, so
    /// this never hard-deletes; the account simply stops accepting new
    /// postings.
    pub fn deactivate_bank_account(&self, id: BankAccountId) -> AppResult<BankAccount> {
        let mut inner = self.write_inner()?;
        let bank_account = inner
            .bank_accounts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("bank account {id} not found")))?;
        bank_account.is_active = false;
        Ok(bank_account.clone())
    }
}
