//! In-process transactional ledger store for Glint.
//!
//! This crate is the collaborator side of the posting engine: it owns the
//! chart of accounts, bank accounts, journals, subledger records, and the
//! named sequence counters, and it provides the multi-record unit of work
//! the core validates against.
//!
//! Every posting operation validates through `glint-core` first and then
//! performs all of its inserts inside a single write-lock critical
//! section. Either everything commits or nothing does, and no reader ever
//! observes a journal mid-construction. Voucher numbers are minted after
//! validation has passed, inside the same critical section, so a rejected
//! posting never consumes a number.

mod accounts;
mod bank_accounts;
mod journals;
mod posting;
mod revaluation;
pub mod seed;
pub mod sequence;

pub use bank_accounts::CreateBankAccountInput;
pub use journals::{CreateJournalInput, JournalFilter};
pub use posting::{PostedApPayment, PostedArReceipt, PostedTransfer};
pub use revaluation::{RevaluationInput, RevaluationOutcome};

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use glint_core::coa::Account;
use glint_core::journal::Journal;
use glint_core::posting::{ApTransaction, ArTransaction, BankAccount, BankTransfer};
use glint_core::revaluation::Revaluation;
use glint_shared::config::LedgerConfig;
use glint_shared::types::{
    AccountId, ApTransactionId, ArTransactionId, BankAccountId, JournalId, RevaluationId,
    TransferId,
};
use glint_shared::{AppError, AppResult};

use crate::sequence::SequenceRegistry;

/// Chart-of-accounts codes of the control accounts the engine posts to.
#[derive(Debug, Clone)]
pub struct SystemAccountCodes {
    /// Accounts Receivable control account.
    pub receivable: String,
    /// Accounts Payable control account.
    pub payable: String,
    /// Exchange gain account.
    pub fx_gain: String,
    /// Exchange loss account.
    pub fx_loss: String,
}

impl From<&LedgerConfig> for SystemAccountCodes {
    fn from(config: &LedgerConfig) -> Self {
        Self {
            receivable: config.receivable_account.clone(),
            payable: config.payable_account.clone(),
            fx_gain: config.fx_gain_account.clone(),
            fx_loss: config.fx_loss_account.clone(),
        }
    }
}

/// The ledger store.
///
/// Cheap to share behind an `Arc`; all interior state is lock-guarded.
pub struct LedgerStore {
    functional_currency: String,
    system: SystemAccountCodes,
    sequences: SequenceRegistry,
    inner: RwLock<StoreInner>,
}

#[derive(Default)]
pub(crate) struct StoreInner {
    pub(crate) accounts: HashMap<AccountId, Account>,
    pub(crate) accounts_by_code: HashMap<String, AccountId>,
    pub(crate) bank_accounts: HashMap<BankAccountId, BankAccount>,
    pub(crate) bank_accounts_by_code: HashMap<String, BankAccountId>,
    pub(crate) journals: HashMap<JournalId, Journal>,
    pub(crate) journal_order: Vec<JournalId>,
    pub(crate) voucher_index: HashSet<String>,
    pub(crate) ar_transactions: HashMap<ArTransactionId, ArTransaction>,
    pub(crate) ap_transactions: HashMap<ApTransactionId, ApTransaction>,
    pub(crate) transfers: HashMap<TransferId, BankTransfer>,
    pub(crate) revaluations: HashMap<RevaluationId, Revaluation>,
    pub(crate) revaluation_index: HashMap<(BankAccountId, NaiveDate), RevaluationId>,
}

impl StoreInner {
    /// Account lookup closure target for `validate_lines`.
    pub(crate) fn resolve(&self, id: AccountId) -> Option<Account> {
        self.accounts.get(&id).cloned()
    }

    /// Resolves a configured control account, failing as an internal error
    /// when the chart was seeded without it.
    pub(crate) fn require_system_account(&self, code: &str, role: &str) -> AppResult<Account> {
        self.accounts_by_code
            .get(code)
            .and_then(|id| self.accounts.get(id))
            .cloned()
            .ok_or_else(|| {
                AppError::Internal(format!("{role} account {code} is not in the chart"))
            })
    }
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(functional_currency: impl Into<String>, system: SystemAccountCodes) -> Self {
        Self {
            functional_currency: functional_currency.into(),
            system,
            sequences: SequenceRegistry::new(),
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// Creates an empty store from ledger configuration.
    #[must_use]
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(config.functional_currency.clone(), SystemAccountCodes::from(config))
    }

    /// The currency all ledger balances are ultimately expressed in.
    #[must_use]
    pub fn functional_currency(&self) -> &str {
        &self.functional_currency
    }

    pub(crate) fn system_codes(&self) -> &SystemAccountCodes {
        &self.system
    }

    pub(crate) fn sequences(&self) -> &SequenceRegistry {
        &self.sequences
    }

    pub(crate) fn read_inner(&self) -> AppResult<RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|_| AppError::Internal("ledger store lock poisoned".to_string()))
    }

    pub(crate) fn write_inner(&self) -> AppResult<RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|_| AppError::Internal("ledger store lock poisoned".to_string()))
    }
}
