//! Posting operations: AR receipts, AP payments, bank transfers.
//!
//! Each operation resolves its collaborator data, builds and validates the
//! posting through `glint-core`, and commits the subledger record and the
//! journal inside one write-lock hold. A failure at any point before the
//! inserts leaves the store untouched.

use glint_core::journal::{Journal, JournalSource, validate_lines};
use glint_core::posting::{
    ApPaymentInput, ApTransaction, ArReceiptInput, ArTransaction, BankTransfer, TransferInput,
    build_ap_payment, build_ar_receipt, build_transfer,
};
use glint_shared::{AppError, AppResult};
use tracing::info;

use crate::journals::commit_journal;
use crate::LedgerStore;

/// A committed AR receipt: the subledger record and its paired journal.
#[derive(Debug)]
pub struct PostedArReceipt {
    /// The accounts-receivable transaction.
    pub txn: ArTransaction,
    /// The paired journal.
    pub journal: Journal,
}

/// A committed AP payment.
#[derive(Debug)]
pub struct PostedApPayment {
    /// The accounts-payable transaction.
    pub txn: ApTransaction,
    /// The paired journal.
    pub journal: Journal,
}

/// A committed bank transfer.
#[derive(Debug)]
pub struct PostedTransfer {
    /// The transfer record.
    pub txn: BankTransfer,
    /// The paired journal.
    pub journal: Journal,
}

impl LedgerStore {
    /// Posts a customer receipt: one AR transaction plus a journal that
    /// debits the bank's ledger account and credits Accounts Receivable.
    pub fn post_ar_receipt(&self, input: ArReceiptInput) -> AppResult<PostedArReceipt> {
        let mut inner = self.write_inner()?;

        let bank = inner
            .bank_accounts
            .get(&input.bank_account_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("bank account {} not found", input.bank_account_id))
            })?;
        let receivable =
            inner.require_system_account(&self.system_codes().receivable, "accounts receivable")?;

        let posting = build_ar_receipt(&input, &bank, &receivable)?;
        let lines = validate_lines(&posting.lines, |id| inner.resolve(id))?;

        let journal = commit_journal(
            &mut inner,
            self.sequences(),
            input.txn_date,
            JournalSource::ArReceipt(posting.txn.id),
            input.remarks.clone(),
            lines,
        )?;
        inner.ar_transactions.insert(posting.txn.id, posting.txn.clone());

        info!(
            voucher = %journal.voucher_no,
            invoice = %posting.txn.invoice_id,
            amount = %posting.txn.amount,
            currency = %posting.txn.currency,
            local = %posting.txn.local_amount,
            "AR receipt posted"
        );
        Ok(PostedArReceipt {
            txn: posting.txn,
            journal,
        })
    }

    /// Posts a supplier payment: one AP transaction plus a journal that
    /// debits Accounts Payable and credits the bank's ledger account.
    pub fn post_ap_payment(&self, input: ApPaymentInput) -> AppResult<PostedApPayment> {
        let mut inner = self.write_inner()?;

        let bank = inner
            .bank_accounts
            .get(&input.bank_account_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("bank account {} not found", input.bank_account_id))
            })?;
        let payable =
            inner.require_system_account(&self.system_codes().payable, "accounts payable")?;

        let posting = build_ap_payment(&input, &bank, &payable)?;
        let lines = validate_lines(&posting.lines, |id| inner.resolve(id))?;

        let journal = commit_journal(
            &mut inner,
            self.sequences(),
            input.txn_date,
            JournalSource::ApPayment(posting.txn.id),
            input.remarks.clone(),
            lines,
        )?;
        inner.ap_transactions.insert(posting.txn.id, posting.txn.clone());

        info!(
            voucher = %journal.voucher_no,
            invoice = %posting.txn.invoice_id,
            amount = %posting.txn.amount,
            currency = %posting.txn.currency,
            local = %posting.txn.local_amount,
            "AP payment posted"
        );
        Ok(PostedApPayment {
            txn: posting.txn,
            journal,
        })
    }

    /// Posts a bank-to-bank transfer, booking an FX difference line when
    /// the legs diverge in functional-currency value.
    pub fn post_transfer(&self, input: TransferInput) -> AppResult<PostedTransfer> {
        let mut inner = self.write_inner()?;

        let from_bank = inner
            .bank_accounts
            .get(&input.from_bank_account_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "bank account {} not found",
                    input.from_bank_account_id
                ))
            })?;
        let to_bank = inner
            .bank_accounts
            .get(&input.to_bank_account_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "bank account {} not found",
                    input.to_bank_account_id
                ))
            })?;
        let fx_gain =
            inner.require_system_account(&self.system_codes().fx_gain, "exchange gain")?;
        let fx_loss =
            inner.require_system_account(&self.system_codes().fx_loss, "exchange loss")?;

        let posting = build_transfer(
            &input,
            &from_bank,
            &to_bank,
            &fx_gain,
            &fx_loss,
            self.functional_currency(),
        )?;
        let lines = validate_lines(&posting.lines, |id| inner.resolve(id))?;

        let journal = commit_journal(
            &mut inner,
            self.sequences(),
            input.txn_date,
            JournalSource::BankTransfer(posting.txn.id),
            input.remarks.clone(),
            lines,
        )?;
        inner.transfers.insert(posting.txn.id, posting.txn.clone());

        info!(
            voucher = %journal.voucher_no,
            from = %from_bank.code,
            to = %to_bank.code,
            diff = %posting.txn.diff,
            "bank transfer posted"
        );
        Ok(PostedTransfer {
            txn: posting.txn,
            journal,
        })
    }

    /// Fetches an AR transaction by id.
    pub fn ar_transaction(
        &self,
        id: glint_shared::types::ArTransactionId,
    ) -> AppResult<ArTransaction> {
        self.read_inner()?
            .ar_transactions
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("AR transaction {id} not found")))
    }

    /// Fetches an AP transaction by id.
    pub fn ap_transaction(
        &self,
        id: glint_shared::types::ApTransactionId,
    ) -> AppResult<ApTransaction> {
        self.read_inner()?
            .ap_transactions
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("AP transaction {id} not found")))
    }

    /// Fetches a transfer record by id.
    pub fn transfer(&self, id: glint_shared::types::TransferId) -> AppResult<BankTransfer> {
        self.read_inner()?
            .transfers
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("transfer {id} not found")))
    }
}
