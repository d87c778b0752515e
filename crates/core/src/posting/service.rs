//! Pure posting builders for AR receipts, AP payments, and transfers.

use chrono::Utc;
use glint_shared::types::{
    ApTransactionId, ArTransactionId, TransferId, round2, to_local,
};
use rust_decimal::Decimal;

use super::error::PostingError;
use super::types::{
    ApPaymentInput, ApTransaction, ArReceiptInput, ArTransaction, BankAccount, BankTransfer,
    TransferInput,
};
use crate::coa::Account;
use crate::journal::{JournalSource, LineInput};

/// An AR receipt ready to commit: the subledger record and the journal
/// lines that settle it.
#[derive(Debug)]
pub struct ArPosting {
    /// The accounts-receivable subledger transaction.
    pub txn: ArTransaction,
    /// The journal lines (debit bank, credit AR), linked back to `txn`.
    pub lines: Vec<LineInput>,
}

/// An AP payment ready to commit.
#[derive(Debug)]
pub struct ApPosting {
    /// The accounts-payable subledger transaction.
    pub txn: ApTransaction,
    /// The journal lines (debit AP, credit bank), linked back to `txn`.
    pub lines: Vec<LineInput>,
}

/// A bank transfer ready to commit.
#[derive(Debug)]
pub struct TransferPosting {
    /// The transfer record.
    pub txn: BankTransfer,
    /// Two lines when the legs agree in local value, three when an FX
    /// difference line is needed.
    pub lines: Vec<LineInput>,
}

fn check_bank(bank: &BankAccount, currency: &str) -> Result<(), PostingError> {
    if !bank.is_active {
        return Err(PostingError::BankAccountInactive {
            code: bank.code.clone(),
        });
    }
    if bank.currency != currency {
        return Err(PostingError::CurrencyMismatch {
            code: bank.code.clone(),
            expected: bank.currency.clone(),
            got: currency.to_string(),
        });
    }
    Ok(())
}

fn check_amount(amount: Decimal, rate: Decimal) -> Result<(), PostingError> {
    if amount <= Decimal::ZERO {
        return Err(PostingError::NonPositiveAmount);
    }
    if rate.is_sign_negative() {
        return Err(PostingError::NegativeExchangeRate);
    }
    Ok(())
}

/// Builds the subledger transaction and journal lines for a customer
/// receipt: debit the bank's ledger account, credit Accounts Receivable.
///
/// # Errors
///
/// Returns a [`PostingError`] when the bank account is inactive, the
/// currency does not match, or the amount/rate is out of range.
pub fn build_ar_receipt(
    input: &ArReceiptInput,
    bank: &BankAccount,
    receivable: &Account,
) -> Result<ArPosting, PostingError> {
    check_bank(bank, &input.currency)?;
    check_amount(input.amount, input.exchange_rate)?;

    let txn = ArTransaction {
        id: ArTransactionId::new(),
        txn_date: input.txn_date,
        invoice_id: input.invoice_id.clone(),
        customer_id: input.customer_id,
        bank_account_id: bank.id,
        amount: input.amount,
        currency: input.currency.clone(),
        exchange_rate: input.exchange_rate,
        local_amount: to_local(input.amount, input.exchange_rate),
        remarks: input.remarks.clone(),
        created_at: Utc::now(),
    };

    let link = JournalSource::ArReceipt(txn.id);
    let memo = format!("Receipt against invoice {}", input.invoice_id);
    let lines = vec![
        LineInput::debit(bank.ledger_account_id, input.amount, &input.currency, input.exchange_rate)
            .linked(link)
            .with_memo(memo.clone()),
        LineInput::credit(receivable.id, input.amount, &input.currency, input.exchange_rate)
            .linked(link)
            .with_memo(memo),
    ];

    Ok(ArPosting { txn, lines })
}

/// Builds the subledger transaction and journal lines for a supplier
/// payment: debit Accounts Payable, credit the bank's ledger account.
///
/// # Errors
///
/// Returns a [`PostingError`] when the bank account is inactive, the
/// currency does not match, or the amount/rate is out of range.
pub fn build_ap_payment(
    input: &ApPaymentInput,
    bank: &BankAccount,
    payable: &Account,
) -> Result<ApPosting, PostingError> {
    check_bank(bank, &input.currency)?;
    check_amount(input.amount, input.exchange_rate)?;

    let txn = ApTransaction {
        id: ApTransactionId::new(),
        txn_date: input.txn_date,
        invoice_id: input.invoice_id.clone(),
        supplier_id: input.supplier_id,
        bank_account_id: bank.id,
        amount: input.amount,
        currency: input.currency.clone(),
        exchange_rate: input.exchange_rate,
        local_amount: to_local(input.amount, input.exchange_rate),
        remarks: input.remarks.clone(),
        created_at: Utc::now(),
    };

    let link = JournalSource::ApPayment(txn.id);
    let memo = format!("Payment against invoice {}", input.invoice_id);
    let lines = vec![
        LineInput::debit(payable.id, input.amount, &input.currency, input.exchange_rate)
            .linked(link)
            .with_memo(memo.clone()),
        LineInput::credit(bank.ledger_account_id, input.amount, &input.currency, input.exchange_rate)
            .linked(link)
            .with_memo(memo),
    ];

    Ok(ApPosting { txn, lines })
}

/// Builds the transfer record and journal lines for a bank-to-bank
/// transfer.
///
/// The two legs are valued independently; when their functional-currency
/// values diverge (`diff != 0`), a third adjustment line books the
/// difference against the FX gain or loss account. This is the only place
/// a transfer realizes FX P&L at the moment of the movement itself, as
/// opposed to period-end revaluation.
///
/// # Errors
///
/// Returns a [`PostingError`] when the accounts are not distinct and
/// active, a leg's currency does not match its bank account, or an
/// amount/rate is out of range.
pub fn build_transfer(
    input: &TransferInput,
    from_bank: &BankAccount,
    to_bank: &BankAccount,
    fx_gain: &Account,
    fx_loss: &Account,
    functional_currency: &str,
) -> Result<TransferPosting, PostingError> {
    if from_bank.id == to_bank.id {
        return Err(PostingError::SameBankAccount);
    }
    check_bank(from_bank, &input.currency_from)?;
    check_bank(to_bank, &input.currency_to)?;
    check_amount(input.amount_from, input.exchange_rate_from)?;
    check_amount(input.amount_to, input.exchange_rate_to)?;

    let local_from = to_local(input.amount_from, input.exchange_rate_from);
    let local_to = to_local(input.amount_to, input.exchange_rate_to);
    let diff = round2(local_to - local_from);

    let txn = BankTransfer {
        id: TransferId::new(),
        txn_date: input.txn_date,
        from_bank_account_id: from_bank.id,
        to_bank_account_id: to_bank.id,
        amount_from: input.amount_from,
        currency_from: input.currency_from.clone(),
        exchange_rate_from: input.exchange_rate_from,
        local_from,
        amount_to: input.amount_to,
        currency_to: input.currency_to.clone(),
        exchange_rate_to: input.exchange_rate_to,
        local_to,
        diff,
        remarks: input.remarks.clone(),
        created_at: Utc::now(),
    };

    let link = JournalSource::BankTransfer(txn.id);
    let memo = format!("Transfer {} -> {}", from_bank.code, to_bank.code);
    let mut lines = vec![
        LineInput::debit(
            to_bank.ledger_account_id,
            input.amount_to,
            &input.currency_to,
            input.exchange_rate_to,
        )
        .linked(link)
        .with_memo(memo.clone()),
        LineInput::credit(
            from_bank.ledger_account_id,
            input.amount_from,
            &input.currency_from,
            input.exchange_rate_from,
        )
        .linked(link)
        .with_memo(memo.clone()),
    ];

    if !diff.is_zero() {
        // The difference line offsets the two legs: its local amount is
        // -diff, booked to FX gain when the movement gained value and to
        // FX loss when it lost value.
        let fx_account = if diff > Decimal::ZERO { fx_gain } else { fx_loss };
        lines.push(
            LineInput::adjustment(fx_account.id, -diff, functional_currency, Decimal::ONE)
                .linked(link)
                .with_memo(memo),
        );
    }

    Ok(TransferPosting { txn, lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coa::{AccountType, NormalBalance};
    use crate::journal::validate_lines;
    use chrono::NaiveDate;
    use glint_shared::types::{AccountId, BankAccountId, CustomerId, SupplierId};
    use rust_decimal_macros::dec;

    fn leaf(id: AccountId, code: &str) -> Account {
        Account {
            id,
            code: code.to_string(),
            name: code.to_string(),
            account_type: AccountType::Asset,
            normal_balance: NormalBalance::Debit,
            parent_id: None,
            is_leaf: true,
            allow_manual_post: true,
        }
    }

    fn bank(currency: &str) -> BankAccount {
        BankAccount {
            id: BankAccountId::new(),
            code: format!("BANK-{currency}"),
            name: format!("Operating Bank {currency}"),
            kind: super::super::types::BankAccountKind::Bank,
            currency: currency.to_string(),
            ledger_account_id: AccountId::new(),
            is_active: true,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn receipt_input(bank_id: BankAccountId) -> ArReceiptInput {
        ArReceiptInput {
            bank_account_id: bank_id,
            customer_id: CustomerId::new(),
            amount: dec!(1000),
            currency: "USD".to_string(),
            exchange_rate: dec!(75),
            invoice_id: "INV-2026-0042".to_string(),
            txn_date: date(),
            remarks: None,
        }
    }

    #[test]
    fn test_ar_receipt_lines() {
        let bank = bank("USD");
        let receivable = leaf(AccountId::new(), "1.2");
        let posting = build_ar_receipt(&receipt_input(bank.id), &bank, &receivable).unwrap();

        assert_eq!(posting.txn.local_amount, dec!(75000.00));
        assert_eq!(posting.lines.len(), 2);
        assert_eq!(posting.lines[0].account_id, bank.ledger_account_id);
        assert_eq!(posting.lines[0].debit, dec!(1000));
        assert_eq!(posting.lines[1].account_id, receivable.id);
        assert_eq!(posting.lines[1].credit, dec!(1000));

        let link = JournalSource::ArReceipt(posting.txn.id);
        assert!(posting.lines.iter().all(|line| line.link == Some(link)));

        // The lines must satisfy the invariant with the expected locals.
        let accounts = [bank.ledger_account_id, receivable.id];
        let validated = validate_lines(&posting.lines, |id| {
            accounts.contains(&id).then(|| leaf(id, "x"))
        })
        .unwrap();
        assert_eq!(validated[0].local_amount, dec!(75000.00));
        assert_eq!(validated[1].local_amount, dec!(-75000.00));
    }

    #[test]
    fn test_ar_receipt_rejects_inactive_bank() {
        let mut bank = bank("USD");
        bank.is_active = false;
        let receivable = leaf(AccountId::new(), "1.2");

        let err = build_ar_receipt(&receipt_input(bank.id), &bank, &receivable).unwrap_err();
        assert!(matches!(err, PostingError::BankAccountInactive { .. }));
    }

    #[test]
    fn test_ar_receipt_rejects_currency_mismatch() {
        let bank = bank("EUR");
        let receivable = leaf(AccountId::new(), "1.2");

        let err = build_ar_receipt(&receipt_input(bank.id), &bank, &receivable).unwrap_err();
        assert!(matches!(
            err,
            PostingError::CurrencyMismatch { expected, got, .. }
                if expected == "EUR" && got == "USD"
        ));
    }

    #[test]
    fn test_ar_receipt_rejects_non_positive_amount() {
        let bank = bank("USD");
        let receivable = leaf(AccountId::new(), "1.2");
        let mut input = receipt_input(bank.id);
        input.amount = Decimal::ZERO;

        let err = build_ar_receipt(&input, &bank, &receivable).unwrap_err();
        assert!(matches!(err, PostingError::NonPositiveAmount));
    }

    #[test]
    fn test_ap_payment_lines_are_symmetric() {
        let bank = bank("USD");
        let payable = leaf(AccountId::new(), "2.1");
        let input = ApPaymentInput {
            bank_account_id: bank.id,
            supplier_id: SupplierId::new(),
            amount: dec!(640.50),
            currency: "USD".to_string(),
            exchange_rate: dec!(82.10),
            invoice_id: "BILL-7".to_string(),
            txn_date: date(),
            remarks: Some("March rent".to_string()),
        };

        let posting = build_ap_payment(&input, &bank, &payable).unwrap();
        assert_eq!(posting.txn.local_amount, dec!(52585.05));
        assert_eq!(posting.lines[0].account_id, payable.id);
        assert_eq!(posting.lines[0].debit, dec!(640.50));
        assert_eq!(posting.lines[1].account_id, bank.ledger_account_id);
        assert_eq!(posting.lines[1].credit, dec!(640.50));
    }

    fn transfer_input(
        from: &BankAccount,
        to: &BankAccount,
        amount_from: Decimal,
        rate_from: Decimal,
        amount_to: Decimal,
        rate_to: Decimal,
    ) -> TransferInput {
        TransferInput {
            from_bank_account_id: from.id,
            to_bank_account_id: to.id,
            amount_from,
            currency_from: from.currency.clone(),
            exchange_rate_from: rate_from,
            amount_to,
            currency_to: to.currency.clone(),
            exchange_rate_to: rate_to,
            txn_date: date(),
            remarks: None,
        }
    }

    #[test]
    fn test_transfer_same_currency_same_rate_two_lines() {
        let (from, to) = (bank("USD"), bank("USD"));
        let fx_gain = leaf(AccountId::new(), "4.9");
        let fx_loss = leaf(AccountId::new(), "5.9");
        let input = transfer_input(&from, &to, dec!(500), dec!(75), dec!(500), dec!(75));

        let posting = build_transfer(&input, &from, &to, &fx_gain, &fx_loss, "INR").unwrap();
        assert!(posting.txn.diff.is_zero());
        assert_eq!(posting.lines.len(), 2);
    }

    #[test]
    fn test_transfer_cross_currency_books_fx_loss() {
        // 1000 USD @75 out, 800 EUR @85 in: 68000 - 75000 = -7000 loss.
        let (from, to) = (bank("USD"), bank("EUR"));
        let fx_gain = leaf(AccountId::new(), "4.9");
        let fx_loss = leaf(AccountId::new(), "5.9");
        let input = transfer_input(&from, &to, dec!(1000), dec!(75), dec!(800), dec!(85));

        let posting = build_transfer(&input, &from, &to, &fx_gain, &fx_loss, "INR").unwrap();
        assert_eq!(posting.txn.local_from, dec!(75000.00));
        assert_eq!(posting.txn.local_to, dec!(68000.00));
        assert_eq!(posting.txn.diff, dec!(-7000.00));
        assert_eq!(posting.lines.len(), 3);

        let fx_line = &posting.lines[2];
        assert_eq!(fx_line.account_id, fx_loss.id);
        assert!(fx_line.debit.is_zero() && fx_line.credit.is_zero());
        assert_eq!(fx_line.local_amount, Some(dec!(7000.00)));
    }

    #[test]
    fn test_transfer_cross_currency_books_fx_gain() {
        let (from, to) = (bank("USD"), bank("EUR"));
        let fx_gain = leaf(AccountId::new(), "4.9");
        let fx_loss = leaf(AccountId::new(), "5.9");
        let input = transfer_input(&from, &to, dec!(1000), dec!(75), dec!(900), dec!(85));

        let posting = build_transfer(&input, &from, &to, &fx_gain, &fx_loss, "INR").unwrap();
        assert_eq!(posting.txn.diff, dec!(1500.00));

        let fx_line = &posting.lines[2];
        assert_eq!(fx_line.account_id, fx_gain.id);
        assert_eq!(fx_line.local_amount, Some(dec!(-1500.00)));
    }

    #[test]
    fn test_transfer_same_currency_rate_drift_books_fx_line() {
        // Same currency but diverging rate inputs still realize a
        // difference; see DESIGN.md for the recorded decision.
        let (from, to) = (bank("USD"), bank("USD"));
        let fx_gain = leaf(AccountId::new(), "4.9");
        let fx_loss = leaf(AccountId::new(), "5.9");
        let input = transfer_input(&from, &to, dec!(1000), dec!(75), dec!(1000), dec!(76));

        let posting = build_transfer(&input, &from, &to, &fx_gain, &fx_loss, "INR").unwrap();
        assert_eq!(posting.txn.diff, dec!(1000.00));
        assert_eq!(posting.lines.len(), 3);
        assert_eq!(posting.lines[2].account_id, fx_gain.id);
    }

    #[test]
    fn test_transfer_rejects_same_account() {
        let from = bank("USD");
        let fx_gain = leaf(AccountId::new(), "4.9");
        let fx_loss = leaf(AccountId::new(), "5.9");
        let input = transfer_input(&from, &from, dec!(100), dec!(1), dec!(100), dec!(1));

        let err = build_transfer(&input, &from, &from, &fx_gain, &fx_loss, "INR").unwrap_err();
        assert!(matches!(err, PostingError::SameBankAccount));
    }

    #[test]
    fn test_transfer_leg_currency_checked_per_bank() {
        let (from, to) = (bank("USD"), bank("EUR"));
        let fx_gain = leaf(AccountId::new(), "4.9");
        let fx_loss = leaf(AccountId::new(), "5.9");
        let mut input = transfer_input(&from, &to, dec!(100), dec!(1), dec!(100), dec!(1));
        input.currency_to = "USD".to_string();

        let err = build_transfer(&input, &from, &to, &fx_gain, &fx_loss, "INR").unwrap_err();
        assert!(matches!(err, PostingError::CurrencyMismatch { .. }));
    }
}
