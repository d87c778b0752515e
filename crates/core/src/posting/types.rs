//! Bank account and subledger domain types.

use chrono::{DateTime, NaiveDate, Utc};
use glint_shared::types::{
    AccountId, ApTransactionId, ArTransactionId, BankAccountId, CustomerId, SupplierId, TransferId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment method classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankAccountKind {
    /// Physical cash drawer.
    Cash,
    /// Bank account.
    Bank,
    /// UPI handle.
    Upi,
    /// Crypto wallet.
    Crypto,
    /// Prepaid wallet.
    Wallet,
}

/// A payment method and the ledger account it posts to.
///
/// Long-lived administrative data. "Deletion" is a soft deactivation —
/// historical GL lines keep referencing the linked account, so a bank
/// account is never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier.
    pub id: BankAccountId,
    /// Unique short code, e.g. "BANK-USD".
    pub code: String,
    /// Display name.
    pub name: String,
    /// Payment method classification.
    pub kind: BankAccountKind,
    /// Declared currency. Every transaction against this account must use it.
    pub currency: String,
    /// The COA leaf this method posts to.
    pub ledger_account_id: AccountId,
    /// Whether new postings are accepted.
    pub is_active: bool,
}

/// Which side of the business a subledger transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubledgerSource {
    /// Sales side (accounts receivable).
    Sales,
    /// Purchase side (accounts payable).
    Purchase,
}

/// Input for posting a customer receipt.
#[derive(Debug, Clone)]
pub struct ArReceiptInput {
    /// The bank account receiving the funds.
    pub bank_account_id: BankAccountId,
    /// The paying customer.
    pub customer_id: CustomerId,
    /// Received amount in `currency` (> 0).
    pub amount: Decimal,
    /// Currency of the receipt; must equal the bank account's currency.
    pub currency: String,
    /// 1 unit of `currency` = `exchange_rate` units of functional currency.
    pub exchange_rate: Decimal,
    /// The sales invoice being settled.
    pub invoice_id: String,
    /// Business date.
    pub txn_date: NaiveDate,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

/// Input for posting a supplier payment.
#[derive(Debug, Clone)]
pub struct ApPaymentInput {
    /// The bank account paying out.
    pub bank_account_id: BankAccountId,
    /// The supplier being paid.
    pub supplier_id: SupplierId,
    /// Paid amount in `currency` (> 0).
    pub amount: Decimal,
    /// Currency of the payment; must equal the bank account's currency.
    pub currency: String,
    /// 1 unit of `currency` = `exchange_rate` units of functional currency.
    pub exchange_rate: Decimal,
    /// The purchase invoice being settled.
    pub invoice_id: String,
    /// Business date.
    pub txn_date: NaiveDate,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

/// Input for a bank-to-bank transfer. The two legs carry independent
/// amounts, currencies and rates, so a transfer can cross currencies.
#[derive(Debug, Clone)]
pub struct TransferInput {
    /// Source bank account.
    pub from_bank_account_id: BankAccountId,
    /// Destination bank account.
    pub to_bank_account_id: BankAccountId,
    /// Amount leaving the source, in `currency_from` (> 0).
    pub amount_from: Decimal,
    /// Currency of the source leg.
    pub currency_from: String,
    /// Rate of the source leg.
    pub exchange_rate_from: Decimal,
    /// Amount arriving at the destination, in `currency_to` (> 0).
    pub amount_to: Decimal,
    /// Currency of the destination leg.
    pub currency_to: String,
    /// Rate of the destination leg.
    pub exchange_rate_to: Decimal,
    /// Business date.
    pub txn_date: NaiveDate,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

/// An accounts-receivable subledger transaction. Immutable; paired 1:1
/// with its GL journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArTransaction {
    /// Unique identifier.
    pub id: ArTransactionId,
    /// Business date.
    pub txn_date: NaiveDate,
    /// The settled sales invoice.
    pub invoice_id: String,
    /// The paying customer.
    pub customer_id: CustomerId,
    /// The receiving bank account.
    pub bank_account_id: BankAccountId,
    /// Received amount in `currency`.
    pub amount: Decimal,
    /// Currency of the receipt.
    pub currency: String,
    /// Rate applied at posting time.
    pub exchange_rate: Decimal,
    /// Functional-currency equivalent.
    pub local_amount: Decimal,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// When the record was committed.
    pub created_at: DateTime<Utc>,
}

impl ArTransaction {
    /// The subledger side this record belongs to.
    #[must_use]
    pub const fn source(&self) -> SubledgerSource {
        SubledgerSource::Sales
    }
}

/// An accounts-payable subledger transaction. Immutable; paired 1:1 with
/// its GL journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApTransaction {
    /// Unique identifier.
    pub id: ApTransactionId,
    /// Business date.
    pub txn_date: NaiveDate,
    /// The settled purchase invoice.
    pub invoice_id: String,
    /// The paid supplier.
    pub supplier_id: SupplierId,
    /// The paying bank account.
    pub bank_account_id: BankAccountId,
    /// Paid amount in `currency`.
    pub amount: Decimal,
    /// Currency of the payment.
    pub currency: String,
    /// Rate applied at posting time.
    pub exchange_rate: Decimal,
    /// Functional-currency equivalent.
    pub local_amount: Decimal,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// When the record was committed.
    pub created_at: DateTime<Utc>,
}

impl ApTransaction {
    /// The subledger side this record belongs to.
    #[must_use]
    pub const fn source(&self) -> SubledgerSource {
        SubledgerSource::Purchase
    }
}

/// A bank-to-bank transfer record: the source document a
/// `BankTransfer` journal points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankTransfer {
    /// Unique identifier.
    pub id: TransferId,
    /// Business date.
    pub txn_date: NaiveDate,
    /// Source bank account.
    pub from_bank_account_id: BankAccountId,
    /// Destination bank account.
    pub to_bank_account_id: BankAccountId,
    /// Amount leaving the source.
    pub amount_from: Decimal,
    /// Currency of the source leg.
    pub currency_from: String,
    /// Rate of the source leg.
    pub exchange_rate_from: Decimal,
    /// Functional-currency value of the source leg.
    pub local_from: Decimal,
    /// Amount arriving at the destination.
    pub amount_to: Decimal,
    /// Currency of the destination leg.
    pub currency_to: String,
    /// Rate of the destination leg.
    pub exchange_rate_to: Decimal,
    /// Functional-currency value of the destination leg.
    pub local_to: Decimal,
    /// `local_to - local_from`, the FX difference realized by the transfer.
    pub diff: Decimal,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// When the record was committed.
    pub created_at: DateTime<Utc>,
}
