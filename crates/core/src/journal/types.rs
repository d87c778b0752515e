//! Journal domain types.

use chrono::{DateTime, NaiveDate, Utc};
use glint_shared::types::{
    AccountId, ApTransactionId, ArTransactionId, JournalId, RevaluationId, TransferId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The record a journal (or one of its lines) originates from.
///
/// A tagged union instead of a loose `source_type` string plus raw id, so
/// an AR link can never carry an AP transaction id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum JournalSource {
    /// Customer receipt against a sales invoice.
    ArReceipt(ArTransactionId),
    /// Supplier payment against a purchase invoice.
    ApPayment(ApTransactionId),
    /// Bank-to-bank transfer.
    BankTransfer(TransferId),
    /// Period-end FX revaluation.
    FxRevaluation(RevaluationId),
    /// Reversal of a previously posted journal.
    Reversal(JournalId),
    /// Manually entered journal voucher.
    Manual,
}

impl JournalSource {
    /// Stable string tag, used for filtering and logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ArReceipt(_) => "ar_receipt",
            Self::ApPayment(_) => "ap_payment",
            Self::BankTransfer(_) => "bank_transfer",
            Self::FxRevaluation(_) => "fx_revaluation",
            Self::Reversal(_) => "reversal",
            Self::Manual => "manual",
        }
    }
}

/// Input for a single journal line, before validation.
#[derive(Debug, Clone)]
pub struct LineInput {
    /// The account to post to. Must resolve to a postable leaf.
    pub account_id: AccountId,
    /// Debit amount in `currency` (>= 0).
    pub debit: Decimal,
    /// Credit amount in `currency` (>= 0).
    pub credit: Decimal,
    /// ISO currency code or ticker.
    pub currency: String,
    /// 1 unit of `currency` = `exchange_rate` units of functional currency.
    pub exchange_rate: Decimal,
    /// Functional-currency equivalent. Computed when absent; a supplied
    /// value is rounded and checked against the computed one.
    pub local_amount: Option<Decimal>,
    /// The subledger record this line settles against, if any.
    pub link: Option<JournalSource>,
    /// Optional memo.
    pub memo: Option<String>,
}

impl LineInput {
    /// A debit line.
    #[must_use]
    pub fn debit(account_id: AccountId, amount: Decimal, currency: &str, rate: Decimal) -> Self {
        Self {
            account_id,
            debit: amount,
            credit: Decimal::ZERO,
            currency: currency.to_string(),
            exchange_rate: rate,
            local_amount: None,
            link: None,
            memo: None,
        }
    }

    /// A credit line.
    #[must_use]
    pub fn credit(account_id: AccountId, amount: Decimal, currency: &str, rate: Decimal) -> Self {
        Self {
            account_id,
            debit: Decimal::ZERO,
            credit: amount,
            currency: currency.to_string(),
            exchange_rate: rate,
            local_amount: None,
            link: None,
            memo: None,
        }
    }

    /// An adjustment line: zero on both sides, carrying only a
    /// functional-currency amount (positive = debit side).
    ///
    /// FX difference and revaluation lines take this form so the foreign
    /// balance of the account stays untouched while its booked local value
    /// moves.
    #[must_use]
    pub fn adjustment(
        account_id: AccountId,
        local_amount: Decimal,
        currency: &str,
        rate: Decimal,
    ) -> Self {
        Self {
            account_id,
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
            currency: currency.to_string(),
            exchange_rate: rate,
            local_amount: Some(local_amount),
            link: None,
            memo: None,
        }
    }

    /// Attaches a subledger link.
    #[must_use]
    pub fn linked(mut self, link: JournalSource) -> Self {
        self.link = Some(link);
        self
    }

    /// Attaches a memo.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

/// A validated journal line, owned exclusively by its parent journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// 1-based position within the journal.
    pub line_no: u32,
    /// The leaf account posted to.
    pub account_id: AccountId,
    /// Debit amount in `currency`.
    pub debit: Decimal,
    /// Credit amount in `currency`.
    pub credit: Decimal,
    /// ISO currency code or ticker.
    pub currency: String,
    /// 1 unit of `currency` = `exchange_rate` units of functional currency.
    pub exchange_rate: Decimal,
    /// Signed functional-currency equivalent, rounded to 2 decimals.
    pub local_amount: Decimal,
    /// Subledger back-reference for drill-down.
    pub link: Option<JournalSource>,
    /// Optional memo.
    pub memo: Option<String>,
}

impl JournalLine {
    /// Signed foreign amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }

    /// True for lines that carry only a functional-currency adjustment.
    #[must_use]
    pub fn is_adjustment(&self) -> bool {
        self.debit.is_zero() && self.credit.is_zero()
    }
}

/// A balanced multi-currency journal.
///
/// Created atomically with its lines in one commit and append-only
/// thereafter: corrections are posted as new reversing journals, never as
/// edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    /// Unique identifier.
    pub id: JournalId,
    /// Unique voucher number, minted once at commit time. Immutable.
    pub voucher_no: String,
    /// Business date of the journal.
    pub voucher_date: NaiveDate,
    /// The originating record.
    pub source: JournalSource,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// The balanced lines (at least one).
    pub lines: Vec<JournalLine>,
    /// When the journal was committed.
    pub created_at: DateTime<Utc>,
}

impl Journal {
    /// Sum of positive local amounts (the debit side, in functional currency).
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.local_amount.max(Decimal::ZERO))
            .sum()
    }

    /// Sum of negative local amounts, negated (the credit side).
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        -self
            .lines
            .iter()
            .map(|line| line.local_amount.min(Decimal::ZERO))
            .sum::<Decimal>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_source_kinds() {
        assert_eq!(JournalSource::ArReceipt(ArTransactionId::new()).kind(), "ar_receipt");
        assert_eq!(JournalSource::ApPayment(ApTransactionId::new()).kind(), "ap_payment");
        assert_eq!(JournalSource::BankTransfer(TransferId::new()).kind(), "bank_transfer");
        assert_eq!(
            JournalSource::FxRevaluation(RevaluationId::new()).kind(),
            "fx_revaluation"
        );
        assert_eq!(JournalSource::Reversal(JournalId::new()).kind(), "reversal");
        assert_eq!(JournalSource::Manual.kind(), "manual");
    }

    #[test]
    fn test_line_constructors() {
        let account = AccountId::new();

        let debit = LineInput::debit(account, dec!(100), "USD", dec!(75));
        assert_eq!(debit.debit, dec!(100));
        assert!(debit.credit.is_zero());

        let credit = LineInput::credit(account, dec!(100), "USD", dec!(75));
        assert!(credit.debit.is_zero());
        assert_eq!(credit.credit, dec!(100));

        let adjustment = LineInput::adjustment(account, dec!(-50), "USD", dec!(75));
        assert!(adjustment.debit.is_zero());
        assert!(adjustment.credit.is_zero());
        assert_eq!(adjustment.local_amount, Some(dec!(-50)));
    }

    #[test]
    fn test_signed_amount() {
        let line = JournalLine {
            line_no: 1,
            account_id: AccountId::new(),
            debit: Decimal::ZERO,
            credit: dec!(40),
            currency: "USD".to_string(),
            exchange_rate: Decimal::ONE,
            local_amount: dec!(-40),
            link: None,
            memo: None,
        };
        assert_eq!(line.signed_amount(), dec!(-40));
        assert!(!line.is_adjustment());
    }
}
