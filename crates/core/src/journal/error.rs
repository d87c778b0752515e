//! Journal validation error types.

use glint_shared::AppError;
use glint_shared::types::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating a journal before commit.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Journal must have at least one line.
    #[error("Journal must have at least one line")]
    Empty,

    /// A line carries both a debit and a credit amount.
    #[error("Line {line_no}: debit and credit cannot both be positive")]
    BothSides {
        /// The offending line (1-based).
        line_no: u32,
    },

    /// A line carries a negative debit or credit amount.
    #[error("Line {line_no}: debit and credit amounts cannot be negative")]
    NegativeAmount {
        /// The offending line (1-based).
        line_no: u32,
    },

    /// A line with zero on both sides carries no usable local amount.
    #[error("Line {line_no}: a zero-amount line requires a non-zero local amount")]
    ZeroLine {
        /// The offending line (1-based).
        line_no: u32,
    },

    /// A line has an empty currency code.
    #[error("Line {line_no}: currency must not be empty")]
    EmptyCurrency {
        /// The offending line (1-based).
        line_no: u32,
    },

    /// A line has a negative exchange rate.
    #[error("Line {line_no}: exchange rate cannot be negative")]
    NegativeExchangeRate {
        /// The offending line (1-based).
        line_no: u32,
    },

    /// A line references an unknown account.
    #[error("Line {line_no}: account {account_id} not found")]
    AccountNotFound {
        /// The offending line (1-based).
        line_no: u32,
        /// The unresolved account reference.
        account_id: AccountId,
    },

    /// A line targets a non-leaf or non-postable account.
    #[error("Line {line_no}: account {code} is not a postable leaf account")]
    AccountNotPostable {
        /// The offending line (1-based).
        line_no: u32,
        /// The account code.
        code: String,
    },

    /// A supplied local amount disagrees with the computed one.
    #[error("Line {line_no}: supplied local amount {supplied} does not match computed {computed}")]
    LocalAmountMismatch {
        /// The offending line (1-based).
        line_no: u32,
        /// The caller-supplied value, rounded.
        supplied: Decimal,
        /// The value computed from amount and rate.
        computed: Decimal,
    },

    /// The lines do not sum to zero in functional currency.
    #[error("Journal does not balance: net local amount is {net}")]
    Unbalanced {
        /// The non-zero net local amount.
        net: Decimal,
    },
}

impl JournalError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY_JOURNAL",
            Self::BothSides { .. } => "DEBIT_AND_CREDIT",
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::ZeroLine { .. } => "ZERO_LINE",
            Self::EmptyCurrency { .. } => "EMPTY_CURRENCY",
            Self::NegativeExchangeRate { .. } => "NEGATIVE_EXCHANGE_RATE",
            Self::AccountNotFound { .. } => "ACCOUNT_NOT_FOUND",
            Self::AccountNotPostable { .. } => "ACCOUNT_NOT_POSTABLE",
            Self::LocalAmountMismatch { .. } => "LOCAL_AMOUNT_MISMATCH",
            Self::Unbalanced { .. } => "UNBALANCED_JOURNAL",
        }
    }
}

impl From<JournalError> for AppError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::AccountNotFound { .. } => Self::NotFound(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
