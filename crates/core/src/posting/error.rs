//! Posting error types.

use glint_shared::AppError;
use thiserror::Error;

/// Errors raised while building a posting from a business event.
#[derive(Debug, Error)]
pub enum PostingError {
    /// The bank account is deactivated.
    #[error("Bank account {code} is inactive")]
    BankAccountInactive {
        /// The bank account code.
        code: String,
    },

    /// The event currency does not match the bank account's declared one.
    #[error("Currency mismatch for bank account {code}: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// The bank account code.
        code: String,
        /// The bank account's declared currency.
        expected: String,
        /// The currency supplied by the caller.
        got: String,
    },

    /// The event amount is zero or negative.
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// The exchange rate is negative.
    #[error("Exchange rate cannot be negative")]
    NegativeExchangeRate,

    /// A transfer names the same bank account on both sides.
    #[error("Transfer requires two distinct bank accounts")]
    SameBankAccount,
}

impl PostingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BankAccountInactive { .. } => "BANK_ACCOUNT_INACTIVE",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::NegativeExchangeRate => "NEGATIVE_EXCHANGE_RATE",
            Self::SameBankAccount => "SAME_BANK_ACCOUNT",
        }
    }
}

impl From<PostingError> for AppError {
    fn from(err: PostingError) -> Self {
        Self::Validation(err.to_string())
    }
}
