//! Revaluation error types.

use chrono::NaiveDate;
use glint_shared::AppError;
use thiserror::Error;

/// Errors raised by the revaluation engine and its callers.
#[derive(Debug, Error)]
pub enum RevaluationError {
    /// The spot rate is negative.
    #[error("Spot rate cannot be negative")]
    NegativeSpotRate,

    /// The bank account is already in the functional currency.
    #[error("Bank account {code} is in the functional currency and cannot be revalued")]
    FunctionalCurrencyAccount {
        /// The bank account code.
        code: String,
    },

    /// The bank account is deactivated.
    #[error("Bank account {code} is inactive")]
    BankAccountInactive {
        /// The bank account code.
        code: String,
    },

    /// A revaluation was already booked for this account and date.
    #[error("Bank account {code} was already revalued as of {as_of}")]
    AlreadyRevalued {
        /// The bank account code.
        code: String,
        /// The contested as-of date.
        as_of: NaiveDate,
    },
}

impl RevaluationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeSpotRate => "NEGATIVE_SPOT_RATE",
            Self::FunctionalCurrencyAccount { .. } => "FUNCTIONAL_CURRENCY_ACCOUNT",
            Self::BankAccountInactive { .. } => "BANK_ACCOUNT_INACTIVE",
            Self::AlreadyRevalued { .. } => "ALREADY_REVALUED",
        }
    }
}

impl From<RevaluationError> for AppError {
    fn from(err: RevaluationError) -> Self {
        match err {
            RevaluationError::AlreadyRevalued { .. } => Self::Conflict(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
