//! Period-end FX revaluation.
//!
//! Restates a foreign-currency bank account's functional-currency value at
//! a spot rate, booking the difference as unrealized gain or loss. The
//! engine is a pure function over a supplied slice of historical ledger
//! lines; gathering those lines is the store's concern.

pub mod engine;
pub mod error;

pub use engine::{HistoricalLine, RevaluationFigures, adjustment_lines, compute};
pub use error::RevaluationError;

use chrono::{DateTime, NaiveDate, Utc};
use glint_shared::types::{BankAccountId, JournalId, RevaluationId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A booked revaluation run, annotated for audit.
///
/// Recorded only when an adjustment was actually posted; a `diff == 0` run
/// reports figures without leaving a record, so repeating it stays
/// idempotent. At most one booked revaluation exists per
/// (bank account, as-of date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revaluation {
    /// Unique identifier.
    pub id: RevaluationId,
    /// The revalued bank account.
    pub bank_account_id: BankAccountId,
    /// Cutoff date of the aggregation.
    pub as_of: NaiveDate,
    /// The spot rate applied.
    pub spot_rate: Decimal,
    /// Net foreign-currency balance at the cutoff.
    pub net_foreign: Decimal,
    /// Functional-currency value booked at historical rates.
    pub booked_local: Decimal,
    /// Functional-currency value at the spot rate.
    pub revalued_local: Decimal,
    /// `revalued_local - booked_local`; positive is an unrealized gain.
    pub diff: Decimal,
    /// The adjusting journal this run posted.
    pub journal_id: JournalId,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// When the run was committed.
    pub created_at: DateTime<Utc>,
}
