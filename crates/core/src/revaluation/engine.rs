//! The revaluation computation.

use chrono::NaiveDate;
use glint_shared::types::round2;
use rust_decimal::Decimal;

use super::error::RevaluationError;
use crate::coa::Account;
use crate::journal::LineInput;

/// A snapshot of one historical journal line on the revalued account.
///
/// The store extracts these from committed journals; the engine never
/// touches storage itself.
#[derive(Debug, Clone)]
pub struct HistoricalLine {
    /// Business date of the owning journal.
    pub date: NaiveDate,
    /// Currency of the line.
    pub currency: String,
    /// Foreign debit amount.
    pub debit: Decimal,
    /// Foreign credit amount.
    pub credit: Decimal,
    /// Functional-currency amount booked at the historical rate.
    pub local_amount: Decimal,
}

/// The figures of one revaluation run.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct RevaluationFigures {
    /// Net foreign-currency balance: sum of debits minus credits.
    pub net_foreign: Decimal,
    /// Functional-currency value already on the books.
    pub booked_local: Decimal,
    /// Functional-currency value at the spot rate.
    pub revalued_local: Decimal,
    /// `revalued_local - booked_local`; positive is an unrealized gain.
    pub diff: Decimal,
}

/// Aggregates the account's history and computes the revaluation figures.
///
/// Lines dated after `as_of` or denominated in another currency are
/// ignored for the foreign balance. Adjustment lines from earlier
/// revaluations carry zero foreign amounts but their local amounts count,
/// so successive runs converge instead of re-booking the same difference.
///
/// # Errors
///
/// Returns [`RevaluationError::NegativeSpotRate`] when the rate is
/// negative.
pub fn compute(
    lines: &[HistoricalLine],
    currency: &str,
    as_of: NaiveDate,
    spot_rate: Decimal,
) -> Result<RevaluationFigures, RevaluationError> {
    if spot_rate.is_sign_negative() {
        return Err(RevaluationError::NegativeSpotRate);
    }

    let mut net_foreign = Decimal::ZERO;
    let mut booked_local = Decimal::ZERO;
    for line in lines {
        if line.date > as_of || line.currency != currency {
            continue;
        }
        net_foreign += line.debit - line.credit;
        booked_local += line.local_amount;
    }
    booked_local = round2(booked_local);

    let revalued_local = round2(net_foreign * spot_rate);
    let diff = round2(revalued_local - booked_local);

    Ok(RevaluationFigures {
        net_foreign,
        booked_local,
        revalued_local,
        diff,
    })
}

/// Builds the adjusting journal lines for a non-zero difference.
///
/// Returns an empty vector when `diff == 0` — a no-op run must not create
/// an empty journal. The bank-side line is denominated in the account's
/// own currency with a zero foreign amount, so the booked local value
/// moves while the foreign balance stays put; the gain/loss side is a
/// plain functional-currency adjustment.
#[must_use]
pub fn adjustment_lines(
    figures: &RevaluationFigures,
    bank_ledger: &Account,
    fx_gain: &Account,
    fx_loss: &Account,
    currency: &str,
    spot_rate: Decimal,
    functional_currency: &str,
) -> Vec<LineInput> {
    let diff = figures.diff;
    if diff.is_zero() {
        return Vec::new();
    }

    if diff > Decimal::ZERO {
        vec![
            LineInput::adjustment(bank_ledger.id, diff, currency, spot_rate),
            LineInput::adjustment(fx_gain.id, -diff, functional_currency, Decimal::ONE),
        ]
    } else {
        vec![
            LineInput::adjustment(fx_loss.id, -diff, functional_currency, Decimal::ONE),
            LineInput::adjustment(bank_ledger.id, diff, currency, spot_rate),
        ]
    }
}
