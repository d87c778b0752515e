//! Period-end FX revaluation of bank accounts.

use chrono::{NaiveDate, Utc};
use glint_core::journal::{Journal, JournalSource, validate_lines};
use glint_core::revaluation::{
    HistoricalLine, Revaluation, RevaluationError, RevaluationFigures, adjustment_lines, compute,
};
use glint_shared::types::{BankAccountId, RevaluationId};
use glint_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use tracing::info;

use crate::journals::commit_journal;
use crate::LedgerStore;

/// Input for a revaluation run.
#[derive(Debug, Clone)]
pub struct RevaluationInput {
    /// The foreign-currency bank account to revalue.
    pub bank_account_id: BankAccountId,
    /// Cutoff date: lines dated after it are ignored.
    pub as_of: NaiveDate,
    /// The spot rate to restate at.
    pub spot_rate: Decimal,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

/// Result of a revaluation run.
#[derive(Debug)]
pub enum RevaluationOutcome {
    /// The booked value already matches the spot value; nothing was
    /// posted and no record was kept.
    NoAdjustment {
        /// The computed figures, for inspection.
        figures: RevaluationFigures,
    },
    /// An adjusting journal was posted.
    Booked {
        /// The audit record of the run.
        revaluation: Revaluation,
        /// The 2-line adjusting journal.
        journal: Journal,
    },
}

impl LedgerStore {
    /// Revalues a foreign-currency bank account as of a cutoff date.
    ///
    /// Aggregates the account's own-currency history, restates it at the
    /// spot rate, and books the difference against the FX gain or loss
    /// account. A `diff == 0` run reports figures only. At most one
    /// revaluation may be booked per (bank account, as-of date); a repeat
    /// request is a conflict.
    pub fn post_revaluation(&self, input: RevaluationInput) -> AppResult<RevaluationOutcome> {
        let mut inner = self.write_inner()?;

        let bank = inner
            .bank_accounts
            .get(&input.bank_account_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("bank account {} not found", input.bank_account_id))
            })?;
        if !bank.is_active {
            return Err(RevaluationError::BankAccountInactive {
                code: bank.code.clone(),
            }
            .into());
        }
        if bank.currency == self.functional_currency() {
            return Err(RevaluationError::FunctionalCurrencyAccount {
                code: bank.code.clone(),
            }
            .into());
        }
        if inner
            .revaluation_index
            .contains_key(&(bank.id, input.as_of))
        {
            return Err(RevaluationError::AlreadyRevalued {
                code: bank.code.clone(),
                as_of: input.as_of,
            }
            .into());
        }

        // The aggregation itself is the engine's pure concern; the store
        // only extracts the account's line history.
        let mut history = Vec::new();
        for journal in inner.journals.values() {
            for line in &journal.lines {
                if line.account_id != bank.ledger_account_id {
                    continue;
                }
                history.push(HistoricalLine {
                    date: journal.voucher_date,
                    currency: line.currency.clone(),
                    debit: line.debit,
                    credit: line.credit,
                    local_amount: line.local_amount,
                });
            }
        }

        let figures = compute(&history, &bank.currency, input.as_of, input.spot_rate)?;
        if figures.diff.is_zero() {
            info!(
                bank = %bank.code,
                as_of = %input.as_of,
                net_foreign = %figures.net_foreign,
                booked_local = %figures.booked_local,
                "revaluation is a no-op"
            );
            return Ok(RevaluationOutcome::NoAdjustment { figures });
        }

        let revaluation_id = RevaluationId::new();
        let bank_ledger = inner.resolve(bank.ledger_account_id).ok_or_else(|| {
            AppError::Internal(format!(
                "ledger account for bank account {} is not in the chart",
                bank.code
            ))
        })?;
        let fx_gain =
            inner.require_system_account(&self.system_codes().fx_gain, "exchange gain")?;
        let fx_loss =
            inner.require_system_account(&self.system_codes().fx_loss, "exchange loss")?;

        let link = JournalSource::FxRevaluation(revaluation_id);
        let memo = format!("Revaluation of {} as of {}", bank.code, input.as_of);
        let lines: Vec<_> = adjustment_lines(
            &figures,
            &bank_ledger,
            &fx_gain,
            &fx_loss,
            &bank.currency,
            input.spot_rate,
            self.functional_currency(),
        )
        .into_iter()
        .map(|line| line.linked(link).with_memo(memo.clone()))
        .collect();
        let validated = validate_lines(&lines, |id| inner.resolve(id))?;

        let journal = commit_journal(
            &mut inner,
            self.sequences(),
            input.as_of,
            link,
            input.remarks.clone(),
            validated,
        )?;

        let revaluation = Revaluation {
            id: revaluation_id,
            bank_account_id: bank.id,
            as_of: input.as_of,
            spot_rate: input.spot_rate,
            net_foreign: figures.net_foreign,
            booked_local: figures.booked_local,
            revalued_local: figures.revalued_local,
            diff: figures.diff,
            journal_id: journal.id,
            remarks: input.remarks,
            created_at: Utc::now(),
        };
        inner
            .revaluation_index
            .insert((bank.id, input.as_of), revaluation.id);
        inner.revaluations.insert(revaluation.id, revaluation.clone());

        info!(
            voucher = %journal.voucher_no,
            bank = %bank.code,
            as_of = %input.as_of,
            spot_rate = %input.spot_rate,
            diff = %figures.diff,
            "revaluation posted"
        );
        Ok(RevaluationOutcome::Booked {
            revaluation,
            journal,
        })
    }

    /// Fetches a booked revaluation by id.
    pub fn revaluation(&self, id: RevaluationId) -> AppResult<Revaluation> {
        self.read_inner()?
            .revaluations
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("revaluation {id} not found")))
    }
}
