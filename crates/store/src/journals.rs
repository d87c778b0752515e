//! Journal repository: manual creation, reversal, and reads.

use chrono::{NaiveDate, Utc};
use glint_core::journal::{Journal, JournalSource, LineInput, reversing_lines, validate_lines};
use glint_core::sequence::{format_voucher, voucher_series};
use glint_shared::types::{JournalId, PageRequest, PageResponse};
use glint_shared::{AppError, AppResult};
use tracing::info;

use crate::sequence::SequenceRegistry;
use crate::{LedgerStore, StoreInner};

/// Input for creating a journal directly.
#[derive(Debug, Clone)]
pub struct CreateJournalInput {
    /// Business date of the journal.
    pub voucher_date: NaiveDate,
    /// The originating record.
    pub source: JournalSource,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// The lines to validate and post.
    pub lines: Vec<LineInput>,
}

/// Filters for listing journals.
#[derive(Debug, Clone, Default)]
pub struct JournalFilter {
    /// Filter by source kind tag (e.g. "ar_receipt").
    pub source: Option<String>,
    /// Earliest voucher date, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest voucher date, inclusive.
    pub to: Option<NaiveDate>,
}

impl JournalFilter {
    fn matches(&self, journal: &Journal) -> bool {
        if let Some(source) = &self.source {
            if journal.source.kind() != source {
                return false;
            }
        }
        if let Some(from) = self.from {
            if journal.voucher_date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if journal.voucher_date > to {
                return false;
            }
        }
        true
    }
}

/// Mints a voucher number and inserts a validated journal.
///
/// Must run inside the caller's write-lock critical section, after every
/// validation has passed; nothing after the mint can fail short of a
/// duplicate voucher, which the index guards as a conflict.
pub(crate) fn commit_journal(
    inner: &mut StoreInner,
    sequences: &SequenceRegistry,
    voucher_date: NaiveDate,
    source: JournalSource,
    remarks: Option<String>,
    lines: Vec<glint_core::journal::JournalLine>,
) -> AppResult<Journal> {
    let series = voucher_series(&source);
    let voucher_no = format_voucher(series, sequences.next(series));
    if !inner.voucher_index.insert(voucher_no.clone()) {
        return Err(AppError::Conflict(format!(
            "duplicate voucher number {voucher_no}"
        )));
    }

    let journal = Journal {
        id: JournalId::new(),
        voucher_no,
        voucher_date,
        source,
        remarks,
        lines,
        created_at: Utc::now(),
    };

    inner.journal_order.push(journal.id);
    inner.journals.insert(journal.id, journal.clone());
    info!(
        voucher = %journal.voucher_no,
        source = source.kind(),
        lines = journal.lines.len(),
        "journal posted"
    );
    Ok(journal)
}

impl LedgerStore {
    /// Validates and posts a journal as one unit.
    ///
    /// The balance invariant is checked before the voucher number is
    /// minted; a rejected journal consumes nothing.
    pub fn create_journal(&self, input: CreateJournalInput) -> AppResult<Journal> {
        let mut inner = self.write_inner()?;
        let lines = validate_lines(&input.lines, |id| inner.resolve(id))?;
        commit_journal(
            &mut inner,
            self.sequences(),
            input.voucher_date,
            input.source,
            input.remarks,
            lines,
        )
    }

    /// Posts a journal that exactly reverses an existing one.
    pub fn reverse_journal(
        &self,
        id: JournalId,
        voucher_date: Option<NaiveDate>,
    ) -> AppResult<Journal> {
        let mut inner = self.write_inner()?;
        let original = inner
            .journals
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("journal {id} not found")))?;

        let lines = validate_lines(&reversing_lines(&original), |account_id| {
            inner.resolve(account_id)
        })?;
        commit_journal(
            &mut inner,
            self.sequences(),
            voucher_date.unwrap_or_else(|| Utc::now().date_naive()),
            JournalSource::Reversal(original.id),
            Some(format!("Reversal of {}", original.voucher_no)),
            lines,
        )
    }

    /// Fetches a journal by id.
    pub fn journal(&self, id: JournalId) -> AppResult<Journal> {
        self.read_inner()?
            .journals
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("journal {id} not found")))
    }

    /// Lists journals in posting order, filtered and paginated.
    pub fn list_journals(
        &self,
        filter: &JournalFilter,
        page: PageRequest,
    ) -> AppResult<PageResponse<Journal>> {
        let inner = self.read_inner()?;
        let matching: Vec<&Journal> = inner
            .journal_order
            .iter()
            .filter_map(|id| inner.journals.get(id))
            .filter(|journal| filter.matches(journal))
            .collect();

        let total = matching.len() as u64;
        let data: Vec<Journal> = matching
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .cloned()
            .collect();

        Ok(PageResponse::new(data, page.page, page.per_page, total))
    }
}
