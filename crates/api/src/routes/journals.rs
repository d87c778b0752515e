//! Journal endpoints: creation, reversal, and reads.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use chrono::{NaiveDate, Utc};
use glint_core::journal::{Journal, JournalSource, LineInput};
use glint_shared::types::{
    ApTransactionId, ArTransactionId, JournalId, PageMeta, PageRequest, RevaluationId, TransferId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::AppState;
use crate::error::{ApiError, validation};
use glint_store::{CreateJournalInput, JournalFilter};

/// Request body for creating a journal.
#[derive(Debug, Deserialize)]
pub struct CreateJournalRequest {
    /// Business date; defaults to today.
    pub voucher_date: Option<NaiveDate>,
    /// Source type tag; defaults to "manual".
    pub source_type: Option<String>,
    /// Source record id, required for non-manual sources.
    pub source_id: Option<Uuid>,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// The journal lines.
    pub lines: Vec<LineRequest>,
}

/// Request body for a single journal line.
#[derive(Debug, Deserialize)]
pub struct LineRequest {
    /// Account code to post to.
    pub account: String,
    /// Debit amount (>= 0).
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount (>= 0).
    #[serde(default)]
    pub credit: Decimal,
    /// ISO currency code or ticker.
    pub currency: String,
    /// 1 unit of `currency` = `exchange_rate` units of functional currency.
    pub exchange_rate: Decimal,
    /// Optional functional-currency amount.
    pub local_amount: Option<Decimal>,
    /// Optional memo.
    pub memo: Option<String>,
}

/// Query parameters for listing journals.
#[derive(Debug, Deserialize)]
pub struct ListJournalsQuery {
    /// Filter by source kind tag (e.g. "ar_receipt").
    pub source: Option<String>,
    /// Earliest voucher date, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest voucher date, inclusive.
    pub to: Option<NaiveDate>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

/// Request body for reversing a journal.
#[derive(Debug, Default, Deserialize)]
pub struct ReverseJournalRequest {
    /// Business date of the reversing journal; defaults to today.
    pub voucher_date: Option<NaiveDate>,
}

/// Response for a journal.
#[derive(Debug, Serialize)]
pub struct JournalResponse {
    /// Journal ID.
    pub id: String,
    /// Voucher number.
    pub voucher_no: String,
    /// Business date.
    pub voucher_date: String,
    /// Originating record.
    pub source: Value,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// The balanced lines.
    pub lines: Vec<LineResponse>,
    /// Total debits in functional currency.
    pub total_debit: String,
    /// Total credits in functional currency.
    pub total_credit: String,
    /// Commit timestamp.
    pub created_at: String,
}

/// Response for a journal line.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    /// 1-based position within the journal.
    pub line_no: u32,
    /// Account ID posted to.
    pub account_id: String,
    /// Account code posted to.
    pub account_code: String,
    /// Debit amount in `currency`.
    pub debit: String,
    /// Credit amount in `currency`.
    pub credit: String,
    /// Line currency.
    pub currency: String,
    /// Exchange rate applied.
    pub exchange_rate: String,
    /// Signed functional-currency amount.
    pub local_amount: String,
    /// Subledger back-reference.
    pub link: Value,
    /// Optional memo.
    pub memo: Option<String>,
}

pub(crate) fn journal_response(state: &AppState, journal: &Journal) -> JournalResponse {
    let lines = journal
        .lines
        .iter()
        .map(|line| {
            let account_code = state
                .store
                .account(line.account_id)
                .map(|account| account.code)
                .unwrap_or_else(|_| line.account_id.to_string());
            LineResponse {
                line_no: line.line_no,
                account_id: line.account_id.to_string(),
                account_code,
                debit: line.debit.to_string(),
                credit: line.credit.to_string(),
                currency: line.currency.clone(),
                exchange_rate: line.exchange_rate.to_string(),
                local_amount: line.local_amount.to_string(),
                link: json!(line.link),
                memo: line.memo.clone(),
            }
        })
        .collect();

    JournalResponse {
        id: journal.id.to_string(),
        voucher_no: journal.voucher_no.clone(),
        voucher_date: journal.voucher_date.to_string(),
        source: json!(journal.source),
        remarks: journal.remarks.clone(),
        lines,
        total_debit: journal.total_debit().to_string(),
        total_credit: journal.total_credit().to_string(),
        created_at: journal.created_at.to_rfc3339(),
    }
}

fn parse_source(
    source_type: Option<&str>,
    source_id: Option<Uuid>,
) -> Result<JournalSource, ApiError> {
    let kind = source_type.unwrap_or("manual");
    if kind == "manual" {
        return Ok(JournalSource::Manual);
    }

    let id = source_id.ok_or_else(|| validation(format!("source_id is required for {kind}")))?;
    match kind {
        "ar_receipt" => Ok(JournalSource::ArReceipt(ArTransactionId::from_uuid(id))),
        "ap_payment" => Ok(JournalSource::ApPayment(ApTransactionId::from_uuid(id))),
        "bank_transfer" => Ok(JournalSource::BankTransfer(TransferId::from_uuid(id))),
        "fx_revaluation" => Ok(JournalSource::FxRevaluation(RevaluationId::from_uuid(id))),
        "reversal" => Ok(JournalSource::Reversal(JournalId::from_uuid(id))),
        other => Err(validation(format!("unknown source type {other}"))),
    }
}

/// POST `/journals` - Validate and post a journal.
async fn create_journal(
    State(state): State<AppState>,
    Json(payload): Json<CreateJournalRequest>,
) -> Result<(StatusCode, Json<JournalResponse>), ApiError> {
    let source = parse_source(payload.source_type.as_deref(), payload.source_id)?;

    let mut lines = Vec::with_capacity(payload.lines.len());
    for line in &payload.lines {
        let account = state.store.account_by_code(&line.account)?;
        lines.push(LineInput {
            account_id: account.id,
            debit: line.debit,
            credit: line.credit,
            currency: line.currency.clone(),
            exchange_rate: line.exchange_rate,
            local_amount: line.local_amount,
            link: None,
            memo: line.memo.clone(),
        });
    }

    let journal = state.store.create_journal(CreateJournalInput {
        voucher_date: payload
            .voucher_date
            .unwrap_or_else(|| Utc::now().date_naive()),
        source,
        remarks: payload.remarks,
        lines,
    })?;

    Ok((StatusCode::CREATED, Json(journal_response(&state, &journal))))
}

/// GET `/journals` - List journals in posting order.
async fn list_journals(
    State(state): State<AppState>,
    Query(query): Query<ListJournalsQuery>,
) -> Result<Json<PagedJournals>, ApiError> {
    let filter = JournalFilter {
        source: query.source,
        from: query.from,
        to: query.to,
    };
    let page = PageRequest {
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    };

    let result = state.store.list_journals(&filter, page)?;
    let data = result
        .data
        .iter()
        .map(|journal| journal_response(&state, journal))
        .collect();

    Ok(Json(PagedJournals {
        data,
        meta: result.meta,
    }))
}

/// Paginated journal listing.
#[derive(Debug, Serialize)]
pub struct PagedJournals {
    /// The journals in the current page.
    pub data: Vec<JournalResponse>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// GET `/journals/{id}` - Fetch one journal.
async fn get_journal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JournalResponse>, ApiError> {
    let journal = state.store.journal(JournalId::from_uuid(id))?;
    Ok(Json(journal_response(&state, &journal)))
}

/// POST `/journals/{id}/reverse` - Post a reversing journal.
async fn reverse_journal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Option<Json<ReverseJournalRequest>>,
) -> Result<(StatusCode, Json<JournalResponse>), ApiError> {
    let voucher_date = payload.and_then(|Json(body)| body.voucher_date);
    let journal = state
        .store
        .reverse_journal(JournalId::from_uuid(id), voucher_date)?;
    Ok((StatusCode::CREATED, Json(journal_response(&state, &journal))))
}

/// Creates the journal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/journals", post(create_journal))
        .route("/journals", get(list_journals))
        .route("/journals/{id}", get(get_journal))
        .route("/journals/{id}/reverse", post(reverse_journal))
}
