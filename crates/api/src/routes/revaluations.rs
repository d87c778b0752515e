//! Period-end FX revaluation endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use chrono::NaiveDate;
use glint_shared::types::BankAccountId;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;
use crate::routes::journals::journal_response;
use glint_store::{RevaluationInput, RevaluationOutcome};

/// Request body for a revaluation run.
#[derive(Debug, Deserialize)]
pub struct RevaluationRequest {
    /// The foreign-currency bank account to revalue.
    pub bank_account_id: Uuid,
    /// Cutoff date of the aggregation.
    pub as_of_date: NaiveDate,
    /// The spot rate to restate at.
    pub spot_rate: Decimal,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

/// POST `/revaluations` - Revalue a bank account as of a date.
///
/// Returns the adjusting journal, or the computed figures alone when the
/// booked value already matches the spot value.
async fn post_revaluation(
    State(state): State<AppState>,
    Json(payload): Json<RevaluationRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let outcome = state.store.post_revaluation(RevaluationInput {
        bank_account_id: BankAccountId::from_uuid(payload.bank_account_id),
        as_of: payload.as_of_date,
        spot_rate: payload.spot_rate,
        remarks: payload.remarks,
    })?;

    match outcome {
        RevaluationOutcome::NoAdjustment { figures } => Ok((
            StatusCode::OK,
            Json(json!({
                "figures": figures,
                "revaluation": Value::Null,
                "journal": Value::Null,
            })),
        )),
        RevaluationOutcome::Booked {
            revaluation,
            journal,
        } => Ok((
            StatusCode::CREATED,
            Json(json!({
                "revaluation": revaluation,
                "journal": journal_response(&state, &journal),
            })),
        )),
    }
}

/// Creates the revaluation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/revaluations", post(post_revaluation))
}
