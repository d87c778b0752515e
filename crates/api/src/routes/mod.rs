//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod accounts;
pub mod bank_accounts;
pub mod health;
pub mod journals;
pub mod postings;
pub mod revaluations;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(bank_accounts::routes())
        .merge(journals::routes())
        .merge(postings::routes())
        .merge(revaluations::routes())
}
