//! HTTP API layer with Axum routes for the Glint posting engine.
//!
//! This crate provides:
//! - REST API routes for journals, postings, and revaluations
//! - Bank account and chart-of-accounts read/admin endpoints
//! - A JSON error envelope carrying the violated rule

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use glint_store::LedgerStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The ledger store.
    pub store: Arc<LedgerStore>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
