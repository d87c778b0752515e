//! Glint API Server
//!
//! Main entry point for the Glint posting-engine service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glint_api::{AppState, create_router};
use glint_shared::AppConfig;
use glint_store::{LedgerStore, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glint=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Build the ledger store and install the chart of accounts
    let store = LedgerStore::from_config(&config.ledger);
    seed::install_default_chart(&store, &config.ledger)?;
    info!(
        functional_currency = %config.ledger.functional_currency,
        "ledger store seeded"
    );

    // Create application state
    let state = AppState {
        store: Arc::new(store),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
