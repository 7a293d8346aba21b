//! Gleaner API
//!
//! HTTP surface for the analysis pipeline. Wires the engine, the record
//! store, and the model provider together and serves three endpoints:
//!
//! - `POST /analyze` - run the pipeline on a block of text, persist and
//!   return the record
//! - `GET /search?topic=term` - case-insensitive search over stored
//!   topics and keywords
//! - `GET /health` - liveness check

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ApiConfig;
use gleaner_domain::traits::LlmProvider;
use gleaner_insight::AnalysisEngine;
use gleaner_llm::OpenAiProvider;
use gleaner_store::SqliteStore;
use handlers::create_router;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

/// API server error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Storage error during startup
    #[error("Store error: {0}")]
    Store(#[from] gleaner_store::StoreError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Shared application state
///
/// Engine and store are process-wide: the engine is read-only and served
/// concurrently; the store serializes writes behind its mutex.
pub struct AppState<L: LlmProvider> {
    /// The analysis engine (read-only, shared across requests)
    pub engine: Arc<AnalysisEngine<L>>,
    /// The record store (writes serialized)
    pub store: Arc<Mutex<SqliteStore>>,
}

impl<L: LlmProvider> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            store: Arc::clone(&self.store),
        }
    }
}

/// Start the API server.
///
/// Builds the provider, engine, and store once at startup, then serves
/// until the process is stopped.
pub async fn start_server(config: ApiConfig) -> Result<(), ApiError> {
    let api_key = config.resolve_api_key()?;

    info!("Starting Gleaner API");
    info!("Bind address: {}", config.bind_addr());
    info!("Database: {}", config.database_path);
    info!("Model: {} via {}", config.llm.model, config.llm.base_url);

    let provider =
        OpenAiProvider::with_base_url(&config.llm.base_url, api_key, &config.llm.model)
            .with_timeout(Duration::from_millis(config.insight.generation_timeout_ms));

    let engine = AnalysisEngine::new(provider, config.insight.clone());
    let store = SqliteStore::new(&config.database_path)?;

    let state = AppState {
        engine: Arc::new(engine),
        store: Arc::new(Mutex::new(store)),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ApiError::Server(e.to_string()))?;

    Ok(())
}
