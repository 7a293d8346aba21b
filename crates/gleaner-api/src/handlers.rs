//! HTTP request handlers for the analysis API.
//!
//! Implements the analyze, search, and health endpoints using axum, and
//! owns the mapping from the core's typed errors to HTTP status classes:
//! invalid input is the caller's fault (400), an unusable upstream model
//! is a service problem (503), storage faults are internal (500).

use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use gleaner_domain::traits::{LlmProvider, RecordStore};
use gleaner_domain::Analysis;
use gleaner_insight::AnalysisError;
use gleaner_store::StoreError;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Request body for the analyze endpoint
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyze (must not be empty)
    pub text: String,
}

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Term matched case-insensitively against topics and keywords;
    /// omitted means "return everything"
    pub topic: Option<String>,
}

/// Response body for the search endpoint
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Matching records, newest first
    pub results: Vec<Analysis>,
    /// Number of matches
    pub count: usize,
}

/// Response body for the health endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service health status
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Pipeline error from the analysis core
    Analysis(AnalysisError),
    /// Storage error
    Store(StoreError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Analysis(AnalysisError::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Analysis(e @ AnalysisError::Upstream(_)) => {
                error!(error = %e, "analysis failed upstream");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!("Service temporarily unavailable: {}", e),
                )
            }
            AppError::Store(e) => {
                error!(error = %e, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Internal(msg) => {
                error!(error = %msg, "internal failure");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<AnalysisError> for AppError {
    fn from(e: AnalysisError) -> Self {
        AppError::Analysis(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

/// POST /analyze - run the pipeline and persist the result
///
/// Persistence happens only after the core returns a complete draft; a
/// failed analysis never writes a partial record.
async fn analyze<L: LlmProvider + 'static>(
    State(state): State<AppState<L>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<Analysis>), AppError> {
    let draft = state.engine.analyze(&request.text).await?;

    let record = {
        let mut store = state
            .store
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        store.insert(&request.text, &draft)?
    };

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /search?topic=term - search stored analyses by topic or keyword
async fn search<L: LlmProvider + 'static>(
    State(state): State<AppState<L>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let results = {
        let store = state
            .store
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        store.search(params.topic.as_deref())?
    };

    let count = results.len();
    Ok(Json(SearchResponse { results, count }))
}

/// GET /health - liveness check
async fn health<L: LlmProvider + 'static>(
    State(_state): State<AppState<L>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "gleaner".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router<L: LlmProvider + 'static>(state: AppState<L>) -> Router {
    Router::new()
        .route("/analyze", post(analyze::<L>))
        .route("/search", get(search::<L>))
        .route("/health", get(health::<L>))
        .with_state(state)
}
