//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::analysis::{Analysis, AnalysisDraft};
use std::future::Future;

/// Trait for language model completion operations
///
/// Implemented by the infrastructure layer (gleaner-llm). The provider is
/// constructed once at startup and shared read-only across requests, so
/// implementations must be `Send + Sync`.
pub trait LlmProvider: Send + Sync {
    /// Error type for provider operations
    type Error: std::fmt::Display + Send;

    /// Generate a completion for the given prompt.
    ///
    /// One outbound call per invocation; retries and timeouts are the
    /// caller's concern.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Trait for persisting and querying analysis records
///
/// Implemented by the infrastructure layer (gleaner-store). The store owns
/// identifier assignment; the core never persists anything itself.
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Persist a draft together with the raw input text, assigning the
    /// next monotonic identifier
    fn insert(&mut self, raw_text: &str, draft: &AnalysisDraft) -> Result<Analysis, Self::Error>;

    /// Get a record by id
    fn get(&self, id: i64) -> Result<Option<Analysis>, Self::Error>;

    /// Search records whose topics or keywords contain the term,
    /// case-insensitively; `None` returns all records. Newest first.
    fn search(&self, term: Option<&str>) -> Result<Vec<Analysis>, Self::Error>;
}
