//! Error types for the insight pipeline

use thiserror::Error;

/// Errors from the structured insight generator.
///
/// The two variants are deliberately distinct so callers can tell
/// "service unreachable" (transient, reasonable to retry) from "service
/// returned garbage" (likely a prompt/schema mismatch, not retried
/// blindly).
#[derive(Error, Debug)]
pub enum InsightError {
    /// The upstream model call failed: timeout, network, authentication,
    /// or rate limit
    #[error("Generation failed: {0}")]
    Generation(String),

    /// The upstream call succeeded but the payload could not be coerced
    /// into the required shape after best-effort normalization
    #[error("Schema validation failed: {0}")]
    Schema(String),
}

/// Errors from the analysis orchestrator
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Empty, whitespace-only, or oversized input text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The generator could not produce a usable insight; no record is
    /// constructed
    #[error("Upstream analysis unavailable: {0}")]
    Upstream(#[from] InsightError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_wraps_into_upstream() {
        let err: AnalysisError = InsightError::Generation("timed out".to_string()).into();
        assert!(matches!(
            err,
            AnalysisError::Upstream(InsightError::Generation(_))
        ));
    }

    #[test]
    fn test_error_messages_name_the_failure_class() {
        let gen = InsightError::Generation("connection refused".to_string());
        let schema = InsightError::Schema("expected 3 topics".to_string());
        assert!(gen.to_string().contains("Generation failed"));
        assert!(schema.to_string().contains("Schema validation failed"));
    }
}
