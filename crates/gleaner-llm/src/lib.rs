//! Gleaner LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `gleaner-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic scripted provider for testing
//! - `OpenAiProvider`: OpenAI-compatible chat completions over HTTP
//!
//! Providers perform exactly one outbound call per `generate` invocation.
//! Retries, backoff, and timeouts are owned by the caller (the insight
//! generator), so replies and failures here map one-to-one onto wire
//! events.

#![warn(missing_docs)]

pub mod openai;

use gleaner_domain::traits::LlmProvider;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Malformed or unreadable response body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Authentication failed (bad or missing API key)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Requested model does not exist
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}

/// Deterministic mock provider for testing.
///
/// Returns a fixed response without making any network calls. Individual
/// replies (successes or failures) can be scripted ahead of time, which is
/// how retry behavior is exercised in tests.
///
/// # Examples
///
/// ```
/// use gleaner_llm::MockProvider;
/// use gleaner_domain::traits::LlmProvider;
///
/// # async fn example() {
/// let provider = MockProvider::new("{\"summary\": \"...\"}");
/// let reply = provider.generate("any prompt").await.unwrap();
/// assert_eq!(reply, "{\"summary\": \"...\"}");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    script: Arc<Mutex<VecDeque<Result<String, String>>>>,
    fail_always: Option<String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider returning a fixed response for every prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            fail_always: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider that fails every call with a communication error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            default_response: String::new(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            fail_always: Some(message.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a successful scripted reply; scripted replies are consumed
    /// in order before the default response applies
    pub fn push_ok(&self, response: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(response.into()));
    }

    /// Queue a scripted communication failure
    pub fn push_err(&self, message: impl Into<String>) {
        self.script.lock().unwrap().push_back(Err(message.into()));
    }

    /// Number of times `generate` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(message) = &self.fail_always {
            return Err(LlmError::Communication(message.clone()));
        }

        if let Some(scripted) = self.script.lock().unwrap().pop_front() {
            return scripted.map_err(LlmError::Communication);
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_fixed_response() {
        let provider = MockProvider::new("Test response");
        assert_eq!(provider.generate("any prompt").await.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_scripted_replies() {
        let provider = MockProvider::new("default");
        provider.push_err("connection reset");
        provider.push_ok("recovered");

        assert!(provider.generate("p").await.is_err());
        assert_eq!(provider.generate("p").await.unwrap(), "recovered");
        assert_eq!(provider.generate("p").await.unwrap(), "default");
    }

    #[tokio::test]
    async fn test_mock_provider_failing() {
        let provider = MockProvider::failing("boom");
        let result = provider.generate("p").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }

    #[tokio::test]
    async fn test_mock_provider_call_count_shared_across_clones() {
        let provider = MockProvider::new("test");
        let clone = provider.clone();

        provider.generate("p1").await.unwrap();
        clone.generate("p2").await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(clone.call_count(), 2);
    }
}
