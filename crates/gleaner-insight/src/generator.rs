//! Structured insight generation against a language model
//!
//! Owns the one unreliable step of the pipeline: the outbound model call.
//! The network step (timeout + retry with exponential backoff) is kept
//! separate from the parse/validate step, so retry behavior is testable
//! independently of schema handling and parse failures are never retried.

use crate::config::InsightConfig;
use crate::error::InsightError;
use crate::parser::parse_insight;
use crate::prompt::PromptBuilder;
use gleaner_domain::{Insight, traits::LlmProvider};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Generates a validated [`Insight`] for a block of text.
///
/// Generic over the provider so tests substitute a deterministic mock.
pub struct InsightGenerator<L: LlmProvider> {
    provider: Arc<L>,
    config: InsightConfig,
}

impl<L: LlmProvider> InsightGenerator<L> {
    /// Create a generator around a provider
    pub fn new(provider: L, config: InsightConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Generate structured metadata for the given text.
    ///
    /// Fails with [`InsightError::Generation`] when the model is
    /// unreachable after all attempts, or [`InsightError::Schema`] when
    /// it replies with a payload that cannot be validated.
    pub async fn generate(&self, text: &str) -> Result<Insight, InsightError> {
        let prompt = PromptBuilder::new(text).build();
        debug!(prompt_len = prompt.len(), "requesting structured insight");

        let reply = self.call_model(&prompt).await?;
        debug!(reply_len = reply.len(), "model replied");

        parse_insight(&reply)
    }

    /// The isolated network step: bounded timeout per attempt, exponential
    /// backoff between attempts. Parse errors never reach this loop.
    async fn call_model(&self, prompt: &str) -> Result<String, InsightError> {
        let mut last_error = None;

        for attempt in 1..=self.config.max_attempts {
            match timeout(
                self.config.generation_timeout(),
                self.provider.generate(prompt),
            )
            .await
            {
                Ok(Ok(reply)) => return Ok(reply),
                Ok(Err(e)) => {
                    warn!(attempt, error = %e, "model call failed");
                    last_error = Some(InsightError::Generation(e.to_string()));
                }
                Err(_) => {
                    warn!(
                        attempt,
                        timeout_ms = self.config.generation_timeout_ms,
                        "model call timed out"
                    );
                    last_error = Some(InsightError::Generation(format!(
                        "Timed out after {} ms",
                        self.config.generation_timeout_ms
                    )));
                }
            }

            if attempt < self.config.max_attempts {
                tokio::time::sleep(self.config.backoff_delay(attempt)).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| InsightError::Generation("No attempts were made".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gleaner_llm::MockProvider;

    const VALID_REPLY: &str = r#"{
        "summary": "A short summary.",
        "title": "A Title",
        "topics": ["one", "two", "three"],
        "sentiment": "neutral",
        "confidence": 0.5
    }"#;

    fn quick_config(max_attempts: u32) -> InsightConfig {
        InsightConfig {
            max_attempts,
            backoff_base_ms: 1,
            generation_timeout_ms: 1_000,
            ..InsightConfig::default()
        }
    }

    #[tokio::test]
    async fn test_generate_valid_reply() {
        let generator = InsightGenerator::new(MockProvider::new(VALID_REPLY), quick_config(1));
        let insight = generator.generate("some text").await.unwrap();
        assert_eq!(insight.title.as_deref(), Some("A Title"));
        assert_eq!(insight.topics.len(), 3);
    }

    #[tokio::test]
    async fn test_all_attempts_fail_is_generation_error() {
        let provider = MockProvider::failing("connection refused");
        let generator = InsightGenerator::new(provider.clone(), quick_config(3));

        let err = generator.generate("text").await.unwrap_err();
        assert!(matches!(err, InsightError::Generation(_)));
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_transient_failure_recovers_on_retry() {
        let provider = MockProvider::new(VALID_REPLY);
        provider.push_err("connection reset");
        let generator = InsightGenerator::new(provider.clone(), quick_config(2));

        let insight = generator.generate("text").await.unwrap();
        assert_eq!(insight.sentiment, gleaner_domain::Sentiment::Neutral);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_schema_errors_are_not_retried() {
        let provider = MockProvider::new("not json at all");
        let generator = InsightGenerator::new(provider.clone(), quick_config(3));

        let err = generator.generate("text").await.unwrap_err();
        assert!(matches!(err, InsightError::Schema(_)));
        // One network call; the parse failure must not re-enter the retry loop
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_timeout_is_generation_error() {
        struct StallingProvider;

        impl LlmProvider for StallingProvider {
            type Error = std::convert::Infallible;

            async fn generate(&self, _prompt: &str) -> Result<String, Self::Error> {
                tokio::time::sleep(std::time::Duration::from_secs(60)).await;
                Ok(String::new())
            }
        }

        let config = InsightConfig {
            generation_timeout_ms: 20,
            max_attempts: 1,
            ..InsightConfig::default()
        };
        let generator = InsightGenerator::new(StallingProvider, config);

        let err = generator.generate("text").await.unwrap_err();
        match err {
            InsightError::Generation(msg) => assert!(msg.contains("Timed out")),
            other => panic!("expected Generation error, got {:?}", other),
        }
    }
}
