//! The extraction orchestrator
//!
//! Composes the deterministic keyword extractor and the probabilistic
//! insight generator into one analysis pipeline. Assembly is pure
//! merging: no insight field is altered based on the keywords or vice
//! versa, and the timestamp is assigned exactly once, after both
//! sub-results exist.

use crate::config::InsightConfig;
use crate::error::AnalysisError;
use crate::generator::InsightGenerator;
use gleaner_domain::{AnalysisDraft, traits::LlmProvider};
use gleaner_keywords::KeywordExtractor;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Orchestrates one analysis request end to end.
///
/// Holds no cross-request mutable state: the tagger lexicon and the
/// provider handle are built once and shared read-only, so one engine
/// serves concurrent requests. Collaborators are injected at
/// construction so tests run against deterministic stubs.
pub struct AnalysisEngine<L: LlmProvider> {
    generator: InsightGenerator<L>,
    keywords: KeywordExtractor,
    max_text_length: usize,
}

impl<L: LlmProvider> AnalysisEngine<L> {
    /// Create an engine around a provider
    pub fn new(provider: L, config: InsightConfig) -> Self {
        let keywords = KeywordExtractor::new().with_cap(config.keyword_cap);
        let max_text_length = config.max_text_length;
        Self {
            generator: InsightGenerator::new(provider, config),
            keywords,
            max_text_length,
        }
    }

    /// Analyze a block of text into a timestamped draft.
    ///
    /// Either the full draft is produced or a typed error is raised;
    /// there is no degraded partial success and nothing is persisted
    /// here - that is the caller's concern, after this returns.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisDraft, AnalysisError> {
        // Defend against input the boundary layer should have rejected
        if text.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "Text cannot be empty".to_string(),
            ));
        }
        if text.len() > self.max_text_length {
            return Err(AnalysisError::InvalidInput(format!(
                "Text too long: {} chars (max: {})",
                text.len(),
                self.max_text_length
            )));
        }

        info!(text_len = text.len(), "starting analysis");

        // Keywords first: pure and infallible, no data dependency on the
        // insight. The model call is the only step that can fail.
        let keywords = self.keywords.extract(text);
        debug!(keyword_count = keywords.len(), "keywords extracted");

        let insight = self.generator.generate(text).await?;
        debug!(sentiment = %insight.sentiment, "insight generated");

        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        info!(
            keyword_count = keywords.len(),
            confidence = insight.confidence,
            "analysis complete"
        );

        Ok(AnalysisDraft {
            insight,
            keywords,
            created_at,
        })
    }
}
