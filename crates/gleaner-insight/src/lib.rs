//! Gleaner Insight Pipeline
//!
//! The extraction core: turns one block of free-form text into one
//! structured analysis by combining two independent sources under
//! well-defined precedence and fallback rules.
//!
//! # Architecture
//!
//! ```text
//!               ┌→ KeywordExtractor (pure, deterministic, cannot fail)
//! Text → Engine ┤
//!               └→ InsightGenerator → LLM → parse + validate → Insight
//!                        ↓ merge
//!                  AnalysisDraft (timestamped, ready to persist)
//! ```
//!
//! # Key Properties
//!
//! - **Strict parse-then-validate**: untyped model output never crosses
//!   the generator boundary; callers see a typed `Insight` or a typed
//!   error
//! - **Isolated retry**: the retry/timeout policy wraps only the network
//!   step, never parsing or validation
//! - **All-or-nothing**: either a full draft is assembled or a typed
//!   error is raised - no synthesized fallback fields, no partial records
//!
//! # Example Usage
//!
//! ```no_run
//! use gleaner_insight::{AnalysisEngine, InsightConfig};
//! use gleaner_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{
//!     "summary": "Apple launched a chip and the market approved.",
//!     "title": null,
//!     "topics": ["Apple", "semiconductors", "stock market"],
//!     "sentiment": "positive",
//!     "confidence": 0.9
//! }"#);
//!
//! let engine = AnalysisEngine::new(provider, InsightConfig::default());
//! let draft = engine
//!     .analyze("Apple unveiled a new chip today. Investors reacted positively.")
//!     .await?;
//!
//! assert_eq!(draft.insight.topics.len(), 3);
//! assert!(draft.keywords.contains(&"chip".to_string()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod generator;
mod parser;
mod prompt;


pub use config::InsightConfig;
pub use engine::AnalysisEngine;
pub use error::{AnalysisError, InsightError};
pub use generator::InsightGenerator;
