//! Gleaner Domain Layer
//!
//! This crate contains the core domain model for Gleaner. It defines the
//! fundamental value types and the trait interfaces that all other layers
//! depend upon.
//!
//! ## Key Concepts
//!
//! - **Insight**: the structured metadata a language model produces for a
//!   block of text (summary, title, topics, sentiment, confidence)
//! - **Keywords**: deterministically extracted noun-like tokens, ranked by
//!   frequency - never sourced from the model
//! - **AnalysisDraft**: one merged, timestamped pipeline result, not yet
//!   persisted
//! - **Analysis**: the immutable persisted record with a store-assigned id
//!
//! ## Architecture
//!
//! - Pure value types and trait seams only
//! - Infrastructure implementations live in other crates
//! - The only external dependency is serde, because records cross the HTTP
//!   and storage boundaries as JSON

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod sentiment;
pub mod traits;

// Re-exports for convenience
pub use analysis::{Analysis, AnalysisDraft, Insight};
pub use sentiment::Sentiment;
