//! Analysis record types

use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};

/// Number of topics an insight must carry
pub const TOPIC_COUNT: usize = 3;

/// Structured metadata produced by the language model for one text.
///
/// An `Insight` is only constructed by the generator after the model reply
/// has passed validation, so holders can rely on its invariants: non-empty
/// summary, exactly [`TOPIC_COUNT`] deduplicated topics, and a confidence
/// in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// 1-2 sentence summary of the text
    pub summary: String,

    /// Title when one is identifiable, `None` for fragments/lists
    pub title: Option<String>,

    /// Exactly [`TOPIC_COUNT`] short topic strings, deduplicated,
    /// model order preserved
    pub topics: Vec<String>,

    /// Overall sentiment label
    pub sentiment: Sentiment,

    /// Model's confidence in its own analysis, in `[0.0, 1.0]`
    pub confidence: f64,
}

/// One completed pipeline run, assembled but not yet persisted.
///
/// Keywords come from the deterministic extractor and are never derived
/// from the insight fields (or vice versa). The timestamp is assigned
/// exactly once, at assembly time, after both sub-results exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDraft {
    /// Model-derived metadata
    pub insight: Insight,

    /// Extracted keywords, lowercase, ranked by salience (may be empty)
    pub keywords: Vec<String>,

    /// Assembly time, UTC unix seconds
    pub created_at: u64,
}

/// The immutable persisted result of one pipeline run.
///
/// Identifiers are assigned by the store and are monotonic. Records are
/// never edited; a new analysis of the same text creates a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Store-assigned monotonic identifier
    pub id: i64,

    /// 1-2 sentence summary of the text
    pub summary: String,

    /// Extracted title, if one was identifiable
    pub title: Option<String>,

    /// Exactly [`TOPIC_COUNT`] key topics
    pub topics: Vec<String>,

    /// Overall sentiment label
    pub sentiment: Sentiment,

    /// Deterministically extracted keywords
    pub keywords: Vec<String>,

    /// Model confidence in `[0.0, 1.0]`
    pub confidence: f64,

    /// Creation time, UTC unix seconds
    pub created_at: u64,
}

impl Analysis {
    /// Build a persisted record from a draft and a store-assigned id
    pub fn from_draft(id: i64, draft: AnalysisDraft) -> Self {
        Self {
            id,
            summary: draft.insight.summary,
            title: draft.insight.title,
            topics: draft.insight.topics,
            sentiment: draft.insight.sentiment,
            keywords: draft.keywords,
            confidence: draft.insight.confidence,
            created_at: draft.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> AnalysisDraft {
        AnalysisDraft {
            insight: Insight {
                summary: "A short summary.".to_string(),
                title: Some("A Title".to_string()),
                topics: vec!["ai".into(), "health".into(), "policy".into()],
                sentiment: Sentiment::Neutral,
                confidence: 0.8,
            },
            keywords: vec!["intelligence".into(), "hospital".into()],
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_from_draft_carries_all_fields() {
        let draft = sample_draft();
        let record = Analysis::from_draft(42, draft.clone());

        assert_eq!(record.id, 42);
        assert_eq!(record.summary, draft.insight.summary);
        assert_eq!(record.title, draft.insight.title);
        assert_eq!(record.topics, draft.insight.topics);
        assert_eq!(record.sentiment, draft.insight.sentiment);
        assert_eq!(record.keywords, draft.keywords);
        assert_eq!(record.confidence, draft.insight.confidence);
        assert_eq!(record.created_at, draft.created_at);
    }

    #[test]
    fn test_record_serializes_null_title() {
        let mut draft = sample_draft();
        draft.insight.title = None;
        let record = Analysis::from_draft(1, draft);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["title"].is_null());
        assert_eq!(json["sentiment"], "neutral");
    }
}
