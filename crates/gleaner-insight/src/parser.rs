//! Parse and validate LLM output into a typed Insight
//!
//! Strict parse-then-validate: the untyped model reply either becomes a
//! fully validated [`Insight`] or a [`InsightError::Schema`]. Nothing
//! untyped leaves this module.

use crate::error::InsightError;
use gleaner_domain::{Insight, Sentiment, analysis::TOPIC_COUNT};
use serde_json::Value;
use tracing::warn;

/// Parse the raw model reply into a validated Insight.
///
/// Normalization applied before validation:
/// - markdown code fences stripped
/// - string fields trimmed
/// - `title` of null/missing/empty becomes `None`
/// - topics trimmed, empties dropped, deduplicated case-insensitively,
///   and truncated to [`TOPIC_COUNT`] when the model over-produces
/// - numeric confidence clamped into `[0.0, 1.0]`
///
/// Fewer than [`TOPIC_COUNT`] topics after normalization is a hard
/// schema failure; over-count is repaired by truncation.
pub fn parse_insight(response: &str) -> Result<Insight, InsightError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| InsightError::Schema(format!("JSON parse error: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| InsightError::Schema("Expected a JSON object".to_string()))?;

    let summary = obj
        .get("summary")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| InsightError::Schema("Missing or empty 'summary'".to_string()))?
        .to_string();

    let title = parse_title(obj.get("title"))?;
    let topics = parse_topics(obj.get("topics"))?;

    let sentiment: Sentiment = obj
        .get("sentiment")
        .and_then(|v| v.as_str())
        .ok_or_else(|| InsightError::Schema("Missing 'sentiment'".to_string()))?
        .parse()
        .map_err(|e| InsightError::Schema(format!("{}", e)))?;

    let confidence = obj
        .get("confidence")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| InsightError::Schema("Missing or non-numeric 'confidence'".to_string()))?;

    let confidence = if (0.0..=1.0).contains(&confidence) {
        confidence
    } else {
        warn!(confidence, "confidence out of range, clamping into [0, 1]");
        confidence.clamp(0.0, 1.0)
    };

    Ok(Insight {
        summary,
        title,
        topics,
        sentiment,
        confidence,
    })
}

/// Extract JSON from the reply, handling markdown code fences
fn extract_json(response: &str) -> Result<String, InsightError> {
    let trimmed = response.trim();

    if trimmed.is_empty() {
        return Err(InsightError::Schema("Empty response".to_string()));
    }

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(InsightError::Schema("Empty code block".to_string()));
        }
        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_title(value: Option<&Value>) -> Result<Option<String>, InsightError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(other) => Err(InsightError::Schema(format!(
            "'title' must be a string or null, got {}",
            other
        ))),
    }
}

fn parse_topics(value: Option<&Value>) -> Result<Vec<String>, InsightError> {
    let array = value
        .and_then(|v| v.as_array())
        .ok_or_else(|| InsightError::Schema("Missing or non-array 'topics'".to_string()))?;

    let mut topics: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for entry in array {
        let topic = entry
            .as_str()
            .ok_or_else(|| InsightError::Schema(format!("Non-string topic: {}", entry)))?
            .trim();
        if topic.is_empty() {
            continue;
        }
        let folded = topic.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        topics.push(topic.to_string());
    }

    if topics.len() > TOPIC_COUNT {
        warn!(
            count = topics.len(),
            "model returned extra topics, truncating to {}", TOPIC_COUNT
        );
        topics.truncate(TOPIC_COUNT);
    }

    if topics.len() < TOPIC_COUNT {
        return Err(InsightError::Schema(format!(
            "Expected {} topics, got {}",
            TOPIC_COUNT,
            topics.len()
        )));
    }

    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "summary": "Apple launched a chip and markets approved.",
        "title": null,
        "topics": ["Apple", "semiconductors", "stock market"],
        "sentiment": "positive",
        "confidence": 0.92
    }"#;

    #[test]
    fn test_parse_valid_payload() {
        let insight = parse_insight(VALID).unwrap();
        assert_eq!(insight.summary, "Apple launched a chip and markets approved.");
        assert_eq!(insight.title, None);
        assert_eq!(insight.topics, vec!["Apple", "semiconductors", "stock market"]);
        assert_eq!(insight.sentiment, Sentiment::Positive);
        assert!((insight.confidence - 0.92).abs() < 1e-9);
    }

    #[test]
    fn test_parse_with_markdown_wrapper() {
        let wrapped = format!("```json\n{}\n```", VALID);
        let insight = parse_insight(&wrapped).unwrap();
        assert_eq!(insight.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_parse_invalid_json_is_schema_error() {
        let result = parse_insight("This is not JSON");
        assert!(matches!(result, Err(InsightError::Schema(_))));
    }

    #[test]
    fn test_array_payload_rejected() {
        let result = parse_insight("[1, 2, 3]");
        assert!(matches!(result, Err(InsightError::Schema(_))));
    }

    #[test]
    fn test_missing_summary_rejected() {
        let payload = r#"{"title": null, "topics": ["a","b","c"], "sentiment": "neutral", "confidence": 0.5}"#;
        let err = parse_insight(payload).unwrap_err();
        assert!(err.to_string().contains("summary"));
    }

    #[test]
    fn test_empty_summary_rejected() {
        let payload = r#"{"summary": "  ", "title": null, "topics": ["a","b","c"], "sentiment": "neutral", "confidence": 0.5}"#;
        assert!(parse_insight(payload).is_err());
    }

    #[test]
    fn test_empty_string_title_becomes_none() {
        let payload = r#"{"summary": "s", "title": "  ", "topics": ["a","b","c"], "sentiment": "neutral", "confidence": 0.5}"#;
        let insight = parse_insight(payload).unwrap();
        assert_eq!(insight.title, None);
    }

    #[test]
    fn test_missing_title_field_becomes_none() {
        let payload = r#"{"summary": "s", "topics": ["a","b","c"], "sentiment": "neutral", "confidence": 0.5}"#;
        let insight = parse_insight(payload).unwrap();
        assert_eq!(insight.title, None);
    }

    #[test]
    fn test_title_is_trimmed() {
        let payload = r#"{"summary": "s", "title": " A Title ", "topics": ["a","b","c"], "sentiment": "neutral", "confidence": 0.5}"#;
        let insight = parse_insight(payload).unwrap();
        assert_eq!(insight.title.as_deref(), Some("A Title"));
    }

    #[test]
    fn test_two_topics_is_hard_failure() {
        let payload = r#"{"summary": "s", "title": null, "topics": ["a","b"], "sentiment": "neutral", "confidence": 0.5}"#;
        let err = parse_insight(payload).unwrap_err();
        assert!(matches!(err, InsightError::Schema(_)));
        assert!(err.to_string().contains("topics"));
    }

    #[test]
    fn test_extra_topics_repaired_by_truncation() {
        let payload = r#"{"summary": "s", "title": null, "topics": ["a","b","c","d","e"], "sentiment": "neutral", "confidence": 0.5}"#;
        let insight = parse_insight(payload).unwrap();
        assert_eq!(insight.topics, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_topics_collapse_then_fail_undercount() {
        // 3 raw entries, but 2 after case-insensitive dedup
        let payload = r#"{"summary": "s", "title": null, "topics": ["AI", "ai", "health"], "sentiment": "neutral", "confidence": 0.5}"#;
        assert!(parse_insight(payload).is_err());
    }

    #[test]
    fn test_duplicate_topics_collapse_with_enough_left() {
        let payload = r#"{"summary": "s", "title": null, "topics": ["AI", "ai", "health", "policy"], "sentiment": "neutral", "confidence": 0.5}"#;
        let insight = parse_insight(payload).unwrap();
        assert_eq!(insight.topics, vec!["AI", "health", "policy"]);
    }

    #[test]
    fn test_unknown_sentiment_rejected() {
        let payload = r#"{"summary": "s", "title": null, "topics": ["a","b","c"], "sentiment": "ecstatic", "confidence": 0.5}"#;
        let err = parse_insight(payload).unwrap_err();
        assert!(err.to_string().contains("sentiment"));
    }

    #[test]
    fn test_sentiment_case_insensitive() {
        let payload = r#"{"summary": "s", "title": null, "topics": ["a","b","c"], "sentiment": "Negative", "confidence": 0.5}"#;
        let insight = parse_insight(payload).unwrap();
        assert_eq!(insight.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_out_of_range_confidence_clamped() {
        let payload = r#"{"summary": "s", "title": null, "topics": ["a","b","c"], "sentiment": "neutral", "confidence": 1.7}"#;
        let insight = parse_insight(payload).unwrap();
        assert_eq!(insight.confidence, 1.0);

        let payload = r#"{"summary": "s", "title": null, "topics": ["a","b","c"], "sentiment": "neutral", "confidence": -0.2}"#;
        let insight = parse_insight(payload).unwrap();
        assert_eq!(insight.confidence, 0.0);
    }

    #[test]
    fn test_non_numeric_confidence_rejected() {
        let payload = r#"{"summary": "s", "title": null, "topics": ["a","b","c"], "sentiment": "neutral", "confidence": "high"}"#;
        assert!(parse_insight(payload).is_err());
    }

    #[test]
    fn test_extract_json_from_fence_without_language() {
        let wrapped = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(wrapped).unwrap().trim(), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_empty_response_rejected() {
        assert!(parse_insight("").is_err());
        assert!(parse_insight("   ").is_err());
    }
}
