//! Sentiment label for an analyzed text

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Overall sentiment of a text, restricted to a fixed 3-label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Predominantly favorable tone
    Positive,
    /// No clear tonal lean
    Neutral,
    /// Predominantly unfavorable tone
    Negative,
}

impl Sentiment {
    /// Wire representation of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the three sentiment labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSentimentError(pub String);

impl fmt::Display for ParseSentimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sentiment label '{}' (expected positive, neutral, or negative)",
            self.0
        )
    }
}

impl std::error::Error for ParseSentimentError {}

impl FromStr for Sentiment {
    type Err = ParseSentimentError;

    /// Parse a label case-insensitively, ignoring surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(ParseSentimentError(s.to_string())),
        }
    }
}
