//! Configuration for the insight pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the analysis engine and generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Maximum input text length (characters)
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,

    /// Bound on a single model call (milliseconds); an elapsed timeout is
    /// treated as a generation failure
    #[serde(default = "default_generation_timeout_ms")]
    pub generation_timeout_ms: u64,

    /// Total attempts for the network step, including the first
    /// (1 = no retries)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base delay for exponential backoff between attempts (milliseconds)
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,

    /// Cap on the number of extracted keywords
    #[serde(default = "default_keyword_cap")]
    pub keyword_cap: usize,
}

fn default_max_text_length() -> usize {
    50_000
}

fn default_generation_timeout_ms() -> u64 {
    30_000
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    1_000
}

fn default_keyword_cap() -> usize {
    gleaner_keywords::DEFAULT_KEYWORD_CAP
}

impl InsightConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_millis(self.generation_timeout_ms)
    }

    /// Backoff delay before retry number `attempt` (1-based):
    /// base, 2*base, 4*base, ...
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
        Duration::from_millis(self.backoff_base_ms.saturating_mul(factor))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.generation_timeout_ms == 0 {
            return Err("generation_timeout_ms must be greater than 0".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if self.keyword_cap == 0 {
            return Err("keyword_cap must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
            generation_timeout_ms: default_generation_timeout_ms(),
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
            keyword_cap: default_keyword_cap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(InsightConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let mut config = InsightConfig::default();
        config.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = InsightConfig::default();
        config.generation_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let config = InsightConfig {
            backoff_base_ms: 100,
            ..InsightConfig::default()
        };
        assert_eq!(config.backoff_delay(1), Duration::from_millis(100));
        assert_eq!(config.backoff_delay(2), Duration::from_millis(200));
        assert_eq!(config.backoff_delay(3), Duration::from_millis(400));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = InsightConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = InsightConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.max_text_length, parsed.max_text_length);
        assert_eq!(config.generation_timeout_ms, parsed.generation_timeout_ms);
        assert_eq!(config.max_attempts, parsed.max_attempts);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed = InsightConfig::from_toml("max_attempts = 1").unwrap();
        assert_eq!(parsed.max_attempts, 1);
        assert_eq!(parsed.max_text_length, 50_000);
    }
}
