//! Configuration file parsing for the API server.
//!
//! Loads settings from TOML files: bind address, database path, model
//! provider settings, and the insight pipeline tunables. The API key is
//! never stored in the file; the config names the environment variable
//! that carries it.

use gleaner_insight::InsightConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// API configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The configured API key environment variable is not set
    #[error("API key environment variable '{0}' is not set")]
    MissingApiKey(String),

    /// Invalid pipeline settings
    #[error("Invalid insight config: {0}")]
    InvalidInsight(String),
}

/// API server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// SQLite database path
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Model provider settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Insight pipeline settings
    #[serde(default)]
    pub insight: InsightConfig,
}

/// Model provider settings
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// API base URL for an OpenAI-compatible endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    8080
}

fn default_database_path() -> String {
    "gleaner.db".to_string()
}

fn default_base_url() -> String {
    gleaner_llm::openai::DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            database_path: default_database_path(),
            llm: LlmConfig::default(),
            insight: InsightConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ApiConfig = toml::from_str(&contents)?;
        config.insight.validate().map_err(ConfigError::InvalidInsight)?;
        Ok(config)
    }

    /// The full bind address, e.g. "127.0.0.1:8080"
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Resolve the API key from the configured environment variable
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.llm.api_key_env)
            .map_err(|_| ConfigError::MissingApiKey(self.llm.api_key_env.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ApiConfig = toml::from_str("").unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.llm.model, "gpt-4.1-mini");
        assert_eq!(config.database_path, "gleaner.db");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: ApiConfig = toml::from_str(
            r#"
            bind_port = 9000
            database_path = "/tmp/test.db"

            [llm]
            model = "local-model"
            base_url = "http://localhost:11434"

            [insight]
            max_attempts = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.llm.model, "local-model");
        assert_eq!(config.insight.max_attempts, 1);
        // untouched sections keep defaults
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.insight.max_text_length, 50_000);
    }

    #[test]
    fn test_missing_api_key_env_is_an_error() {
        let mut config = ApiConfig::default();
        config.llm.api_key_env = "GLEANER_TEST_KEY_THAT_DOES_NOT_EXIST".to_string();
        assert!(matches!(
            config.resolve_api_key(),
            Err(ConfigError::MissingApiKey(_))
        ));
    }
}
