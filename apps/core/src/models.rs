use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use validator::Validate;

use crate::error::AppError;
use crate::prompt::PromptStyle;

pub const DEFAULT_MODEL_ID: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "EVOLVER_MODEL";
pub const ENV_BASE_URL: &str = "EVOLVER_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "EVOLVER_TIMEOUT_SECS";
pub const ENV_PROMPT_STYLE: &str = "EVOLVER_PROMPT_STYLE";

/// Represents the configuration for the text-generation endpoint.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct ModelConfig {
    /// Credential sent in the `key` query parameter. Never logged.
    #[validate(length(min = 1))]
    pub api_key: String,
    /// The model identifier templated into the endpoint path.
    #[validate(length(min = 1))]
    pub model_id: String,
    /// Scheme and host of the endpoint, without the `/v1beta/...` path.
    #[validate(url)]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[validate(range(min = 1, max = 600))]
    pub timeout_secs: u64,
    /// How the model is asked to answer.
    #[serde(default)]
    pub prompt_style: PromptStyle,
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &"<redacted>")
            .field("model_id", &self.model_id)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("prompt_style", &self.prompt_style)
            .finish()
    }
}

impl ModelConfig {
    /// Build a config with defaults for everything but the credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            prompt_style: PromptStyle::default(),
        }
    }

    /// Load from the process environment and validate.
    ///
    /// `GEMINI_API_KEY` is required; every other variable falls back to its default.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(ENV_API_KEY).map_err(|_| {
            AppError::Config(format!("{} environment variable not set", ENV_API_KEY))
        })?;

        let mut config = Self::new(api_key);

        if let Ok(model) = env::var(ENV_MODEL) {
            config.model_id = model;
        }
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw.trim().parse().map_err(|_| {
                AppError::Config(format!("{} must be a positive integer, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
        }
        if let Ok(style) = env::var(ENV_PROMPT_STYLE) {
            config.prompt_style = style.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 5] = [
        ENV_API_KEY,
        ENV_MODEL,
        ENV_BASE_URL,
        ENV_TIMEOUT_SECS,
        ENV_PROMPT_STYLE,
    ];

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let pairs: Vec<(&str, Option<&str>)> = ALL_VARS
            .iter()
            .map(|name| {
                let value = vars.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
                (*name, value)
            })
            .collect();
        temp_env::with_vars(pairs, f);
    }

    #[test]
    fn test_from_env_defaults() {
        with_env(&[(ENV_API_KEY, "test-key")], || {
            let config = ModelConfig::from_env().unwrap();
            assert_eq!(config.api_key, "test-key");
            assert_eq!(config.model_id, DEFAULT_MODEL_ID);
            assert_eq!(config.base_url, DEFAULT_BASE_URL);
            assert_eq!(config.timeout(), Duration::from_secs(60));
            assert_eq!(config.prompt_style, PromptStyle::Simple);
        });
    }

    #[test]
    fn test_from_env_overrides() {
        with_env(
            &[
                (ENV_API_KEY, "k"),
                (ENV_MODEL, "gemini-pro"),
                (ENV_BASE_URL, "http://localhost:9000"),
                (ENV_TIMEOUT_SECS, "5"),
                (ENV_PROMPT_STYLE, "structured"),
            ],
            || {
                let config = ModelConfig::from_env().unwrap();
                assert_eq!(config.model_id, "gemini-pro");
                assert_eq!(config.base_url, "http://localhost:9000");
                assert_eq!(config.timeout_secs, 5);
                assert_eq!(config.prompt_style, PromptStyle::Structured);
            },
        );
    }

    #[test]
    fn test_missing_key_is_config_error() {
        with_env(&[], || {
            assert!(matches!(ModelConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_invalid_values_rejected() {
        with_env(&[(ENV_API_KEY, "k"), (ENV_TIMEOUT_SECS, "0")], || {
            assert!(matches!(ModelConfig::from_env(), Err(AppError::Config(_))));
        });
        with_env(&[(ENV_API_KEY, "k"), (ENV_TIMEOUT_SECS, "soon")], || {
            assert!(matches!(ModelConfig::from_env(), Err(AppError::Config(_))));
        });
        with_env(&[(ENV_API_KEY, "k"), (ENV_BASE_URL, "not a url")], || {
            assert!(matches!(ModelConfig::from_env(), Err(AppError::Config(_))));
        });
        with_env(&[(ENV_API_KEY, "")], || {
            assert!(matches!(ModelConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ModelConfig::new("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
