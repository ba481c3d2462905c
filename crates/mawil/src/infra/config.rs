//! Assistant endpoint configuration.

use std::time::Duration;

/// Primary environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Fallback variable name kept for deployments that export a generic key.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Upper bound for one outstanding assistant request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to reach the text-generation endpoint.
///
/// Only the credential comes from the environment; the remaining fields are
/// fixed defaults that tests may override.
#[derive(Clone, Debug, PartialEq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub request_timeout: Duration,
    pub temperature: f32,
}

impl AssistantConfig {
    /// Reads the credential from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config using `lookup` to resolve environment variables.
    ///
    /// Blank values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = [API_KEY_ENV, FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter_map(&lookup)
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Returns whether a credential is available.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
