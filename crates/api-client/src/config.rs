//! Configuration for the BeanHop API client
//!
//! Settings come from the `[api]` section of `beanhop.toml`, with
//! environment variables layered on top.

use crate::error::{ApiError, ApiResult};
use beanhop_core::config::ApiConfig;
use beanhop_core::retry::RetryConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Environment types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development backend
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name; unknown names mean production
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" | "local" => Self::Development,
            "staging" | "stage" => Self::Staging,
            _ => Self::Production,
        }
    }

    /// Retry policy suited to this environment
    #[must_use]
    pub fn retry_policy(self) -> RetryConfig {
        match self {
            Self::Development => RetryConfig::quick(),
            Self::Staging => RetryConfig::default(),
            Self::Production => RetryConfig::patient(),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix
    pub base_url: String,
    /// Bearer token sent with every request
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Retry configuration
    pub retry: RetryConfig,
    /// Current environment
    pub environment: Environment,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_settings(&ApiConfig::default())
    }
}

impl ClientConfig {
    /// Build from the `[api]` settings alone
    #[must_use]
    pub fn from_settings(settings: &ApiConfig) -> Self {
        let environment = Environment::default();
        Self {
            base_url: settings.base_url.clone(),
            api_key: None,
            timeout: Duration::from_secs(settings.timeout_secs),
            retry: environment.retry_policy(),
            environment,
        }
    }

    /// Create configuration from environment variables only
    pub fn from_env() -> ApiResult<Self> {
        Self::from_settings_and_env(&ApiConfig::default())
    }

    /// Build from the `[api]` settings, then apply environment overrides
    ///
    /// Reads the following environment variables:
    /// - `BEANHOP_API_URL`: base URL, including the `/api` prefix
    /// - `BEANHOP_API_KEY`: bearer token
    /// - `BEANHOP_ENV`: environment (development/staging/production)
    /// - `BEANHOP_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_settings_and_env(settings: &ApiConfig) -> ApiResult<Self> {
        Self::with_overrides(settings, |key| env::var(key).ok())
    }

    fn with_overrides(
        settings: &ApiConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ApiResult<Self> {
        let mut config = Self::from_settings(settings);

        if let Some(url) = lookup("BEANHOP_API_URL") {
            config.base_url = url;
        }

        config.api_key = lookup("BEANHOP_API_KEY").filter(|key| !key.is_empty());

        if let Some(name) = lookup("BEANHOP_ENV") {
            config.environment = Environment::parse(&name);
            config.retry = config.environment.retry_policy();
        }

        if let Some(raw) = lookup("BEANHOP_TIMEOUT_SECS") {
            let secs: u64 = raw
                .parse()
                .map_err(|_| ApiError::config(format!("BEANHOP_TIMEOUT_SECS is not a number: {raw}")))?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set retry config
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        if self.retry.max_attempts == 0 {
            return Err(ApiError::config("retry.max_attempts must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.environment, Environment::Production);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::with_overrides(
            &ApiConfig::default(),
            lookup(&[
                ("BEANHOP_API_URL", "https://api.beanhop.app/api"),
                ("BEANHOP_ENV", "dev"),
                ("BEANHOP_TIMEOUT_SECS", "3"),
                ("BEANHOP_API_KEY", "secret"),
            ]),
        )
        .unwrap();

        assert_eq!(config.base_url, "https://api.beanhop.app/api");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.retry, RetryConfig::quick());
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_bad_timeout_override() {
        let result = ClientConfig::with_overrides(
            &ApiConfig::default(),
            lookup(&[("BEANHOP_TIMEOUT_SECS", "soon")]),
        );
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("STAGING"), Environment::Staging);
        assert_eq!(Environment::parse("local"), Environment::Development);
        assert_eq!(Environment::parse("anything"), Environment::Production);
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(ClientConfig::default().with_base_url("localhost:8001").validate().is_err());
        assert!(ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}
