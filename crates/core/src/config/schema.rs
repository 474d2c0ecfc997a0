//! Configuration schema definitions
//!
//! Every section is optional in the file; missing keys fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    /// Local ranking and debounce settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search runs
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Maximum shops returned by the local ranker
    #[serde(default = "default_max_shops")]
    pub max_shops: usize,

    /// Maximum suggestions returned by the local ranker
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// `limit` sent to the remote search endpoint
    #[serde(default = "default_remote_limit")]
    pub remote_limit: usize,

    /// Popular search terms offered as suggestions
    #[serde(default = "default_popular_terms")]
    pub popular_terms: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            max_shops: default_max_shops(),
            max_suggestions: default_max_suggestions(),
            remote_limit: default_remote_limit(),
            popular_terms: default_popular_terms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_max_shops() -> usize {
    10
}

fn default_max_suggestions() -> usize {
    5
}

fn default_remote_limit() -> usize {
    20
}

fn default_popular_terms() -> Vec<String> {
    [
        "Latte",
        "Espresso",
        "Cold Brew",
        "Matcha",
        "Cappuccino",
        "Americano",
        "Mocha",
        "Croissant",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the REST API, including the `/api` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Only list active shops
    #[serde(default = "default_true")]
    pub active_only: bool,

    /// City filter applied when loading candidates
    #[serde(default)]
    pub city: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            active_only: true,
            city: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8001/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
