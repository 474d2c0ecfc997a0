//! Core utilities for BeanHop search tools
//!
//! This crate provides shared functionality used by the search library, the
//! API client and the command-line front end:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults for every section
//! - **Resilience**: retry policies with backoff and a circuit breaker
//!
//! # Example
//!
//! ```rust,no_run
//! use beanhop_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! assert_eq!(config.schema.search.debounce_ms, 300);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod retry;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ApiConfig, Config, ConfigSchema, LoggingConfig, SearchConfig};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::retry::{CircuitBreaker, CircuitBreakerConfig, CircuitState, RetryConfig};
}
