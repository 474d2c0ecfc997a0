//! API client and search runtime for BeanHop
//!
//! This crate talks to the BeanHop backend and keeps search working when the
//! backend does not answer.
//!
//! # Features
//!
//! - **Environment-based configuration**: `[api]` settings with `BEANHOP_*` overrides
//! - **Retry with exponential backoff**: Automatic retry for transient failures
//! - **Circuit breaker**: Stop hammering a backend that is down
//! - **Request correlation**: Every request carries an `X-Request-ID`
//! - **Remote-first search**: Local ranking takes over when the backend fails
//! - **Debouncing**: Only the settled query of a burst of keystrokes runs
//!
//! # Example
//!
//! ```rust,no_run
//! use beanhop_api_client::{SearchMode, SearchSession};
//! use beanhop_core::config::ConfigSchema;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = SearchSession::init(&ConfigSchema::default(), SearchMode::RemoteFirst)?;
//!
//!     // Candidates for the local fallback
//!     let _ = session.refresh_shops().await;
//!
//!     let sourced = session.search("latte").await;
//!     println!("{} shops from {}", sourced.results.shops.len(), sourced.source);
//!
//!     session.teardown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod debounce;
pub mod endpoints;
pub mod error;
pub mod service;
pub mod session;

pub use client::BeanhopClient;
pub use config::{ClientConfig, Environment};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use error::{ApiError, ApiResult};
pub use service::{RemoteSearch, SearchService, SearchSource, SourcedResults};
pub use session::{SearchMode, SearchSession, SettledSearch};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::BeanhopClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{HealthApi, ListShopsParams, SearchApi, ShopsApi};
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::service::{SearchService, SearchSource, SourcedResults};
    pub use crate::session::{SearchMode, SearchSession, SettledSearch};
}
