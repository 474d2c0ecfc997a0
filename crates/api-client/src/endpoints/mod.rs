//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one group of backend routes.
//!
//! | Module | Route | Description |
//! |--------|-------|-------------|
//! | `search` | `GET /search` | Server-side shop and menu search |
//! | `shops` | `GET /shops`, `GET /shops/{id}` | Shop listing used as local candidates |
//! | `health` | `GET /health` | Liveness probe |

pub mod health;
pub mod search;
pub mod shops;

pub use health::{HealthApi, HealthResponse};
pub use search::SearchApi;
pub use shops::{ListShopsParams, ShopsApi};
