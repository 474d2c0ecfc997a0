//! Configuration loading and schema definitions
//!
//! Shared configuration types for the search library, API client and CLI.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
