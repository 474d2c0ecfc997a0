//! CLI command implementations

pub mod config;
pub mod health;
pub mod search;
pub mod shops;
pub mod watch;
