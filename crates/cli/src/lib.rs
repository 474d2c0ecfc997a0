//! CLI utilities for BeanHop tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Search result rendering
//! - Progress spinners

#![warn(missing_docs)]

pub mod output;
pub mod progress;
