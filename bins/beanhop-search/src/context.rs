//! Shared state for command handlers

use crate::OutputFormat;
use anyhow::Result;
use beanhop_api_client::{SearchMode, SearchSession};
use beanhop_core::config::{Config, ConfigSchema};
use beanhop_core::{Error, ErrorCode, ResultExt};
use beanhop_search::{load_menu_items, load_shops, MenuItem, Shop};
use serde::Serialize;
use std::path::Path;

/// Loaded configuration plus global flags
pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl AppContext {
    pub fn new(config: Config, format: OutputFormat, verbose: bool) -> Self {
        Self {
            config,
            format,
            verbose,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn schema(&self) -> &ConfigSchema {
        &self.config.schema
    }

    /// Start a session over `schema`, offline or remote first
    pub fn session(schema: &ConfigSchema, offline: bool) -> Result<SearchSession> {
        let mode = if offline {
            SearchMode::Offline
        } else {
            SearchMode::RemoteFirst
        };
        let session = SearchSession::init(schema, mode).map_err(Error::from)?;
        Ok(session)
    }

    /// Pretty-print `value` as JSON on stdout
    pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Dump the metrics registry to stderr
    pub fn print_metrics(&self) {
        let metrics = beanhop_telemetry::metrics().export_json();
        match serde_json::to_string_pretty(&metrics) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => tracing::warn!(error = %e, "Failed to render metrics"),
        }
    }
}

/// Read shops from a JSON file
pub fn read_shops(path: &Path) -> Result<Vec<Shop>> {
    let content = read_file(path)?;
    let shops = load_shops(&content)
        .map_err(|e| Error::new(ErrorCode::InvalidFormat, e.to_string()))
        .context(format!("Reading shops from {}", path.display()))?;
    Ok(shops)
}

/// Read menu items from a JSON file
pub fn read_menu(path: &Path) -> Result<Vec<MenuItem>> {
    let content = read_file(path)?;
    let items = load_menu_items(&content)
        .map_err(|e| Error::new(ErrorCode::InvalidFormat, e.to_string()))
        .context(format!("Reading menu items from {}", path.display()))?;
    Ok(items)
}

fn read_file(path: &Path) -> beanhop_core::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(path),
            _ => Error::from(e),
        })
        .context(format!("Reading {}", path.display()))
}
