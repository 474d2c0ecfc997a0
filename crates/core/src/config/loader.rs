//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit `path` must exist. Without one, the standard locations are
    /// searched and defaults are used when none is found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        schema_is_valid(&schema)?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let schema: ConfigSchema = toml::from_str(content)?;
        schema_is_valid(&schema)?;
        Ok(Self { schema, path: None })
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(&self.schema)
            .map_err(|e| Error::config(format!("Failed to render configuration: {e}")))
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let local = ["beanhop.toml", ".beanhop.toml", ".config/beanhop.toml"]
        .into_iter()
        .map(PathBuf::from);

    let user = dirs::config_dir().map(|dir| dir.join("beanhop").join("beanhop.toml"));

    local.chain(user).find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path.display()))
}

fn schema_is_valid(schema: &ConfigSchema) -> Result<()> {
    if schema.search.max_shops == 0 {
        return Err(Error::invalid_config_value("search.max_shops", "must be at least 1"));
    }
    if schema.api.timeout_secs == 0 {
        return Err(Error::invalid_config_value("api.timeout_secs", "must be at least 1"));
    }
    if !schema.api.base_url.starts_with("http://") && !schema.api.base_url.starts_with("https://")
    {
        return Err(Error::invalid_config_value(
            "api.base_url",
            "must start with http:// or https://",
        ));
    }
    Ok(())
}
