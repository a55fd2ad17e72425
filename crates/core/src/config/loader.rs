//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration files searched, in order, when no path is given
const CONFIG_CANDIDATES: &[&str] = &[".playprep.toml", "playprep.toml", ".config/playprep.toml"];

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed and validated schema
    pub schema: ConfigSchema,
    /// File the schema came from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and built-in defaults are used when none is found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            tracing::debug!(path = %p.display(), "Loading configuration");
            load_config_file(p)?
        } else {
            tracing::debug!("No configuration file found, using defaults");
            ConfigSchema::default()
        };

        schema
            .validate()
            .context(config_path.as_ref().map_or_else(
                || "Built-in defaults".to_string(),
                |p| format!("While validating {}", p.display()),
            ))?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .chain(dirs::config_dir().map(|d| d.join("playprep").join("config.toml")))
        .find(|p| p.is_file())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io_at(path, e))
        .context("Failed to read config file")?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path.display()))
}
