//! Configuration for the curator.
//!
//! Defaults reproduce the fixed file locations and screen layout. An optional
//! `largo-curator.toml` in the working directory can override any field.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "largo-curator.toml";

/// Errors raised while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

/// Input and output file locations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Largo catalog (JSON array)
    pub largos: PathBuf,
    /// Slime catalog (JSON array)
    pub slimes: PathBuf,
    /// Exported culture list
    pub culture: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            largos: PathBuf::from("largos.json"),
            slimes: PathBuf::from("../slimes.json"),
            culture: PathBuf::from("culture.txt"),
        }
    }
}

/// Log output. The terminal belongs to the raw-mode screen, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file, appended to
    pub file: PathBuf,
    /// Level for this crate: trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("largo-curator.log"),
            level: "info".to_string(),
        }
    }
}

/// Screen layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the largo name column
    pub name_width: usize,
    /// Width of each slime type column
    pub slime_width: usize,
    /// Width of the food column
    pub food_width: usize,
    /// Number of columns in the slime grid
    pub grid_columns: usize,
    /// Hue step between consecutive largo groups
    pub group_step: usize,
    /// Case-insensitive regex for largo names drawn in the muted color
    pub muted_pattern: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            name_width: 40,
            slime_width: 10,
            food_width: 30,
            grid_columns: 4,
            group_step: 20,
            muted_pattern: "pink".to_string(),
        }
    }
}

impl Config {
    /// Load `largo-curator.toml` from the working directory, or defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from a specific path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
