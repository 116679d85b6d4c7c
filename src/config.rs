//! Configuration file for the garden timekeeper
//!
//! Every field has a default, so a missing file or an empty one is valid.
//! Command-line flags override what is loaded here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "garden-tasks.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TOML file holding the task collection
    pub data_file: PathBuf,

    /// Load unreadable frequency codes as every 7 days instead of failing
    ///
    /// Only meant for data written by older versions.
    pub legacy_frequency_fallback: bool,

    /// Look-ahead window, in days, of the upcoming task list
    pub upcoming_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            legacy_frequency_fallback: false,
            upcoming_days: 7,
        }
    }
}

impl Config {
    /// Read a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Read `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
