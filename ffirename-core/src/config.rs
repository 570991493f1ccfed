use crate::error::{RenameError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output format: "summary" or "json"
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,

    /// Folder suggested when none is given on the command line
    /// (None = home directory)
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            use_color: None,
            start_dir: None,
        }
    }
}

fn default_output_format() -> String {
    "summary".to_string()
}

impl Config {
    /// Load config from `path`, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RenameError::io(path, e))?;
        toml::from_str(&content).map_err(|e| RenameError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| RenameError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, content).map_err(|e| RenameError::io(path, e))
    }
}
