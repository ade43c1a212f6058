//! Configuration file handling.
//!
//! The configuration lives at `$XDG_CONFIG_HOME/zcalc/config.toml` unless a
//! path is given on the command line. Every key is optional.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User configuration for the terminal front-end.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colorize results.
    pub color: bool,
    /// Prompt shown before each input line.
    pub prompt: String,
    /// Copy every result to the clipboard as soon as it is computed.
    pub copy_on_equals: bool,
    /// Log filter directive, e.g. `"debug"` or `"zcalc=trace"`.
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            prompt: "> ".to_string(),
            copy_on_equals: false,
            log_level: None,
        }
    }
}

/// Get the default config file path.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. The default path may be missing, in which
    /// case the defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}
