//! Server configuration.
//!
//! Settings come from a TOML file (`courriel.toml` in the working directory,
//! or the path in `COURRIEL_CONFIG`). Every field has a default, so a missing
//! file simply means "run with defaults". `COURRIEL_HOST` and `COURRIEL_PORT`
//! override the file, which is how the binary is pointed at another address
//! without editing anything.
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 8080
//! catalog_path = "data/complete_email_templates.json"
//! database_path = "courriel.sqlite"
//! open_browser = true
//! json_limit = 1048576
//! ```

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "courriel.toml";
pub const CONFIG_PATH_VAR: &str = "COURRIEL_CONFIG";
pub const HOST_VAR: &str = "COURRIEL_HOST";
pub const PORT_VAR: &str = "COURRIEL_PORT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidOverride { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interface the HTTP server binds to.
    pub host: String,
    pub port: u16,
    /// Template catalog JSON, loaded once at start-up.
    pub catalog_path: PathBuf,
    /// SQLite file holding the preferences table.
    pub database_path: PathBuf,
    /// Open the default browser on the app once the server is up.
    pub open_browser: bool,
    /// Maximum accepted JSON payload, in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            catalog_path: PathBuf::from("data/complete_email_templates.json"),
            database_path: PathBuf::from("courriel.sqlite"),
            open_browser: true,
            json_limit: 1024 * 1024,
        }
    }
}

impl Config {
    /// Loads the configuration the way the binary does: file from
    /// `COURRIEL_CONFIG` (or `courriel.toml`), then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut config = Self::from_file_or_default(&path)?;
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Applies `COURRIEL_HOST` / `COURRIEL_PORT` as returned by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            self.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidOverride {
                    var: PORT_VAR,
                    value: port.clone(),
                })?;
        }
        Ok(())
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
