use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/moviegrid/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("moviegrid").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, url: Option<String>, timeout_seconds: Option<u64>) -> Self {
        if let Some(url) = url {
            self.source.url = url;
        }
        if let Some(seconds) = timeout_seconds {
            self.source.request_timeout_seconds = seconds;
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The catalog URL is an http(s) URL
    /// - The request timeout is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.source.url.trim();
        if url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "source.url must not be empty".to_string(),
            });
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("source.url '{}' must start with http:// or https://", url),
            });
        }

        if self.source.request_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "source.request_timeout_seconds must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
