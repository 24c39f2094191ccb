use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use self::limits::LimitsConfig;
use self::output::OutputConfig;
use self::wordnik::WordnikConfig;

pub mod limits;
pub mod output;
pub mod wordnik;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing config value: {0}")]
    Missing(&'static str),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub wordnik: WordnikConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Read, apply environment overrides and validate
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());

        let data = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let mut config: Config = serde_json::from_str(&data)?;
        config.wordnik.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate without consulting the environment
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require("wordnik.api_key", &self.wordnik.api_key)?;
        require("wordnik.api_url", &self.wordnik.api_url)?;
        require("wordnik.audio_url", &self.wordnik.audio_url)?;
        require_path("output.cards_file", &self.output.cards_file)?;
        require_path("output.audio_dir", &self.output.audio_dir)?;

        require_http("wordnik.api_url", &self.wordnik.api_url)?;
        require_http("wordnik.audio_url", &self.wordnik.audio_url)?;

        if self.limits.max_definitions == 0 {
            return Err(ConfigError::Invalid {
                field: "limits.max_definitions",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Missing(field));
    }
    Ok(())
}

fn require_path(field: &'static str, value: &Path) -> Result<(), ConfigError> {
    if value.as_os_str().is_empty() {
        return Err(ConfigError::Missing(field));
    }
    Ok(())
}

fn require_http(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid { field, reason };

    let url = Url::parse(value).map_err(|e| invalid(format!("'{value}' is not a URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("expected an http(s) URL, got '{value}'")));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid(format!("'{value}' has no host")));
    }

    Ok(())
}
