//! Service configuration: defaults, `LORI_*` environment overrides, YAML file
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use lori_analysis::DEFAULT_POSITIVE_LABEL;

pub const ENV_ADDR: &str = "LORI_ADDR";
pub const ENV_LEXICON: &str = "LORI_LEXICON";
pub const ENV_POSITIVE_LABEL: &str = "LORI_POSITIVE_LABEL";
pub const ENV_LOG: &str = "LORI_LOG";
pub const ENV_TIMEOUT_SECS: &str = "LORI_TIMEOUT_SECS";
pub const ENV_MAX_BODY: &str = "LORI_MAX_BODY";
pub const ENV_CONFIG: &str = "LORI_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listen address
    pub addr: String,
    /// Lexicon YAML; `None` uses the builtin lexicon
    pub lexicon_path: Option<PathBuf>,
    /// Label that flags a text as hate speech
    pub positive_label: String,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
    /// 0 disables the timeout
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8000".to_string(),
            lexicon_path: None,
            positive_label: DEFAULT_POSITIVE_LABEL.to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ApiConfig {
    /// Load from `LORI_CONFIG` when set, then apply `LORI_*` overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match std::env::var(ENV_CONFIG) {
            Ok(path) if !path.trim().is_empty() => Self::from_yaml_file(path.trim())?,
            _ => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; blank values are ignored
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(addr) = get(ENV_ADDR) {
            self.addr = addr;
        }
        if let Some(path) = get(ENV_LEXICON) {
            self.lexicon_path = Some(PathBuf::from(path));
        }
        if let Some(label) = get(ENV_POSITIVE_LABEL) {
            self.positive_label = label;
        }
        if let Some(level) = get(ENV_LOG) {
            self.log_level = level;
        }
        if let Some(value) = get(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECS,
                value,
            })?;
        }
        if let Some(value) = get(ENV_MAX_BODY) {
            self.max_body_bytes = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_MAX_BODY,
                value,
            })?;
        }

        Ok(self)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
