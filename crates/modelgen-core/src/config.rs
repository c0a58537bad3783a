//! Generator configuration

use crate::{LogLevel, ModelGenError, ModelGenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a generation run
///
/// Usually read from a `modelgen.toml` file next to the sources. Every field
/// has a default, so an empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Extension of the generated file, without the leading dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_file_extension() -> String {
    "cs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            file_extension: default_file_extension(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> ModelGenResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_slice(bytes)
            .map_err(|e| ModelGenError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> ModelGenResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> ModelGenResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ModelGenError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration values
    pub fn validate(&self) -> ModelGenResult<()> {
        let ext = self.file_extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(ModelGenError::Config(
                "file_extension cannot be empty".to_string(),
            ));
        }
        if ext.contains(['/', '\\']) {
            return Err(ModelGenError::Config(format!(
                "file_extension must not contain path separators: {ext}"
            )));
        }
        self.log_level()?;
        Ok(())
    }

    /// The configured extension with any leading dot removed
    pub fn extension(&self) -> &str {
        self.file_extension.trim_start_matches('.')
    }

    /// The configured log level
    pub fn log_level(&self) -> ModelGenResult<LogLevel> {
        self.log_level.parse()
    }
}
