//! Error types for model class generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for modelgen operations
pub type ModelGenResult<T> = Result<T, ModelGenError>;

/// Error type for modelgen operations
#[derive(Error, Debug)]
pub enum ModelGenError {
    /// The selected class is not present in the registry
    #[error("class not found: {0}")]
    ClassNotFound(String),

    /// Writing generated code failed
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The host supplied an unusable folder or class selection
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Scanning the source tree failed
    #[error("discovery error: {0}")]
    Discovery(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A registry document could not be loaded
    #[error("registry error: {0}")]
    Registry(String),

    /// The log subscriber could not be adjusted
    #[error("logging error: {0}")]
    Logging(String),
}

impl ModelGenError {
    /// Returns a stable error code, used as the process exit status
    pub fn error_code(&self) -> u8 {
        match self {
            ModelGenError::ClassNotFound(_) => 2,
            ModelGenError::Io { .. } => 3,
            ModelGenError::InvalidSelection(_) => 4,
            ModelGenError::Discovery(_) => 5,
            ModelGenError::Config(_) => 6,
            ModelGenError::Registry(_) => 7,
            ModelGenError::Logging(_) => 8,
        }
    }

    /// Wrap an I/O error together with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ModelGenError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for ModelGenError {
    fn from(err: serde_json::Error) -> Self {
        ModelGenError::Registry(err.to_string())
    }
}

impl From<toml::de::Error> for ModelGenError {
    fn from(err: toml::de::Error) -> Self {
        ModelGenError::Config(err.to_string())
    }
}
