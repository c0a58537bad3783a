//! modelgen-core - Class descriptions, configuration and errors
//!
//! This crate provides the foundational types shared by the modelgen tools:
//! - [`ClassRegistry`], [`ClassDescriptor`] and [`PropertyDescriptor`] describing discovered classes
//! - [`ModelGenError`] for error handling
//! - [`GeneratorConfig`] for generator configuration
//! - [`LogLevel`] for log filtering

mod config;
mod error;
mod model;

pub use config::GeneratorConfig;
pub use error::{ModelGenError, ModelGenResult};
pub use model::{ClassDescriptor, ClassRegistry, PropertyDescriptor};

use std::str::FromStr;

/// Log levels understood by the command-line host and the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl FromStr for LogLevel {
    type Err = ModelGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(ModelGenError::Config(format!("unknown log level: {other}"))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassDescriptor, ClassRegistry, GeneratorConfig, LogLevel, ModelGenError, ModelGenResult,
        PropertyDescriptor,
    };
}
