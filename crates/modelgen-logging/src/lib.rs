//! modelgen-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber once per process
//! - [`ReloadHandle`] to change the level after configuration is loaded

mod layer;
mod reload;

pub use layer::init_logging;
pub use modelgen_core::LogLevel;
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
