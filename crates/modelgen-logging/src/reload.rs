//! Runtime control of the level filter installed by [`init_logging`](crate::init_logging)

use modelgen_core::{LogLevel, ModelGenError, ModelGenResult};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

type FilterHandle = reload::Handle<LevelFilter, Registry>;

static GLOBAL: Lazy<ReloadHandle> = Lazy::new(ReloadHandle::new);

/// Access to the level filter of an installed subscriber.
///
/// The CLI starts logging before the configuration file is read, then uses
/// [`ReloadHandle::global`] to apply the configured level.
#[derive(Default)]
pub struct ReloadHandle {
    filter: Mutex<Option<FilterHandle>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handle attached by [`init_logging`](crate::init_logging)
    pub fn global() -> &'static ReloadHandle {
        &GLOBAL
    }

    pub(crate) fn attach(&self, filter: FilterHandle) {
        *self.filter.lock() = Some(filter);
    }

    /// Whether a subscriber's filter is attached
    pub fn is_initialized(&self) -> bool {
        self.filter.lock().is_some()
    }

    /// The filter currently in effect, or `None` when nothing is attached or
    /// the subscriber is gone.
    pub fn current_filter(&self) -> Option<LevelFilter> {
        self.filter.lock().as_ref()?.clone_current()
    }

    /// Replace the active level.
    ///
    /// Fails with [`ModelGenError::Logging`] when no subscriber is attached or
    /// the subscriber has been dropped.
    pub fn reload_level(&self, level: LogLevel) -> ModelGenResult<()> {
        let guard = self.filter.lock();
        let filter = guard
            .as_ref()
            .ok_or_else(|| ModelGenError::Logging("no subscriber installed".to_string()))?;

        filter
            .reload(level_filter(level))
            .map_err(|err| ModelGenError::Logging(format!("cannot switch to {level}: {err}")))
    }
}

pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
