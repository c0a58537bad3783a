//! Subscriber construction

use crate::reload::{ReloadHandle, level_filter};
use modelgen_core::LogLevel;
use once_cell::sync::OnceCell;
use tracing_subscriber::reload;

/// Initialize the logging system
///
/// Installs a subscriber that writes formatted events to stderr, filtered by a
/// reloadable level. Only the first call in a process does anything; it returns
/// `true` if the subscriber was installed, and later calls return `false`
/// once the first has completed.
pub fn init_logging(level: LogLevel) -> bool {
    static INIT: OnceCell<()> = OnceCell::new();

    let mut installed = false;
    INIT.get_or_init(|| installed = install(level));
    installed
}

fn install(level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;

    let (filter, handle) = reload::Layer::new(level_filter(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    // Fails if the host already installed its own subscriber
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    ReloadHandle::global().attach(handle);
    true
}
