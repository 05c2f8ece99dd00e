//! Process-wide `tracing` subscriber setup, adapted from the teacher
//! crate's non-blocking rolling-file + stdout layering.

use crate::config::LoggingOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. Returns nothing to keep alive (unlike
/// the teacher's file-appender guard) since this service logs to stdout
/// only; a file appender can be layered in the same way if operators need
/// it.
pub fn init_logging(options: &LoggingOptions) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(options.level.clone()));

    let registry = tracing_subscriber::registry().with(filter);

    if options.json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(false)).init();
    }
}
