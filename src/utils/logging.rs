//! Logging configuration and setup
//!
//! Host applications call [`init_logging`] once at startup; the library
//! itself only emits `tracing` events.

use std::path::Path;

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use unic_langid::LanguageIdentifier;

use crate::config::LoggingConfig;
use crate::utils::errors::{LangTableError, Result};

/// Initialize logging based on configuration
///
/// When `file_path` is set, events are also written to a daily rolling file
/// in that directory. The returned guard must be kept alive for the file
/// writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| LangTableError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(Path::new(dir), "langtable.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| LangTableError::Config(format!("Logging already initialized: {}", e)))?;

    info!(
        "{} v{} logging initialized with level: {}",
        crate::NAME,
        crate::VERSION,
        config.level
    );
    Ok(guard)
}

/// Log a completed language selection
pub fn log_language_selection(requested: &str, selected: &LanguageIdentifier, source: &str) {
    debug!(
        requested = requested,
        selected = %selected,
        source = source,
        "Language selected"
    );
}

/// Log a loaded translation table
pub fn log_table_loaded(language: &LanguageIdentifier, key_count: usize) {
    info!(
        language = %language,
        key_count = key_count,
        "Loaded translation table"
    );
}
