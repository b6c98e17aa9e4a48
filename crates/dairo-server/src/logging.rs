//! Tracing subscriber setup.

use std::path::Path;

use anyhow::{Context, Result};
use dairo_core::config::LoggingSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "dairo.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level`. When file logging is
/// enabled the returned guard must be held until shutdown so buffered lines
/// get flushed.
pub fn init_logging(settings: &LoggingSettings, log_dir: &Path) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .with_context(|| format!("Invalid log level '{}'", settings.level))?;

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = if settings.file {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
        let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if settings.file {
        tracing::info!("Logging to {}", log_dir.join(LOG_FILE_PREFIX).display());
    }

    Ok(guard)
}
