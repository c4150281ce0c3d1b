//! Tracing subscriber setup.
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::dirs;

const LOG_FILE: &str = "runtime-options.log";

/// Setup logging to stderr and, optionally, to a file.
///
/// `RUST_LOG` overrides the default `info` level. The returned guard flushes
/// the file writer on drop and must be held until exit.
pub fn setup_logging(log_to_file: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = if log_to_file {
        let log_dir = dirs::log_dir();
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if log_to_file {
        tracing::info!("Log file: {}", dirs::log_dir().join(LOG_FILE).display());
    }

    Ok(guard)
}
