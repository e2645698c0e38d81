use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Initializes console logging plus, when enabled, a daily rolling JSON file.
///
/// The returned guard flushes the file writer on drop; hold it for the life
/// of the process. Calling this twice is harmless: the second subscriber is
/// simply not installed.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wizardwebb=info,tower_http=info"));

    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = if config.file_logs && fs::create_dir_all(&config.directory).is_ok() {
        let file_appender = tracing_appender::rolling::daily(&config.directory, "wizardwebb.log");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        (Some(fmt::layer().json().with_writer(writer)), Some(guard))
    } else {
        (None, None)
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    guard
}
