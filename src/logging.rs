use crate::constants::{DEFAULT_LOG_FILTER, LOG_FILE_NAME};
use crate::error::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging, plus JSON file logging when `log_dir` is set.
///
/// Console output goes to stderr so stdout only carries the run result.
/// The returned guard flushes the file writer when dropped, so keep it alive
/// for the life of the process.
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Respect RUST_LOG if set
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            // Creates the directory; fails instead of panicking when it can't
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_NAME)
                .build(dir)?;
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().json().with_writer(non_blocking_writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // try_init so a second call (e.g. from tests) is a no-op
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    Ok(guard)
}
