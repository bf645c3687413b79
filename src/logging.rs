//! Tracing setup for the `sql-dataset` binary.

use std::path::Path;

use miette::{miette, Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};


/// Installs the global tracing subscriber.
///
/// Console output always goes to stderr. If `log_file_output_directory` is set,
/// the directory is created if needed and logs are additionally written to
/// `log_file_name` inside it.
///
/// The returned guard (if any) must be kept alive until the program exits,
/// otherwise buffered file output may be lost.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
    log_file_name: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_level_filter);

    let (file_layer, guard) = match log_file_output_directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)
                .into_diagnostic()
                .wrap_err_with(|| {
                    miette!(
                        "Failed to create missing log file directory at {}.",
                        directory.display()
                    )
                })?;

            let file_appender = tracing_appender::rolling::never(directory, log_file_name);
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_writer)
                .with_filter(log_file_level_filter);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install global tracing subscriber.")?;

    Ok(guard)
}
