//! Logging setup.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Setup logging with the given level.
///
/// `RUST_LOG` overrides `level` when set. With `file`, events are also
/// written (without ANSI colors) to that file through a background writer;
/// keep the returned guard alive until shutdown so buffered lines are flushed.
pub fn setup_logging(
    level: &str,
    json: bool,
    file: Option<&Path>,
) -> Result<Option<WorkerGuard>, TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = if json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().pretty().boxed()
    };

    let (file_layer, guard) = match file {
        Some(path) => {
            let (dir, name) = split_log_path(path);
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("orchestrator.log"));
    (dir, name)
}
