//! Tracing subscriber installation for binaries
//!
//! The library only emits events; installing a subscriber is the job of the
//! executable embedding it.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a global subscriber writing to `log_file`, or to stderr when None
///
/// The returned guard flushes buffered file output when dropped and must be
/// kept alive for as long as logging is needed.
pub fn init(log_file: Option<&Path>, json: bool) -> std::io::Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr);
        if json {
            builder.json().init();
        } else {
            builder.init();
        }
        return Ok(None);
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(writer);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(Some(guard))
}
