//! Tracing setup for the practice simulator.
//!
//! Events go to stderr so stdout stays machine-readable. With
//! `Config::file_logs` set, a daily rolling `practice.log` is written as well.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

const LOG_FILE_NAME: &str = "practice.log";

/// Keeps the file writer flushing until dropped
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

pub fn init_tracing(config: &Config) -> Option<FileLogGuard> {
    let env_filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let file = config.file_logs.then(|| open_log_file(&config.log_dir));
    let (writer, guard, file_error) = match file {
        Some(Ok((writer, guard))) => (Some(writer), Some(FileLogGuard { _guard: guard }), None),
        Some(Err(err)) => (None, None, Some(err)),
        None => (None, None, None),
    };
    let file_layer = writer.map(|writer| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(file_layer)
        .init();

    if let Some(err) = file_error {
        tracing::warn!(
            log_dir = %config.log_dir.display(),
            error = %err,
            "file logging disabled"
        );
    }

    guard
}

fn open_log_file(log_dir: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}
