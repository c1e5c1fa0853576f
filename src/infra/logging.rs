use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const APP_DIR_NAME: &str = "parley";
const LOG_FILE_NAME: &str = "parley.log";

/// Installs a file-backed subscriber. The terminal belongs to the TUI, so
/// nothing is written to stdout/stderr.
///
/// Keep the returned guard alive until shutdown or buffered lines are lost.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let log_file = resolve_log_file(config)?;
    let (dir, file_name) = split_log_path(&log_file);

    fs::create_dir_all(&dir).map_err(|source| AppError::LogDirCreate {
        path: dir.clone(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

pub fn resolve_log_file(config: &LogConfig) -> Result<PathBuf, AppError> {
    if let Some(file) = &config.file {
        return Ok(file.clone());
    }

    dirs::cache_dir()
        .map(|cache| cache.join(APP_DIR_NAME).join(LOG_FILE_NAME))
        .ok_or(AppError::LogPathResolution)
}

fn split_log_path(path: &Path) -> (PathBuf, PathBuf) {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME));

    (dir, file_name)
}
