use std::{fs::OpenOptions, path::Path, sync::Mutex};

use tracing::Level;

pub const DEFAULT_LOG_FILE: &str = "thong.log";

/// Installs the global `tracing` subscriber writing to `path`.
///
/// The terminal is owned by the UI while the app runs, so events go to a
/// file instead of stdout. The file is appended to across runs.
pub fn init_file_logger(path: &Path, level: Level) -> crate::Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| crate::Error::LogFileOpenFailed(path.to_path_buf(), e))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .map_err(|_| crate::Error::LoggerAlreadySet)
}

/// Logger for commands that keep the terminal, like the mock backend.
pub fn init_stdout_logger(level: Level) -> crate::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .map_err(|_| crate::Error::LoggerAlreadySet)
}
