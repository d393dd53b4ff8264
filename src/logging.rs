//! File logging for Topic Explorer
//!
//! Both interactive front ends own the terminal or a window, so log output
//! goes to a file. Call sites use the `log` macros with a short target tag
//! (`SEARCH`, `CLIENT`, `TUI`, `GUI`, `MAIN`).

use crate::config::AppConfig;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Default log file name
pub const LOG_FILE_NAME: &str = "topic-explorer.log";

/// Get the default log file path (same directory as executable)
pub fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_NAME)
}

/// Initialize the global logger from `config`, truncating the file each run.
///
/// Returns the path in use, or `None` when the file could not be opened or a
/// logger was already installed. Logging never stops the program.
pub fn init(config: &AppConfig) -> Option<PathBuf> {
    let log_path = config
        .log_file
        .as_deref()
        .map(Path::to_path_buf)
        .unwrap_or_else(default_log_path);

    let file = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "[topic-explorer] Logging disabled, cannot open {}: {}",
                log_path.display(),
                e
            );
            return None;
        }
    };

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let format = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, format, file).ok()?;
    Some(log_path)
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    log::info!(target: "---", "========== {} ==========", label);
}
