//! Application logging functionality
//!
//! Sets up the tracing subscriber and, with `--log-file`, routes output to
//! a dated file under ~/.config/braille-font/logs/

use crate::core::config_file::ConfigFile;
use std::fs;
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    logs_dir().join(format!("braille-font-{}.log", timestamp))
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir)?;
    Ok(())
}

/// Filter from `RUST_LOG`, falling back to `info` (or `debug` when verbose)
fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global tracing subscriber writing to stderr
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Install the global tracing subscriber writing to today's log file
///
/// The returned guard flushes buffered lines when dropped, so it has to be
/// held until the program exits.
pub fn init_with_log_file(verbose: bool) -> anyhow::Result<WorkerGuard> {
    initialize_logs_directory()?;

    let log_file_path = current_log_file();
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    let (writer, guard) = tracing_appender::non_blocking(log_file);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_ansi(false)
        .with_writer(writer)
        .try_init();

    tracing::info!(
        "=== braille-font started at {} ===",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    eprintln!("Logs written to: {:?}", log_file_path);

    Ok(guard)
}
