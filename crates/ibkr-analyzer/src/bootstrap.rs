use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard project directory hierarchy exists under `base`.
///
/// Creates the following directories if absent (including any missing parents):
/// - `config/` – profile configuration files
/// - `logs/` – date-stamped run logs
/// - `data/` – report exports dropped in by the user
pub fn ensure_directories(base: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(base.join("config"))?;
    std::fs::create_dir_all(base.join("logs"))?;
    std::fs::create_dir_all(base.join("data"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber with two sinks: stdout and an
/// appending date-stamped file `log_YYYYMMDD.log` under `logs_dir`.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
pub fn setup_logging(log_level: &str, logs_dir: &Path) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(normalise_level(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_name = format!("log_{}.log", chrono::Local::now().format("%Y%m%d"));
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(logs_dir.join(file_name))?;

    let stdout_layer = fmt::layer().with_target(false).with_thread_ids(false);
    let file_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(())
}

/// Map config log-level names to tracing level names (tracing uses
/// lowercase).
fn normalise_level(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
