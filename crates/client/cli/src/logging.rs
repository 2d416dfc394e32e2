//! File-only tracing setup for the TUI client.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Setup logging to a file under `MINEFIELD_LOG_DIR` (default `logs/`).
///
/// Stderr stays untouched so the TUI can own the terminal.
pub fn setup_logging() -> Result<()> {
    let log_dir = std::env::var_os("MINEFIELD_LOG_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "minefield.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep the file writer alive for the process lifetime
    std::mem::forget(guard);

    tracing::info!("Logging initialized: {}/minefield.log", log_dir.display());

    Ok(())
}
