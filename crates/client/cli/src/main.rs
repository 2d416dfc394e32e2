//! Terminal client entry point.
mod app;
mod config;
mod input;
mod logging;
mod terminal;
mod ui;

use anyhow::Result;
use app::App;
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // Logging goes to a file only; the TUI owns the terminal
    logging::setup_logging()?;

    tracing::info!("Starting minefield client");
    tracing::info!(
        "Board: {}x{}, hazards: {}, lives: {}, seed: {}",
        config.game.size,
        config.game.size,
        config.game.hazard_count,
        config.game.starting_lives,
        config.game.seed
    );

    App::new(&config)?.run()
}
