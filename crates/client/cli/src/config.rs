//! Client configuration sourced from environment variables.
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use minefield_core::GameConfig;

/// Terminal client configuration.
///
/// Environment variables (unset or unparsable values fall back to the
/// core defaults):
/// - `MINEFIELD_SIZE` - board side length (default: 8)
/// - `MINEFIELD_HAZARDS` - hazard count (default: 10)
/// - `MINEFIELD_LIVES` - starting lives (default: 3)
/// - `MINEFIELD_SEED` - board seed (default: derived from system time)
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub game: GameConfig,
}

impl CliConfig {
    pub fn from_env() -> Self {
        let mut game = GameConfig::new().with_seed(seed_from_time());

        if let Some(size) = read_env::<u32>("MINEFIELD_SIZE") {
            game.size = size;
        }
        if let Some(hazards) = read_env::<u32>("MINEFIELD_HAZARDS") {
            game.hazard_count = hazards;
        }
        if let Some(lives) = read_env::<u32>("MINEFIELD_LIVES") {
            game.starting_lives = lives;
        }
        if let Some(seed) = read_env::<u64>("MINEFIELD_SEED") {
            game.seed = seed;
        }

        Self { game }
    }
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
