//! Game configuration and its validation.

use crate::state::Position;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Side length of the square board.
    pub size: u32,
    /// Number of hazards to place outside the start column.
    pub hazard_count: u32,
    /// Lives the player begins with.
    pub starting_lives: u32,
    /// Seed for deterministic hazard placement.
    pub seed: u64,
}

impl GameConfig {
    pub const DEFAULT_SIZE: u32 = 8;
    pub const DEFAULT_HAZARD_COUNT: u32 = 10;
    pub const DEFAULT_STARTING_LIVES: u32 = 3;

    /// Minimum board side: the player needs a start column and a goal column.
    pub const MIN_SIZE: u32 = 2;

    pub fn new() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            hazard_count: Self::DEFAULT_HAZARD_COUNT,
            starting_lives: Self::DEFAULT_STARTING_LIVES,
            seed: 0,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_hazard_count(mut self, hazard_count: u32) -> Self {
        self.hazard_count = hazard_count;
        self
    }

    pub fn with_starting_lives(mut self, starting_lives: u32) -> Self {
        self.starting_lives = starting_lives;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cells outside the start column that can hold hazards.
    pub fn hazard_capacity(&self) -> u64 {
        u64::from(self.size) * u64::from(self.size.saturating_sub(1))
    }

    /// Check the configuration before any board is built.
    ///
    /// The hazard bound is strict: `hazard_count` must be less than the
    /// non-start capacity, which guarantees the rejection-sampling
    /// placement loop terminates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < Self::MIN_SIZE {
            return Err(ConfigError::BoardTooSmall { size: self.size });
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if u64::from(self.hazard_count) >= self.hazard_capacity() {
            return Err(ConfigError::TooManyHazards {
                hazard_count: self.hazard_count,
                capacity: self.hazard_capacity(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction-time misconfiguration. Fatal: no partial game state is
/// ever produced from an invalid config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("board size {size} is below the minimum of 2")]
    BoardTooSmall { size: u32 },

    #[error("starting lives must be at least 1")]
    NoLives,

    #[error("{hazard_count} hazards cannot fit the {capacity} cells outside the start column")]
    TooManyHazards { hazard_count: u32, capacity: u64 },

    #[error("hazard position {position} is outside the board or in the start column")]
    InvalidHazardPosition { position: Position },

    #[error("duplicate hazard position {position}")]
    DuplicateHazard { position: Position },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::new().validate(), Ok(()));
    }

    #[test]
    fn hazard_count_at_capacity_is_rejected() {
        // 8x8 board: 56 non-start cells, so 56 hazards must fail.
        let config = GameConfig::new().with_hazard_count(56);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyHazards {
                hazard_count: 56,
                capacity: 56,
            })
        );
        assert_eq!(
            GameConfig::new().with_hazard_count(55).validate(),
            Ok(())
        );
    }

    #[test]
    fn degenerate_boards_and_lives_are_rejected() {
        assert_eq!(
            GameConfig::new().with_size(1).validate(),
            Err(ConfigError::BoardTooSmall { size: 1 })
        );
        assert_eq!(
            GameConfig::new().with_starting_lives(0).validate(),
            Err(ConfigError::NoLives)
        );
    }
}
