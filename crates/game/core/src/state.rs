//! Game state and the move transition.

use std::fmt;

use crate::board::{Board, BoardSnapshot, Cell};
use crate::config::{ConfigError, GameConfig};
use crate::rng::PcgRng;

/// Discrete grid position expressed in (row, column) coordinates.
///
/// Components are signed so a candidate one step outside the board is
/// representable before bounds rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    fn offset(self, delta: (i32, i32)) -> Self {
        Self::new(self.row + delta.0, self.col + delta.1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four legal movement directions. Row 0 is the top of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset as (row delta, column delta).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Lifecycle of a game. `Won` and `Lost` are terminal: once reached,
/// [`GameState::attempt_move`] refuses further moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Outcome of a single [`GameState::attempt_move`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// In-bounds step onto an empty cell; the game continues.
    Continue,
    /// Candidate cell is outside the board. Not a move: nothing changed.
    OutOfBounds,
    /// Stepped onto a hazard and survived.
    HitHazard { lives_remaining: u32 },
    /// Reached the rightmost column with lives to spare.
    Won,
    /// Lives reached zero.
    Lost,
}

impl MoveOutcome {
    /// True when the caller's run loop must stop.
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::Won | MoveOutcome::Lost)
    }
}

/// Full state of one game: board layout, player position, lives, and
/// the move counter. Created once per game and mutated only through
/// [`attempt_move`](Self::attempt_move).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    board: Board,
    player: Position,
    lives: u32,
    moves: u32,
    phase: GamePhase,
}

impl GameState {
    /// Create a game with a freshly generated board.
    ///
    /// Hazards are placed pseudo-randomly from `config.seed`, excluding
    /// the start column; the player starts at the vertical center of
    /// column 0.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board =
            Board::with_random_hazards(config.size, config.hazard_count, config.seed, &PcgRng);
        Ok(Self::with_board(config, board))
    }

    /// Create a game with hazards at exactly the given positions.
    ///
    /// For tests and scripted boards; placement rules (in bounds, not
    /// in the start column, distinct) still apply.
    pub fn with_hazards(config: &GameConfig, hazards: &[Position]) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::with_hazards(config.size, hazards)?;
        Ok(Self::with_board(config, board))
    }

    fn with_board(config: &GameConfig, board: Board) -> Self {
        Self {
            player: Position::new(config.size as i32 / 2, 0),
            board,
            lives: config.starting_lives,
            moves: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Attempt one step in `direction`.
    ///
    /// Out-of-bounds candidates are rejected without consuming a move.
    /// Any in-bounds step increments the move counter, hazard or not.
    /// The player's position always advances onto the candidate cell,
    /// including on a hazard hit that spends the last life; the `Lost`
    /// outcome is a signal for the caller to stop, not a rollback.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        match self.phase {
            GamePhase::Won => return MoveOutcome::Won,
            GamePhase::Lost => return MoveOutcome::Lost,
            GamePhase::Playing => {}
        }

        let candidate = self.player.offset(direction.delta());
        let Some(cell) = self.board.cell(candidate) else {
            return MoveOutcome::OutOfBounds;
        };

        self.moves += 1;
        let hit_hazard = cell.is_hazard();
        if hit_hazard {
            self.lives -= 1;
        }
        self.player = candidate;

        if self.lives == 0 {
            self.phase = GamePhase::Lost;
            return MoveOutcome::Lost;
        }
        if candidate.col == self.board.size() as i32 - 1 {
            self.phase = GamePhase::Won;
            return MoveOutcome::Won;
        }
        if hit_hazard {
            MoveOutcome::HitHazard {
                lives_remaining: self.lives,
            }
        } else {
            MoveOutcome::Continue
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn size(&self) -> u32 {
        self.board.size()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Defensive copy of the hazard layout for rendering.
    pub fn board(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Cell under `position`, mostly useful to clients revealing the
    /// board after the game ends.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.board.cell(position)
    }
}
