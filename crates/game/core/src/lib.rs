//! Deterministic minefield game logic.
//!
//! `minefield-core` defines the canonical rules: a square board with
//! randomly placed hazards, a player walking from the left edge to the
//! right edge, and the single state transition that consumes a move.
//! All state mutation flows through [`GameState::attempt_move`]; the
//! crate performs no I/O and clients depend only on the types
//! re-exported here.
pub mod board;
pub mod config;
pub mod rng;
pub mod state;

pub use board::{Board, BoardSnapshot, Cell};
pub use config::{ConfigError, GameConfig};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{Direction, GamePhase, GameState, MoveOutcome, Position};
