//! Board storage and hazard placement.

use crate::config::ConfigError;
use crate::rng::{RngOracle, compute_seed};
use crate::state::Position;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Hazard,
}

impl Cell {
    pub fn is_hazard(self) -> bool {
        matches!(self, Cell::Hazard)
    }
}

/// Square grid of cells. Column 0 is the start column and never holds a
/// hazard; the rightmost column is the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: u32,
    cells: Vec<Cell>,
}

impl Board {
    /// All-empty board of `size x size`.
    pub(crate) fn empty(size: u32) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; (size as usize) * (size as usize)],
        }
    }

    /// Build a board with `hazard_count` hazards placed by rejection
    /// sampling: draw a random cell, accept iff it is empty and not in
    /// the start column, repeat until the count is reached.
    ///
    /// Callers must have validated `hazard_count` against the non-start
    /// capacity; with that bound the loop always terminates.
    pub(crate) fn with_random_hazards(
        size: u32,
        hazard_count: u32,
        seed: u64,
        rng: &impl RngOracle,
    ) -> Self {
        let mut board = Self::empty(size);
        let mut placed = 0;
        let mut nonce = 0u64;
        while placed < hazard_count {
            let row = rng.range(compute_seed(seed, nonce, 0), 0, size - 1) as i32;
            let col = rng.range(compute_seed(seed, nonce, 1), 0, size - 1) as i32;
            nonce += 1;

            let position = Position::new(row, col);
            if position.col != 0 && board.cell(position) == Some(Cell::Empty) {
                board.set(position, Cell::Hazard);
                placed += 1;
            }
        }
        board
    }

    /// Build a board with hazards at exactly the given positions.
    ///
    /// Rejects positions that are out of bounds, in the start column,
    /// or repeated.
    pub(crate) fn with_hazards(size: u32, hazards: &[Position]) -> Result<Self, ConfigError> {
        let mut board = Self::empty(size);
        for &position in hazards {
            if !board.contains(position) || position.col == 0 {
                return Err(ConfigError::InvalidHazardPosition { position });
            }
            if board.cell(position) == Some(Cell::Hazard) {
                return Err(ConfigError::DuplicateHazard { position });
            }
            board.set(position, Cell::Hazard);
        }
        Ok(board)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < self.size as i32
            && position.col < self.size as i32
    }

    /// Cell at `position`, or `None` when out of bounds.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if !self.contains(position) {
            return None;
        }
        Some(self.cells[self.index(position)])
    }

    pub fn hazard_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hazard()).count()
    }

    /// Owned copy of the layout for rendering and inspection. Mutating
    /// the snapshot never touches the live board.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            size: self.size,
            cells: self.cells.clone(),
        }
    }

    fn set(&mut self, position: Position, cell: Cell) {
        let index = self.index(position);
        self.cells[index] = cell;
    }

    fn index(&self, position: Position) -> usize {
        position.row as usize * self.size as usize + position.col as usize
    }
}

/// Immutable copy of a board layout, detached from the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    size: u32,
    cells: Vec<Cell>,
}

impl BoardSnapshot {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        if position.row < 0
            || position.col < 0
            || position.row >= self.size as i32
            || position.col >= self.size as i32
        {
            return None;
        }
        Some(self.cells[position.row as usize * self.size as usize + position.col as usize])
    }

    /// Iterate rows top to bottom, each row a slice of cells left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size as usize)
    }
}
