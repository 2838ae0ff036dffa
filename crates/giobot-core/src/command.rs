use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row-major cell index: `row * width + col`.
pub type CellIndex = usize;

/// A one-step nudge on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Index delta for a grid whose rows are `row_width` cells wide.
    ///
    /// Horizontal nudges do not know about row boundaries: `Left` from column 0
    /// lands on the last column of the previous row.
    pub fn offset(self, row_width: usize) -> isize {
        let row = row_width as isize;
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up => -row,
            Direction::Down => row,
        }
    }
}

/// A completed move, ready to be handed to the game service.
///
/// Legality (ownership, unit counts) is decided by the receiving game layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveCommand {
    pub from: CellIndex,
    pub to: CellIndex,
    /// Move only part of the source cell's units.
    pub split: bool,
}

impl MoveCommand {
    pub fn new(from: CellIndex, to: CellIndex, split: bool) -> Self {
        Self { from, to, split }
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if self.split {
            f.write_str(" (50%)")?;
        }
        Ok(())
    }
}
