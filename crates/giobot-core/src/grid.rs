#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CellIndex, FactionId, TerrainKind};

/// Raw tile codes used by the game service's map arrays.
pub mod raw {
    pub const EMPTY: i32 = -1;
    pub const MOUNTAIN: i32 = -2;
    pub const FOG: i32 = -3;
    pub const FOG_OBSTACLE: i32 = -4;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub owner: FactionId,
    pub terrain: TerrainKind,
    /// Unit count as reported. May be negative in a malformed snapshot; read it
    /// through [`Cell::units`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: i32,
}

impl Cell {
    pub fn new(owner: FactionId, terrain: TerrainKind, units: i32) -> Self {
        Self {
            owner,
            terrain,
            units,
        }
    }

    /// Decode a cell from the service's raw tile code plus city/general flags.
    ///
    /// Unknown codes and player ids that do not fit a `u8` decode as unowned rather
    /// than failing.
    pub fn from_raw(tile: i32, is_city: bool, is_general: bool, units: i32) -> Self {
        let (owner, mut terrain) = match tile {
            t if t >= 0 => (
                u8::try_from(t)
                    .map(FactionId::Player)
                    .unwrap_or(FactionId::Unowned),
                TerrainKind::Plain,
            ),
            raw::EMPTY => (FactionId::Unowned, TerrainKind::Plain),
            raw::MOUNTAIN => (FactionId::ObservedNeutral, TerrainKind::Mountain),
            raw::FOG => (FactionId::Fog, TerrainKind::Plain),
            raw::FOG_OBSTACLE => (FactionId::Fog, TerrainKind::FogObstacle),
            _ => (FactionId::Unowned, TerrainKind::Plain),
        };
        if terrain.is_ownable() {
            if is_general {
                terrain = TerrainKind::General;
            } else if is_city {
                terrain = TerrainKind::City;
            }
        }
        Self {
            owner,
            terrain,
            units,
        }
    }

    /// Unit count with malformed negative values clamped to zero.
    pub fn units(&self) -> u32 {
        self.units.max(0) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: usize, height: usize },
    #[error("grid {width}x{height} needs {expected} cells, got {actual}")]
    CellCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// Fixed-size, row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr", into = "GridRepr"))]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// A grid where every cell is `cell`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Result<Self, GridError> {
        Self::new(width, height, vec![cell; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, idx: CellIndex) -> Option<&Cell> {
        self.cells.get(idx)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).and_then(|idx| self.cells.get(idx))
    }

    pub fn index(&self, row: usize, col: usize) -> Option<CellIndex> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    pub fn row_col(&self, idx: CellIndex) -> Option<(usize, usize)> {
        if idx < self.cells.len() {
            Some((idx / self.width, idx % self.width))
        } else {
            None
        }
    }

    /// Iterate `(index, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &Cell)> + '_ {
        self.cells.iter().enumerate()
    }

    /// True when `from` and `to` are both on the grid and exactly one row or one
    /// column apart, without wrapping around an edge.
    pub fn is_orthogonal_step(&self, from: CellIndex, to: CellIndex) -> bool {
        let (Some((fr, fc)), Some((tr, tc))) = (self.row_col(from), self.row_col(to)) else {
            return false;
        };
        (fr == tr && fc.abs_diff(tc) == 1) || (fc == tc && fr.abs_diff(tr) == 1)
    }

    /// Mutable access for providers assembling a snapshot.
    pub fn set(&mut self, idx: CellIndex, cell: Cell) -> bool {
        match self.cells.get_mut(idx) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct GridRepr {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        Grid::new(repr.width, repr.height, repr.cells)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            cells: grid.cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes_decode_to_sentinels() {
        assert_eq!(Cell::from_raw(-1, false, false, 0).owner, FactionId::Unowned);
        assert_eq!(Cell::from_raw(-3, false, false, 0).owner, FactionId::Fog);

        let mountain = Cell::from_raw(-2, false, false, 0);
        assert_eq!(mountain.owner, FactionId::ObservedNeutral);
        assert_eq!(mountain.terrain, TerrainKind::Mountain);

        let obstacle = Cell::from_raw(-4, true, false, 0);
        assert_eq!(obstacle.owner, FactionId::Fog);
        assert_eq!(obstacle.terrain, TerrainKind::FogObstacle);
    }

    #[test]
    fn raw_player_codes_keep_city_and_general_flags() {
        let general = Cell::from_raw(2, false, true, 14);
        assert_eq!(general.owner, FactionId::Player(2));
        assert_eq!(general.terrain, TerrainKind::General);
        assert_eq!(general.units(), 14);

        let city = Cell::from_raw(-1, true, false, 40);
        assert_eq!(city.owner, FactionId::Unowned);
        assert_eq!(city.terrain, TerrainKind::City);
    }

    #[test]
    fn unknown_raw_codes_default_to_unowned() {
        assert_eq!(Cell::from_raw(-17, false, false, 0).owner, FactionId::Unowned);
        assert_eq!(Cell::from_raw(300, false, false, 0).owner, FactionId::Unowned);
    }
}
