#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CellIndex, Grid, TerrainKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameOutcome {
    Won,
    Lost,
}

/// Point-in-time view of the whole map, as seen by one player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub grid: Grid,
    #[cfg_attr(feature = "serde", serde(default))]
    pub turn: u32,
    /// Player index of the viewer, once the game has assigned one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub player: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub started: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub outcome: Option<GameOutcome>,
}

impl GameSnapshot {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            turn: 0,
            player: None,
            started: false,
            outcome: None,
        }
    }

    pub fn with_turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    pub fn with_player(mut self, player: u8) -> Self {
        self.player = Some(player);
        self
    }

    pub fn started(mut self) -> Self {
        self.started = true;
        self
    }

    pub fn with_outcome(mut self, outcome: GameOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// First cell holding the viewer's general, if it is visible.
    pub fn own_general(&self) -> Option<CellIndex> {
        let player = self.player?;
        self.grid
            .iter()
            .find(|(_, cell)| {
                cell.terrain == TerrainKind::General && cell.owner.player() == Some(player)
            })
            .map(|(idx, _)| idx)
    }
}
