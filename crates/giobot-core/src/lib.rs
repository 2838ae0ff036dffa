//! Grid, cell, and snapshot model for the giobot client.
//!
//! Everything here is plain data. Snapshots are produced by a game-state provider and
//! are never mutated once published; the rest of the workspace only reads them.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod command;
pub mod faction;
pub mod grid;
pub mod snapshot;

pub use command::{CellIndex, Direction, MoveCommand};
pub use faction::{FactionId, TerrainKind};
pub use grid::{Cell, Grid, GridError};
pub use snapshot::{GameOutcome, GameSnapshot};
