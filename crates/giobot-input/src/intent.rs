//! Move-intent state machine.
//!
//! A single in-progress selection. Clicking a cell makes it the source; each
//! directional nudge completes a one-step move, emits it, and makes the destination
//! the next source so that repeated nudges chain moves.
//!
//! The machine only knows the row width. It does not check that a nudge stays on
//! the same row or inside the grid: `Left` from column 0 yields the previous row's
//! last cell. Whoever submits the command must validate it against the map.

use giobot_core::{CellIndex, Direction, MoveCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentState {
    /// No source selected.
    Idle,
    /// Source selected, waiting for a direction.
    Selecting,
    /// Source and destination both set. Never observable between calls: the machine
    /// resolves it into a command immediately.
    Armed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentEvent {
    Select(CellIndex),
    Nudge(Direction),
    Cancel,
    SetSplit(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    from: Option<CellIndex>,
    to: Option<CellIndex>,
    split: bool,
    row_width: usize,
}

impl MoveIntent {
    pub fn new(row_width: usize) -> Self {
        Self {
            from: None,
            to: None,
            split: false,
            row_width,
        }
    }

    pub fn from(&self) -> Option<CellIndex> {
        self.from
    }

    pub fn to(&self) -> Option<CellIndex> {
        self.to
    }

    pub fn split(&self) -> bool {
        self.split
    }

    pub fn row_width(&self) -> usize {
        self.row_width
    }

    pub fn state(&self) -> IntentState {
        match (self.from, self.to) {
            (None, _) => IntentState::Idle,
            (Some(_), None) => IntentState::Selecting,
            (Some(_), Some(_)) => IntentState::Armed,
        }
    }

    pub fn set_row_width(&mut self, row_width: usize) {
        self.row_width = row_width;
    }

    pub fn apply(&mut self, event: IntentEvent) -> Option<MoveCommand> {
        match event {
            IntentEvent::Select(idx) => self.select_cell(idx),
            IntentEvent::Nudge(direction) => self.nudge(direction),
            IntentEvent::Cancel => {
                self.cancel();
                None
            }
            IntentEvent::SetSplit(split) => {
                self.set_split(split);
                None
            }
        }
    }

    /// Make `idx` the source, discarding any unfinished selection.
    ///
    /// Returns `Option` for symmetry with [`MoveIntent::apply`]; a selection alone
    /// never completes a move.
    pub fn select_cell(&mut self, idx: CellIndex) -> Option<MoveCommand> {
        self.from = Some(idx);
        self.to = None;
        self.resolve()
    }

    pub fn nudge(&mut self, direction: Direction) -> Option<MoveCommand> {
        let from = self.from?;
        let Some(to) = from.checked_add_signed(direction.offset(self.row_width)) else {
            tracing::trace!(from, ?direction, "nudge left the grid, dropped");
            return None;
        };
        self.to = Some(to);
        self.resolve()
    }

    pub fn cancel(&mut self) {
        self.from = None;
        self.to = None;
    }

    pub fn set_split(&mut self, split: bool) {
        self.split = split;
    }

    pub fn toggle_split(&mut self) -> bool {
        self.split = !self.split;
        self.split
    }

    /// Emit and re-seed if both ends are set and distinct.
    fn resolve(&mut self) -> Option<MoveCommand> {
        let (from, to) = (self.from?, self.to?);
        if from == to {
            self.to = None;
            return None;
        }
        self.from = Some(to);
        self.to = None;
        Some(MoveCommand::new(from, to, self.split))
    }
}
