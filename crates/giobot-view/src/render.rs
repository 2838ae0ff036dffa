//! Snapshot → draw plan.
//!
//! Each cell contributes, in row-major order, one filled rectangle, an optional
//! centered unit count, and an optional corner glyph. Grid lines come last so they
//! sit on top of every fill.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use giobot_core::{Cell, FactionId, GameSnapshot, TerrainKind};

use crate::{Rect, Rgba, Viewport};

/// Faction colors, indexed by player id.
pub const DEFAULT_PALETTE: [Rgba; 8] = [
    Rgba::rgb(225, 39, 39),
    Rgba::rgb(5, 41, 250),
    Rgba::rgb(48, 105, 1),
    Rgba::rgb(94, 25, 109),
    Rgba::rgb(45, 107, 107),
    Rgba::rgb(24, 52, 0),
    Rgba::rgb(239, 150, 40),
    Rgba::rgb(96, 17, 17),
];

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Theme {
    /// Cells the viewer cannot see.
    pub fog: Rgba,
    /// Observed neutral ground and unowned cities.
    pub neutral: Rgba,
    pub background: Rgba,
    pub text: Rgba,
    pub grid: Rgba,
    pub palette: Vec<Rgba>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fog: Rgba::rgb(0x44, 0x44, 0x44),
            neutral: Rgba::rgb(0x88, 0x88, 0x88),
            background: Rgba::WHITE,
            text: Rgba::WHITE,
            grid: Rgba::rgb(0x88, 0x88, 0x88),
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Theme {
    /// Color for a faction id. Ids past the palette wrap around.
    pub fn faction_color(&self, id: u8) -> Rgba {
        if self.palette.is_empty() {
            return self.background;
        }
        self.palette[id as usize % self.palette.len()]
    }

    pub fn cell_fill(&self, cell: &Cell) -> Rgba {
        match (cell.owner, cell.terrain) {
            (FactionId::Fog, _) => self.fog,
            (FactionId::ObservedNeutral, _) => self.neutral,
            (FactionId::Player(id), _) => self.faction_color(id),
            (_, TerrainKind::City) => self.neutral,
            _ => self.background,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextAnchor {
    /// `(x, y)` is the center of the text's bounds.
    Center,
    /// `(x, y)` is the top-left corner of the text's bounds.
    TopLeft,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: Rgba,
        anchor: TextAnchor,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgba,
    },
}

/// Ordered draw operations for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawPlan {
    pub ops: Vec<DrawOp>,
}

impl DrawPlan {
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Rect, &Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &DrawOp> + '_ {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> + '_ {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
    }
}

/// Build the draw plan for `snapshot`.
///
/// The viewport's grid dimensions are taken from the snapshot, so a stale viewport
/// still lays out the current map. Nothing here can fail: malformed counts were
/// clamped when the cell was read.
pub fn render(snapshot: &GameSnapshot, viewport: &Viewport, theme: &Theme) -> DrawPlan {
    let grid = &snapshot.grid;
    let vp = viewport.with_grid(grid.width(), grid.height());
    let mut plan = DrawPlan {
        ops: Vec::with_capacity(grid.len() * 2 + grid.width() + grid.height() + 2),
    };

    for (idx, cell) in grid.iter() {
        let (row, col) = (idx / grid.width(), idx % grid.width());
        let rect = vp.cell_rect(row, col);

        plan.push(DrawOp::FillRect {
            rect,
            color: theme.cell_fill(cell),
        });

        let units = cell.units();
        if units > 0 && cell.terrain.shows_units() {
            let (x, y) = rect.center();
            plan.push(DrawOp::Text {
                x,
                y,
                text: units.to_string(),
                color: theme.text,
                anchor: TextAnchor::Center,
            });
        }

        if let Some(glyph) = cell.terrain.glyph() {
            plan.push(DrawOp::Text {
                x: rect.x1,
                y: rect.y1,
                text: glyph.to_string(),
                color: theme.text,
                anchor: TextAnchor::TopLeft,
            });
        }
    }

    push_grid_lines(&mut plan, &vp, theme.grid);
    plan
}

fn push_grid_lines(plan: &mut DrawPlan, vp: &Viewport, color: Rgba) {
    let bounds = vp.grid_bounds();
    for i in 0..=vp.rows {
        let y = bounds.y1 + i as f64 * vp.row_step();
        plan.push(DrawOp::Line {
            x1: bounds.x1,
            y1: y,
            x2: bounds.x2,
            y2: y,
            color,
        });
    }
    for i in 0..=vp.cols {
        let x = bounds.x1 + i as f64 * vp.col_step();
        plan.push(DrawOp::Line {
            x1: x,
            y1: bounds.y1,
            x2: x,
            y2: bounds.y2,
            color,
        });
    }
}
