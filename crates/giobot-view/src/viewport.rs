#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use giobot_core::CellIndex;

/// Pixel rectangle, top-left `(x1, y1)` to bottom-right `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Window geometry plus the grid it shows.
///
/// The grid is drawn inside a uniform `border`; row and column steps are derived
/// independently, so cells are only square when the drawable area matches the grid's
/// aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub border: f64,
    pub cols: usize,
    pub rows: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            border: 25.0,
            cols: 18,
            rows: 18,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64, border: f64, cols: usize, rows: usize) -> Self {
        Self {
            width,
            height,
            border,
            cols,
            rows,
        }
    }

    pub fn with_grid(self, cols: usize, rows: usize) -> Self {
        Self { cols, rows, ..self }
    }

    pub fn resized(self, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    pub fn col_step(&self) -> f64 {
        (self.width - 2.0 * self.border) / self.cols as f64
    }

    pub fn row_step(&self) -> f64 {
        (self.height - 2.0 * self.border) / self.rows as f64
    }

    /// True when the border leaves a positive drawable area on both axes.
    pub fn has_area(&self) -> bool {
        self.width - 2.0 * self.border > 0.0 && self.height - 2.0 * self.border > 0.0
    }

    /// Left, top, right, bottom pixel limits of the drawable grid.
    pub fn grid_bounds(&self) -> Rect {
        Rect {
            x1: self.border,
            y1: self.border,
            x2: self.width - self.border,
            y2: self.height - self.border,
        }
    }

    /// Unclamped `(row, col)` under a pixel. Either may be negative or past the grid.
    pub fn grid_coords(&self, x: f64, y: f64) -> (i64, i64) {
        let row = ((y - self.border) / self.row_step()).floor() as i64;
        let col = ((x - self.border) / self.col_step()).floor() as i64;
        (row, col)
    }

    /// Row-major index of the cell under a pixel.
    ///
    /// `None` means the point lies outside the grid on either axis, or there is no
    /// drawable area to hit; callers drop it.
    pub fn cell_from_point(&self, x: f64, y: f64) -> Option<CellIndex> {
        if self.cols == 0 || self.rows == 0 || !self.has_area() {
            return None;
        }
        let (row, col) = self.grid_coords(x, y);
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let (col_step, row_step) = (self.col_step(), self.row_step());
        let x1 = col_step * col as f64 + self.border;
        let y1 = row_step * row as f64 + self.border;
        Rect {
            x1,
            y1,
            x2: x1 + col_step,
            y2: y1 + row_step,
        }
    }

    pub fn cell_center(&self, row: usize, col: usize) -> (f64, f64) {
        self.cell_rect(row, col).center()
    }
}
