//! Row-major cell layout over the world rectangle.
//!
//! ```text
//!   col→   0     1     2
//! row 0  [ 0 ] [ 1 ] [ 2 ]
//! row 1  [ 3 ] [ 4 ] [ 5 ]
//! row 2  [ 6 ] [ 7 ] [ 8 ]
//! ```
//!
//! Square counts use a `√n × √n` grid.  The one non-square allowed count,
//! 2, is a single row of two cells.

use flock_core::{ALLOWED_CELL_COUNTS, CellId, ConfigError, ConfigResult, FlockConfig, Rect, Vec2};

/// Grid dimensions and per-cell geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub rows:        usize,
    pub cols:        usize,
    pub cell_width:  f32,
    pub cell_height: f32,
}

impl GridLayout {
    /// Layout for `cell_count` cells tiling a `world_width × world_height`
    /// world.
    ///
    /// # Errors
    /// [`ConfigError::UnsupportedCellCount`] outside [`ALLOWED_CELL_COUNTS`].
    pub fn new(cell_count: usize, world_width: f32, world_height: f32) -> ConfigResult<Self> {
        if !ALLOWED_CELL_COUNTS.contains(&cell_count) {
            return Err(ConfigError::UnsupportedCellCount(cell_count));
        }
        let (rows, cols) = match cell_count {
            2 => (1, 2),
            n => {
                let side = (n as f64).sqrt().round() as usize;
                (side, side)
            }
        };
        Ok(Self {
            rows,
            cols,
            cell_width:  world_width / cols as f32,
            cell_height: world_height / rows as f32,
        })
    }

    pub fn from_config(config: &FlockConfig) -> ConfigResult<Self> {
        Self::new(config.cell_count, config.world_width, config.world_height)
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// All cell ids in row-major order.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> + use<> {
        (0..self.cell_count() as u16).map(CellId)
    }

    /// `(row, col)` of `cell`.
    #[inline]
    pub fn row_col(&self, cell: CellId) -> (usize, usize) {
        (cell.index() / self.cols, cell.index() % self.cols)
    }

    /// Cell at signed grid coordinates, `None` off the grid.
    pub fn cell_at(&self, row: isize, col: isize) -> Option<CellId> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(CellId((row as usize * self.cols + col as usize) as u16))
    }

    /// World-space bounds of `cell`.
    pub fn cell_bounds(&self, cell: CellId) -> Rect {
        let (row, col) = self.row_col(cell);
        Rect::from_origin_size(
            Vec2::new(col as f32 * self.cell_width, row as f32 * self.cell_height),
            self.cell_width,
            self.cell_height,
        )
    }
}
