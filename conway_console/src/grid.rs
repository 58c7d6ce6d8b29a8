// grid.rs - Board storage for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Write};

use tracing::debug;

use crate::config::LifeConfig;
use crate::error::{LifeError, Result};

pub const ALIVE_GLYPH: char = '■';
pub const DEAD_GLYPH: char = '□';

// Active cell (r, c) is stored at (r + BORDER, c + BORDER). The surrounding
// ring stays dead forever, so neighbor lookups never need bounds checks.
const BORDER: usize = 1;

/// A fixed-size grid of cells with a dead border around the active area.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    stride: usize, // cols plus both border columns
    cells: Vec<bool>,
}

impl Board {
    /// Create a `rows x cols` board with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyDimensions { rows, cols });
        }
        let too_large = || LifeError::TooLarge { rows, cols };
        let stride = cols.checked_add(2 * BORDER).ok_or_else(too_large)?;
        let total = rows
            .checked_add(2 * BORDER)
            .and_then(|height| height.checked_mul(stride))
            .ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(total).map_err(|_| too_large())?;
        cells.resize(total, false);
        Ok(Self {
            rows,
            cols,
            stride,
            cells,
        })
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.rows, config.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        (row + BORDER) * self.stride + col + BORDER
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell state; anything off the board reads as dead.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.cells[self.idx(row, col)]
    }

    /// Set a cell. Writes outside the board are dropped without touching any state.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        if !self.contains(row, col) {
            debug!(row, col, rows = self.rows, cols = self.cols, "ignoring write outside the board");
            return;
        }
        let idx = self.idx(row, col);
        self.cells[idx] = alive;
    }

    /// Like [`Board::set_cell`], but reports writes outside the board.
    pub fn try_set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        if !self.contains(row, col) {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.set_cell(row, col, alive);
        Ok(())
    }

    /// Live cells among the eight surrounding positions. No wraparound:
    /// positions past an edge fall in the dead border. Returns 0 for
    /// coordinates that are not on the board.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        if !self.contains(row, col) {
            return 0;
        }
        let center = self.idx(row, col);
        let s = self.stride;
        #[rustfmt::skip]
        let neighbors = [
            center - s - 1, center - s, center - s + 1,
            center - 1,                 center + 1,
            center + s - 1, center + s, center + s + 1,
        ];
        neighbors.iter().filter(|&&i| self.cells[i]).count() as u8
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.live_cells().count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.get(row, col))
    }

    /// Hash of the shape and active area, used for cycle detection.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.dimensions().hash(&mut hasher);
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.get(row, col).hash(&mut hasher);
            }
        }
        hasher.finish()
    }

    fn render_row(&self, row: usize) -> String {
        let mut line = String::with_capacity(self.cols * 4);
        for col in 0..self.cols {
            if col > 0 {
                line.push(' ');
            }
            line.push(if self.get(row, col) { ALIVE_GLYPH } else { DEAD_GLYPH });
        }
        line
    }

    /// Display lines: one per row, then a trailing blank line.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows)
            .map(move |row| self.render_row(row))
            .chain(std::iter::once(String::new()))
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for line in self.render() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("live", &self.live_cells().collect::<Vec<_>>())
            .finish()
    }
}
