use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::config::Seed;
use crate::grid::Board;

/// A named starting shape, in coordinates relative to its top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const PATTERNS: &[&Pattern] = &[&GLIDER, &BLINKER, &TOAD, &BEACON, &BLOCK, &R_PENTOMINO];

impl Pattern {
    /// Rows and columns spanned by the pattern.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .copied()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Add the pattern's cells to the board at `origin`. Cells that fall off
/// the board are skipped.
pub fn stamp_pattern(board: &mut Board, pattern: &Pattern, origin: (usize, usize)) {
    let (row_off, col_off) = origin;
    let (height, width) = pattern.extent();
    if row_off.saturating_add(height) > board.rows() || col_off.saturating_add(width) > board.cols() {
        debug!(pattern = pattern.name, row_off, col_off, "pattern clipped at the board edge");
    }
    for &(row, col) in pattern.cells {
        board.set_cell(row.saturating_add(row_off), col.saturating_add(col_off), true);
    }
}

/// Clear the board, then place the pattern at `origin`.
pub fn apply_pattern(board: &mut Board, pattern: &Pattern, origin: (usize, usize)) {
    board.clear();
    stamp_pattern(board, pattern, origin);
}

pub fn apply_random_pattern(board: &mut Board, seed_value: u64) {
    board.clear();

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            board.set_cell(row, col, (seed >> 16) % 3 == 0); // ~33% chance of being alive
        }
    }
}

pub fn apply_seed(board: &mut Board, seed: &Seed) {
    match *seed {
        Seed::Pattern { pattern, origin } => apply_pattern(board, pattern, origin),
        Seed::Random(value) => apply_random_pattern(board, value),
    }
}
