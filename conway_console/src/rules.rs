// rules.rs - B3/S23 generation rule

use crate::error::{LifeError, Result};
use crate::grid::Board;

/// Next state of a single cell given its current state and live neighbor count.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Compute the generation after `current` as a fresh board.
pub fn advance(current: &Board) -> Board {
    let mut next = current.clone();
    evolve(current, &mut next);
    next
}

/// Compute the generation after `current` into `next`, overwriting every cell.
pub fn advance_into(current: &Board, next: &mut Board) -> Result<()> {
    if current.dimensions() != next.dimensions() {
        return Err(LifeError::DimensionMismatch {
            expected: current.dimensions(),
            got: next.dimensions(),
        });
    }
    evolve(current, next);
    Ok(())
}

// Reads only from `current`; every cell of `next` is written.
fn evolve(current: &Board, next: &mut Board) {
    for row in 0..current.rows() {
        for col in 0..current.cols() {
            let count = current.count_live_neighbors(row, col);
            next.set_cell(row, col, next_state(current.get(row, col), count));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(rows: usize, cols: usize, cells: &[(usize, usize)]) -> Board {
        let mut board = Board::new(rows, cols).unwrap();
        for &(row, col) in cells {
            board.set_cell(row, col, true);
        }
        board
    }

    #[test]
    fn rule_table() {
        for n in 0..=8u8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn empty_board_stays_empty() {
        let board = Board::new(25, 25).unwrap();
        assert_eq!(advance(&board).population(), 0);
    }

    #[test]
    fn lone_cell_dies() {
        let board = board_with(25, 25, &[(12, 12)]);
        assert_eq!(advance(&board).population(), 0);
    }

    #[test]
    fn cell_with_one_neighbor_dies() {
        let board = board_with(10, 10, &[(4, 4), (4, 5)]);
        let next = advance(&board);
        assert!(!next.get(4, 4));
        assert!(!next.get(4, 5));
    }

    #[test]
    fn two_or_three_neighbors_survive() {
        // Center of a blinker has two neighbors.
        let blinker = board_with(10, 10, &[(4, 3), (4, 4), (4, 5)]);
        assert!(advance(&blinker).get(4, 4));

        // Every cell of a block has three neighbors.
        let block = board_with(10, 10, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        assert_eq!(advance(&block), block);
    }

    #[test]
    fn four_neighbors_is_overcrowding() {
        let board = board_with(10, 10, &[(5, 5), (4, 4), (4, 6), (6, 4), (6, 6)]);
        assert_eq!(board.count_live_neighbors(5, 5), 4);
        assert!(!advance(&board).get(5, 5));
    }

    #[test]
    fn birth_needs_exactly_three() {
        let three = board_with(10, 10, &[(0, 0), (0, 2), (2, 1)]);
        assert!(advance(&three).get(1, 1));

        let two = board_with(10, 10, &[(0, 0), (0, 2)]);
        assert!(!advance(&two).get(1, 1));

        let four = board_with(10, 10, &[(0, 0), (0, 2), (2, 0), (2, 2)]);
        assert!(!advance(&four).get(1, 1));
    }

    #[test]
    fn corner_never_sees_more_than_three() {
        let mut board = Board::new(6, 6).unwrap();
        for row in 0..6 {
            for col in 0..6 {
                board.set_cell(row, col, true);
            }
        }
        assert_eq!(board.count_live_neighbors(0, 0), 3);
        // With three neighbors the corner survives a full board.
        assert!(advance(&board).get(0, 0));
    }

    #[test]
    fn advance_leaves_input_untouched() {
        let board = board_with(8, 8, &[(1, 1), (1, 2), (1, 3)]);
        let snapshot = board.clone();
        let _ = advance(&board);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn advance_into_overwrites_stale_cells() {
        let current = board_with(6, 6, &[(2, 1), (2, 2), (2, 3)]);
        let mut next = board_with(6, 6, &[(0, 0), (5, 5)]);
        advance_into(&current, &mut next).unwrap();
        assert_eq!(next.live_cells().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn advance_into_rejects_other_shapes() {
        let current = Board::new(4, 4).unwrap();
        let mut next = Board::new(4, 5).unwrap();
        assert!(matches!(
            advance_into(&current, &mut next),
            Err(LifeError::DimensionMismatch { expected: (4, 4), got: (4, 5) })
        ));
    }
}
