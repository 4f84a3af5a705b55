//! Gravity and refill
//!
//! Each column is compacted independently with a write pointer scanning
//! bottom-up: surviving tiles keep their relative order (lower tiles stay
//! lower) and the vacated cells collect at the top, where fresh ordinary
//! tiles are generated. Settling never looks for matches - the caller
//! re-runs detection afterward.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::TileGen;
use crate::types::{Pos, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};

/// Compact every column downward and refill the vacated top cells.
/// Returns the newly filled positions (per column, top to bottom).
pub fn settle(board: &mut Board, gen: &mut TileGen) -> Vec<Pos> {
    let mut filled: ArrayVec<Pos, BOARD_CELLS> = ArrayVec::new();

    for col in 0..BOARD_COLS as i8 {
        let mut write = BOARD_ROWS as i8 - 1;
        for row in (0..BOARD_ROWS as i8).rev() {
            let pos = Pos::new(row, col);
            if let Some(tile) = board.tile(pos) {
                if row != write {
                    board.set(Pos::new(write, col), Some(tile));
                    board.set(pos, None);
                }
                write -= 1;
            }
        }
        // Rows 0..=write are now empty; refill top-down
        for row in 0..=write {
            let pos = Pos::new(row, col);
            board.set(pos, Some(gen.tile()));
            filled.push(pos);
        }
    }

    filled.into_iter().collect()
}
