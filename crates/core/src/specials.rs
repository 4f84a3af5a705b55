//! Special tile activation
//!
//! A special's footprint is the set of extra cells it destroys: its row, its
//! column, both (cross), or the surrounding 3x3 block - always excluding the
//! special's own cell, with out-of-bounds cells omitted. Time-freeze clears
//! nothing and instead pauses a timed level's countdown.
//!
//! Footprints from every special firing in the same cascade step are unioned
//! into one [`CellSet`] before application, so a cell caught by two specials
//! is cleared (and scored) once, and a frozen cell is unfrozen-or-removed
//! once, never both.

use crate::board::Board;
use crate::resolver::ClearedCell;
use crate::types::{CellSet, Pos, SpecialKind, BOARD_COLS, BOARD_ROWS};

/// Result of computing a single special's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Activation {
    pub cells: CellSet,
    pub freezes_time: bool,
}

/// Footprint of a special of the given kind at the given position.
/// Pure over the coordinates - the board is not consulted.
pub fn activation_cells(pos: Pos, special: SpecialKind) -> Activation {
    let mut cells = CellSet::new();
    match special {
        SpecialKind::RowClear => {
            for col in 0..BOARD_COLS as i8 {
                if col != pos.col {
                    cells.insert(Pos::new(pos.row, col));
                }
            }
        }
        SpecialKind::ColumnClear => {
            for row in 0..BOARD_ROWS as i8 {
                if row != pos.row {
                    cells.insert(Pos::new(row, pos.col));
                }
            }
        }
        SpecialKind::CrossClear => {
            for col in 0..BOARD_COLS as i8 {
                if col != pos.col {
                    cells.insert(Pos::new(pos.row, col));
                }
            }
            for row in 0..BOARD_ROWS as i8 {
                if row != pos.row {
                    cells.insert(Pos::new(row, pos.col));
                }
            }
        }
        SpecialKind::AreaClear => {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    // CellSet::insert drops out-of-bounds neighbors
                    cells.insert(Pos::new(pos.row + dr, pos.col + dc));
                }
            }
        }
        SpecialKind::TimeFreeze => {
            return Activation {
                cells,
                freezes_time: true,
            };
        }
    }
    Activation {
        cells,
        freezes_time: false,
    }
}

/// Footprint of the special tile at `pos` on the board. Empty activation if
/// the position is empty, out of bounds, or holds an ordinary tile.
pub fn activate(board: &Board, pos: Pos) -> Activation {
    match board.tile(pos).and_then(|t| t.special) {
        Some(special) => activation_cells(pos, special),
        None => Activation::default(),
    }
}

/// Result of applying a step's deduplicated extra cells.
#[derive(Debug, Clone, Default)]
pub struct ExtraOutcome {
    pub cleared: Vec<ClearedCell>,
    pub unfrozen: Vec<Pos>,
}

/// Apply extra cells to the board: frozen tiles lose their flag, other tiles
/// are removed, empty cells are skipped. `extras` must already be the union
/// of every activation in the step (one visit per cell).
pub fn apply_extras(board: &mut Board, extras: &CellSet) -> ExtraOutcome {
    let mut outcome = ExtraOutcome::default();

    for pos in extras.iter() {
        let Some(mut tile) = board.tile(pos) else {
            continue;
        };
        if tile.frozen {
            tile.frozen = false;
            board.set(pos, Some(tile));
            outcome.unfrozen.push(pos);
        } else {
            board.set(pos, None);
            outcome.cleared.push(ClearedCell {
                pos,
                kind: tile.kind,
            });
        }
    }

    outcome
}
