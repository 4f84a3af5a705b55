//! Board module - manages the 8x8 tile grid
//!
//! Uses a flat array for cache locality. Coordinates are (row, col) with
//! row 0 at the top; tiles fall toward higher row indices.
//!
//! Empty cells exist only mid-cascade: a freshly generated or settled board
//! always has a tile in every cell.

use crate::matcher::find_matches;
use crate::rng::TileGen;
use crate::types::{Cell, Pos, Tile, TileKind, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};

/// The game board - 8x8 grid of tile cells using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Generate a fresh board of random ordinary tiles with **no matches at
    /// rest**: boards containing a match are rejected and regenerated.
    pub fn generate(gen: &mut TileGen) -> Self {
        loop {
            let mut board = Self::empty();
            for cell in &mut board.cells {
                *cell = Some(gen.tile());
            }
            if find_matches(&board).is_empty() {
                return board;
            }
        }
    }

    /// Build a full board from an 8x8 grid of kinds (row-major, ordinary
    /// tiles). Deterministic constructor for harnesses and tests.
    pub fn from_rows(rows: [[TileKind; BOARD_COLS as usize]; BOARD_ROWS as usize]) -> Self {
        let mut board = Self::empty();
        for (r, row) in rows.iter().enumerate() {
            for (c, &kind) in row.iter().enumerate() {
                board.cells[r * BOARD_COLS as usize + c] = Some(Tile::plain(kind));
            }
        }
        board
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Get cell at position. Returns None if out of bounds.
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        pos.index().map(|idx| self.cells[idx])
    }

    /// Get the tile at position, flattening out-of-bounds and empty to None.
    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        self.get(pos).flatten()
    }

    /// The base kind at position, if a tile is present.
    pub fn kind_at(&self, pos: Pos) -> Option<TileKind> {
        self.tile(pos).map(|t| t.kind)
    }

    /// Set cell at position. Returns false if out of bounds (fail closed:
    /// out-of-range writes never touch the grid).
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match pos.index() {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Exchange the cells at two positions. No adjacency check is performed
    /// here - validity is the caller's responsibility. Returns false (board
    /// untouched) if either position is out of bounds.
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        match (a.index(), b.index()) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// True if the position is in bounds and holds no tile.
    pub fn is_empty_cell(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// Count of frozen tiles currently on the board.
    pub fn frozen_count(&self) -> u32 {
        self.cells
            .iter()
            .filter(|c| c.map(|t| t.frozen).unwrap_or(false))
            .count() as u32
    }

    /// Freeze `count` distinct random tiles (for frozen-obstacle levels).
    /// Returns the number actually frozen (capped at the cell count).
    pub fn freeze_random(&mut self, gen: &mut TileGen, count: u32) -> u32 {
        let target = count.min(BOARD_CELLS as u32);
        let mut placed = 0;
        while placed < target {
            let idx = gen.pick(BOARD_CELLS);
            if let Some(tile) = &mut self.cells[idx] {
                if !tile.frozen {
                    tile.frozen = true;
                    placed += 1;
                }
            }
        }
        placed
    }

    /// Get a reference to the internal cells array (row-major).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
