//! Match detection - maximal runs merged into connected groups
//!
//! Detection is a two-phase pass. First, every maximal horizontal and
//! vertical run of 3+ equal-kind tiles is marked. Second, marked cells are
//! grouped by 4-directional connected-component labeling, so an L- or
//! T-shaped intersection of runs of one kind is reported as a single group.
//! The merge matters: only one special may be created per group, and every
//! marked cell must be accounted for exactly once.
//!
//! Tiles compare strictly by base kind; special and frozen status are
//! ignored. Empty cells break runs.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{CellSet, Pos, TileKind, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};

/// A set of same-kind coordinates formed by merging touching runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub kind: TileKind,
    pub cells: Vec<Pos>,
}

impl MatchGroup {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Find all match groups on the board. Group ordering is unspecified;
/// membership is exhaustive and no cell appears in two groups.
pub fn find_matches(board: &Board) -> Vec<MatchGroup> {
    let marked = mark_runs(board);
    group_marked(board, &marked)
}

/// Mark every cell belonging to a horizontal or vertical run of length >= 3.
fn mark_runs(board: &Board) -> CellSet {
    let mut marked = CellSet::new();

    // Horizontal runs
    for row in 0..BOARD_ROWS as i8 {
        let mut run_start: i8 = 0;
        for col in 1..=BOARD_COLS as i8 {
            let prev = board.kind_at(Pos::new(row, col - 1));
            let curr = if col < BOARD_COLS as i8 {
                board.kind_at(Pos::new(row, col))
            } else {
                None
            };
            if curr.is_some() && curr == prev {
                continue;
            }
            // Run ended at `col` (exclusive); empty cells never form runs.
            if prev.is_some() && col - run_start >= 3 {
                for c in run_start..col {
                    marked.insert(Pos::new(row, c));
                }
            }
            run_start = col;
        }
    }

    // Vertical runs
    for col in 0..BOARD_COLS as i8 {
        let mut run_start: i8 = 0;
        for row in 1..=BOARD_ROWS as i8 {
            let prev = board.kind_at(Pos::new(row - 1, col));
            let curr = if row < BOARD_ROWS as i8 {
                board.kind_at(Pos::new(row, col))
            } else {
                None
            };
            if curr.is_some() && curr == prev {
                continue;
            }
            if prev.is_some() && row - run_start >= 3 {
                for r in run_start..row {
                    marked.insert(Pos::new(r, col));
                }
            }
            run_start = row;
        }
    }

    marked
}

/// Merge marked cells into connected groups (4-directional flood fill).
fn group_marked(board: &Board, marked: &CellSet) -> Vec<MatchGroup> {
    let mut groups = Vec::new();
    let mut visited = CellSet::new();

    for seed in marked.iter() {
        if visited.contains(seed) {
            continue;
        }
        let kind = match board.kind_at(seed) {
            Some(kind) => kind,
            None => continue,
        };

        let mut cells = Vec::new();
        let mut stack: ArrayVec<Pos, BOARD_CELLS> = ArrayVec::new();
        stack.push(seed);
        visited.insert(seed);

        while let Some(pos) = stack.pop() {
            cells.push(pos);
            for next in pos.neighbors() {
                if marked.contains(next) && !visited.contains(next) {
                    visited.insert(next);
                    stack.push(next);
                }
            }
        }

        groups.push(MatchGroup { kind, cells });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKind::{Bonsai as B, Fern as F, Orchid as O, Rose as R, Succulent as S};

    // Base grid with no runs: kind index = (2*row + col) % 5, so both
    // horizontal and vertical neighbors always differ.
    fn scrambled() -> [[TileKind; 8]; 8] {
        let mut rows = [[R; 8]; 8];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = TileKind::ALL[(2 * r + c) % 5];
            }
        }
        rows
    }

    #[test]
    fn test_no_matches_on_scrambled_board() {
        let board = Board::from_rows(scrambled());
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_horizontal_run_of_three() {
        let mut rows = scrambled();
        rows[2] = [R, R, R, S, O, R, B, F];
        let board = Board::from_rows(rows);

        let groups = find_matches(&board);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, R);
        let mut cells = groups[0].cells.clone();
        cells.sort_by_key(|p| (p.row, p.col));
        assert_eq!(
            cells,
            vec![Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)]
        );
    }

    #[test]
    fn test_vertical_run_of_four() {
        let mut rows = scrambled();
        rows[3][5] = B;
        rows[4][5] = B;
        rows[5][5] = B;
        rows[6][5] = B;
        // Guard the column ends so the run is exactly 4
        assert_ne!(rows[2][5], B);
        assert_ne!(rows[7][5], B);
        let board = Board::from_rows(rows);

        let groups = find_matches(&board);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, B);
        assert_eq!(groups[0].len(), 4);
    }

    #[test]
    fn test_l_shape_merges_into_one_group_of_five() {
        // Horizontal run (4,2)..(4,4) and vertical run (2,4)..(4,4) share
        // the corner (4,4): one group of 5 distinct cells, not two groups.
        let mut rows = scrambled();
        rows[4][2] = R;
        rows[4][3] = R;
        rows[4][4] = R;
        rows[3][4] = R;
        rows[2][4] = R;
        let board = Board::from_rows(rows);

        let groups = find_matches(&board);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, R);

        let mut cells = groups[0].cells.clone();
        cells.sort_by_key(|p| (p.row, p.col));
        assert_eq!(
            cells,
            vec![
                Pos::new(2, 4),
                Pos::new(3, 4),
                Pos::new(4, 2),
                Pos::new(4, 3),
                Pos::new(4, 4),
            ]
        );
    }

    #[test]
    fn test_separate_runs_stay_separate_groups() {
        let mut rows = scrambled();
        rows[0] = [F, F, F, S, O, B, B, B];
        let board = Board::from_rows(rows);

        let mut groups = find_matches(&board);
        groups.sort_by_key(|g| g.cells.iter().map(|p| p.col).min());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].kind, F);
        assert_eq!(groups[1].kind, B);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[1].len(), 3);
    }

    #[test]
    fn test_same_kind_runs_not_touching_are_two_groups() {
        let mut rows = scrambled();
        rows[1] = [O, O, O, S, O, O, O, F];
        // Guard verticals around the overwritten row
        let board = Board::from_rows(rows);

        let groups = find_matches(&board);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.kind == O && g.len() == 3));
    }

    #[test]
    fn test_empty_cells_break_runs() {
        let mut rows = scrambled();
        rows[5] = [S, S, S, S, S, S, S, S];
        let mut board = Board::from_rows(rows);
        board.set(Pos::new(5, 3), None);

        let groups = find_matches(&board);
        // 3-run on the left of the hole, 4-run on the right
        assert_eq!(groups.len(), 2);
        let mut sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![3, 4]);
    }

    #[test]
    fn test_no_cell_in_two_groups() {
        let mut rows = scrambled();
        rows[4][2] = R;
        rows[4][3] = R;
        rows[4][4] = R;
        rows[3][4] = R;
        rows[2][4] = R;
        rows[0] = [F, F, F, S, O, B, B, B];
        let board = Board::from_rows(rows);

        let groups = find_matches(&board);
        let mut seen = CellSet::new();
        for group in &groups {
            for &pos in &group.cells {
                assert!(seen.insert(pos), "cell {:?} in two groups", pos);
            }
        }
    }
}
