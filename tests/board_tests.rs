//! Board tests - grid storage, swapping, generation

use garden_crush::core::{find_matches, Board, TileGen};
use garden_crush::types::{Pos, Tile, TileKind, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::empty();
    assert_eq!(board.rows(), BOARD_ROWS);
    assert_eq!(board.cols(), BOARD_COLS);

    for idx in 0..BOARD_CELLS {
        assert_eq!(board.get(Pos::from_index(idx)), Some(None));
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::empty();

    assert_eq!(board.get(Pos::new(-1, 0)), None);
    assert_eq!(board.get(Pos::new(0, -1)), None);
    assert_eq!(board.get(Pos::new(BOARD_ROWS as i8, 0)), None);
    assert_eq!(board.get(Pos::new(0, BOARD_COLS as i8)), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::empty();
    let pos = Pos::new(5, 3);

    assert!(board.set(pos, Some(Tile::plain(TileKind::Fern))));
    assert_eq!(board.kind_at(pos), Some(TileKind::Fern));

    assert!(board.set(pos, None));
    assert_eq!(board.get(pos), Some(None));
    assert!(board.is_empty_cell(pos));
}

#[test]
fn test_board_set_out_of_bounds_fails_closed() {
    let mut board = Board::empty();

    assert!(!board.set(Pos::new(-1, 0), Some(Tile::plain(TileKind::Rose))));
    assert!(!board.set(Pos::new(0, BOARD_COLS as i8), None));
    // Nothing leaked into the grid
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_swap_is_symmetric() {
    let mut board = Board::empty();
    let a = Pos::new(2, 2);
    let b = Pos::new(2, 3);
    board.set(a, Some(Tile::plain(TileKind::Rose)));
    board.set(b, Some(Tile::plain(TileKind::Orchid)));
    let before = board.clone();

    assert!(board.swap(a, b));
    assert!(board.swap(a, b));
    assert_eq!(board, before);
}

#[test]
fn test_generated_boards_are_full_and_match_free() {
    for seed in [1, 2, 42, 777, 31337] {
        let mut gen = TileGen::new(seed);
        let board = Board::generate(&mut gen);

        assert!(board.cells().iter().all(|c| c.is_some()), "seed {}", seed);
        assert!(find_matches(&board).is_empty(), "seed {}", seed);
        // Fresh boards carry no specials and no frozen tiles
        for tile in board.cells().iter().flatten() {
            assert!(tile.special.is_none());
            assert!(!tile.frozen);
        }
    }
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let mut gen_a = TileGen::new(4242);
    let mut gen_b = TileGen::new(4242);
    assert_eq!(Board::generate(&mut gen_a), Board::generate(&mut gen_b));
}

#[test]
fn test_freeze_random_freezes_distinct_cells() {
    let mut gen = TileGen::new(8);
    let mut board = Board::generate(&mut gen);

    assert_eq!(board.freeze_random(&mut gen, 10), 10);
    assert_eq!(board.frozen_count(), 10);

    // Freezing never moves or removes tiles
    assert!(board.cells().iter().all(|c| c.is_some()));
}
