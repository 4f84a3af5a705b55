//! Session tests - move contract, budgets, goals

use garden_crush::core::{find_matches, special_bonus, Board};
use garden_crush::engine::{GameSession, GoalKind, LevelOutcome, LevelSpec};
use garden_crush::types::TileKind::{Bonsai as B, Rose as R};
use garden_crush::types::{Pos, TileKind};

fn scrambled() -> [[TileKind; 8]; 8] {
    let mut rows = [[R; 8]; 8];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = TileKind::ALL[(2 * r + c) % 5];
        }
    }
    rows
}

fn score_level() -> LevelSpec {
    LevelSpec::new(GoalKind::Score { target: 3000 }, Some(30), 0)
}

/// Swapping (4,5)<->(4,6) completes a vertical Rose run in column 6.
fn rose_swap_rows() -> [[TileKind; 8]; 8] {
    let mut rows = scrambled();
    rows[3][6] = R;
    rows[4][5] = R;
    rows[4][6] = B;
    rows
}

#[test]
fn test_matchless_swap_restores_the_board_exactly() {
    let board = Board::from_rows(scrambled());
    let mut session = GameSession::with_board(board.clone(), 1, score_level());

    let out = session.request_swap(Pos::new(0, 0), Pos::new(0, 1));
    assert!(!out.accepted);
    assert!(out.log.steps.is_empty());
    // Byte-identical board, nothing consumed
    assert_eq!(session.board(), &board);
    assert_eq!(session.progress().moves_left, Some(30));
    assert_eq!(session.progress().score, 0);
}

#[test]
fn test_invalid_requests_fail_closed() {
    let board = Board::from_rows(scrambled());
    let mut session = GameSession::with_board(board.clone(), 1, score_level());

    assert!(!session.request_swap(Pos::new(0, 0), Pos::new(0, 8)).accepted);
    assert!(!session.request_swap(Pos::new(-1, 3), Pos::new(0, 3)).accepted);
    assert!(!session.request_swap(Pos::new(2, 2), Pos::new(3, 3)).accepted);
    assert!(!session.request_swap(Pos::new(2, 2), Pos::new(2, 2)).accepted);
    assert_eq!(session.board(), &board);
}

#[test]
fn test_accepted_swap_runs_cascade_and_consumes_a_move() {
    let board = Board::from_rows(rose_swap_rows());
    let mut session = GameSession::with_board(board, 9, score_level());

    let out = session.request_swap(Pos::new(4, 5), Pos::new(4, 6));
    assert!(out.accepted);
    assert!(!out.log.steps.is_empty());
    assert_eq!(session.progress().moves_left, Some(29));
    assert!(session.progress().score >= 30);
    // Cascade always leaves a full, settled board
    assert!(find_matches(session.board()).is_empty());
    assert!(session.board().cells().iter().all(|c| c.is_some()));
}

#[test]
fn test_special_creation_adds_the_flat_bonus() {
    let mut rows = scrambled();
    // Row 5 reads S S _ S; the swap drops the fourth Succulent into the gap
    rows[5][0] = TileKind::Succulent;
    rows[5][1] = TileKind::Succulent;
    rows[4][2] = TileKind::Succulent;
    let board = Board::from_rows(rows);
    let mut session = GameSession::with_board(board, 21, score_level());

    let out = session.request_swap(Pos::new(4, 2), Pos::new(5, 2));
    assert!(out.accepted);
    assert_eq!(out.log.steps[0].created_specials.len(), 1);

    let created = out.log.created_specials().count();
    assert!(created >= 1);
    assert_eq!(
        session.progress().score,
        out.log.total_points + special_bonus(created)
    );
}

#[test]
fn test_collect_progress_counts_both_clear_paths() {
    let board = Board::from_rows(rose_swap_rows());
    let level = LevelSpec::new(
        GoalKind::Collect {
            kind: R,
            target: 3,
        },
        Some(25),
        0,
    );
    let mut session = GameSession::with_board(board, 9, level);

    let out = session.request_swap(Pos::new(4, 5), Pos::new(4, 6));
    assert!(out.accepted);
    assert!(session.progress().cleared_by_kind[R.index()] >= 3);
    assert_eq!(session.outcome(), LevelOutcome::Won);
}

#[test]
fn test_moves_run_out_and_the_level_is_lost() {
    let board = Board::from_rows(rose_swap_rows());
    // One move, unreachable target
    let level = LevelSpec::new(GoalKind::Score { target: 1_000_000 }, Some(1), 0);
    let mut session = GameSession::with_board(board, 9, level);

    let out = session.request_swap(Pos::new(4, 5), Pos::new(4, 6));
    assert!(out.accepted);
    assert_eq!(session.progress().moves_left, Some(0));
    assert_eq!(session.outcome(), LevelOutcome::Lost);

    // A lost level accepts no further input
    assert!(!session.request_swap(Pos::new(0, 0), Pos::new(0, 1)).accepted);
}

#[test]
fn test_frozen_level_tracks_remaining_ice() {
    let level = LevelSpec::new(GoalKind::ClearFrozen { target: 10 }, Some(30), 10);
    let session = GameSession::new(77, level);

    assert_eq!(session.progress().frozen_remaining, 10);
    assert_eq!(session.outcome(), LevelOutcome::InProgress);
}

#[test]
fn test_timed_level_countdown_and_loss() {
    let level = LevelSpec::new(
        GoalKind::TimedScore {
            target: 6500,
            seconds: 3,
        },
        None,
        0,
    );
    let mut session = GameSession::new(1, level);
    assert_eq!(session.progress().time_left, Some(3));

    session.tick_second();
    session.tick_second();
    assert_eq!(session.outcome(), LevelOutcome::InProgress);
    session.tick_second();
    assert_eq!(session.progress().time_left, Some(0));
    assert_eq!(session.outcome(), LevelOutcome::Lost);
}

#[test]
fn test_replay_is_deterministic() {
    let level = score_level();
    let mut a = GameSession::new(1234, level);
    let mut b = GameSession::new(1234, level);

    for (p, q) in [
        (Pos::new(0, 0), Pos::new(0, 1)),
        (Pos::new(3, 3), Pos::new(3, 4)),
        (Pos::new(6, 2), Pos::new(7, 2)),
    ] {
        let out_a = a.request_swap(p, q);
        let out_b = b.request_swap(p, q);
        assert_eq!(out_a.accepted, out_b.accepted);
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.progress(), b.progress());
}
