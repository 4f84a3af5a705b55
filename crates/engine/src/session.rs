//! Game session - the engine state a caller owns
//!
//! One value holds the board, the seeded generator, the level definition and
//! the cumulative progress counters; there are no globals and no event
//! routing. Every effect of a move comes back in the returned [`SwapOutcome`]
//! and the updated [`Progress`], so a level replay is a pure function of
//! (seed, level, move list, tick schedule).

use crate::cascade::{run_cascade, CascadeLog};
use crate::core::{find_matches, remaining_move_bonus, special_bonus, Board, TileGen};
use crate::goal::{evaluate, GoalKind, LevelOutcome, LevelSpec, Progress};
use crate::types::{Pos, TIME_FREEZE_SECS};

/// What one swap request produced.
#[derive(Debug, Clone)]
pub struct SwapOutcome {
    /// False when the request was rejected (out of range, not adjacent,
    /// no match, or the level is already over); the board is unchanged.
    pub accepted: bool,
    /// Per-iteration record of the cascade; empty when rejected.
    pub log: CascadeLog,
}

impl SwapOutcome {
    fn rejected() -> Self {
        Self {
            accepted: false,
            log: CascadeLog::default(),
        }
    }
}

/// A running level: board, RNG stream, level definition, progress counters.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    gen: TileGen,
    level: LevelSpec,
    progress: Progress,
    bonus_awarded: bool,
}

impl GameSession {
    /// Start a level: generate a match-free board from the seed, scatter
    /// frozen tiles if the level calls for them, and arm the budgets.
    pub fn new(seed: u32, level: LevelSpec) -> Self {
        let mut gen = TileGen::new(seed);
        let mut board = Board::generate(&mut gen);
        if level.frozen_cells > 0 {
            board.freeze_random(&mut gen, level.frozen_cells);
        }
        Self::start(board, gen, level)
    }

    /// Start a level over a prepared board (deterministic harness entry;
    /// the board is taken as-is, frozen cells included).
    pub fn with_board(board: Board, seed: u32, level: LevelSpec) -> Self {
        Self::start(board, TileGen::new(seed), level)
    }

    fn start(board: Board, gen: TileGen, level: LevelSpec) -> Self {
        let progress = Progress {
            frozen_remaining: board.frozen_count(),
            moves_left: level.moves,
            time_left: match level.goal {
                GoalKind::TimedScore { seconds, .. } => Some(seconds),
                _ => None,
            },
            ..Progress::default()
        };
        Self {
            board,
            gen,
            level,
            progress,
            bonus_awarded: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level(&self) -> &LevelSpec {
        &self.level
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Current standing of the level.
    pub fn outcome(&self) -> LevelOutcome {
        evaluate(&self.level, &self.progress)
    }

    /// Attempt a swap. Out-of-range and non-adjacent requests fail closed;
    /// a swap that yields no match is undone (the board comes back
    /// byte-identical) and reported as not accepted, which is the defined
    /// invalid-move outcome rather than an error. An accepted swap consumes
    /// a move on move-budget levels and runs the cascade to convergence.
    pub fn request_swap(&mut self, a: Pos, b: Pos) -> SwapOutcome {
        if self.outcome() != LevelOutcome::InProgress {
            return SwapOutcome::rejected();
        }
        if !a.in_bounds() || !b.in_bounds() || !a.is_adjacent(b) {
            return SwapOutcome::rejected();
        }

        self.board.swap(a, b);
        let groups = find_matches(&self.board);
        if groups.is_empty() {
            self.board.swap(a, b);
            return SwapOutcome::rejected();
        }

        if let Some(moves) = self.progress.moves_left.as_mut() {
            *moves = moves.saturating_sub(1);
        }

        let log = run_cascade(&mut self.board, groups, &mut self.gen);
        self.apply_log(&log);

        SwapOutcome {
            accepted: true,
            log,
        }
    }

    /// Fold a finished cascade into the progress counters.
    fn apply_log(&mut self, log: &CascadeLog) {
        let mut created = 0usize;
        for step in &log.steps {
            for cell in step.cleared.iter().chain(step.extra_cleared.iter()) {
                self.progress.cleared_by_kind[cell.kind.index()] += 1;
            }
            for sp in &step.created_specials {
                self.progress.specials_by_kind[sp.special.index()] += 1;
                created += 1;
            }
            // Freeze seconds bank up; they only matter on timed levels
            if step.freeze_triggered && self.level.is_timed() {
                self.progress.freeze_left += TIME_FREEZE_SECS;
            }
        }

        self.progress.score = self
            .progress
            .score
            .saturating_add(log.total_points)
            .saturating_add(special_bonus(created));
        self.progress.frozen_remaining = self.board.frozen_count();

        // Completion bonus for unspent moves, once, on the winning move
        if !self.bonus_awarded && self.outcome() == LevelOutcome::Won && !self.level.is_timed() {
            let left = self.progress.moves_left.unwrap_or(0);
            self.progress.score = self
                .progress
                .score
                .saturating_add(remaining_move_bonus(left));
            self.bonus_awarded = true;
        }
    }

    /// Advance the countdown by one second. A banked time-freeze second is
    /// consumed first; untimed levels ignore the clock entirely.
    pub fn tick_second(&mut self) {
        if self.progress.time_left.is_none() {
            return;
        }
        if self.progress.freeze_left > 0 {
            self.progress.freeze_left -= 1;
            return;
        }
        if let Some(t) = self.progress.time_left.as_mut() {
            *t = t.saturating_sub(1);
        }
    }
}
