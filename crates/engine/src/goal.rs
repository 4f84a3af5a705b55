//! Level goals and win/lose evaluation
//!
//! The evaluator is a pure function over the counters a session accumulates:
//! it never reaches into the board or the cascade, and the engine never
//! reads goal state back. A level is won the moment its goal condition
//! holds and lost when its move or time budget runs dry - when both trip on
//! the same move, the win is reported (goal is checked first).

use crate::types::{SpecialKind, TileKind, TILE_KIND_COUNT};

/// What a level asks the player to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    /// Reach `target` points.
    Score { target: u32 },
    /// Remove `target` tiles of one base kind (match clears and special
    /// extras both count).
    Collect { kind: TileKind, target: u32 },
    /// Break every frozen tile. `target` is the starting frozen count.
    ClearFrozen { target: u32 },
    /// Create at least `per_kind_target` specials of *every* kind.
    CreateSpecials { per_kind_target: u32 },
    /// Reach `target` points before `seconds` run out. Timed levels have
    /// no move budget.
    TimedScore { target: u32, seconds: u32 },
}

/// A complete level definition: the goal plus its budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSpec {
    pub goal: GoalKind,
    /// Move budget; None for timed levels.
    pub moves: Option<u32>,
    /// Frozen tiles to scatter at level start.
    pub frozen_cells: u32,
}

impl LevelSpec {
    pub const fn new(goal: GoalKind, moves: Option<u32>, frozen_cells: u32) -> Self {
        Self {
            goal,
            moves,
            frozen_cells,
        }
    }

    /// The five stock levels, tuning values carried over unchanged.
    pub const fn reference_levels() -> [LevelSpec; 5] {
        [
            LevelSpec::new(GoalKind::Score { target: 3000 }, Some(30), 0),
            LevelSpec::new(
                GoalKind::Collect {
                    kind: TileKind::Rose,
                    target: 20,
                },
                Some(25),
                0,
            ),
            LevelSpec::new(GoalKind::ClearFrozen { target: 10 }, Some(30), 10),
            LevelSpec::new(GoalKind::CreateSpecials { per_kind_target: 2 }, Some(35), 0),
            LevelSpec::new(
                GoalKind::TimedScore {
                    target: 6500,
                    seconds: 90,
                },
                None,
                0,
            ),
        ]
    }

    pub fn is_timed(&self) -> bool {
        matches!(self.goal, GoalKind::TimedScore { .. })
    }
}

/// Cumulative counters a session feeds the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub score: u32,
    /// Tiles removed, indexed by [`TileKind::index`].
    pub cleared_by_kind: [u32; TILE_KIND_COUNT],
    /// Specials created, indexed by [`SpecialKind::index`].
    pub specials_by_kind: [u32; TILE_KIND_COUNT],
    /// Frozen tiles still on the board.
    pub frozen_remaining: u32,
    /// Moves left; None for timed levels.
    pub moves_left: Option<u32>,
    /// Seconds left on the countdown; None for untimed levels.
    pub time_left: Option<u32>,
    /// Seconds of time-freeze still banked (consumed before the countdown).
    pub freeze_left: u32,
}

/// Where a level stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    InProgress,
    Won,
    Lost,
}

fn goal_met(goal: &GoalKind, progress: &Progress) -> bool {
    match *goal {
        GoalKind::Score { target } => progress.score >= target,
        GoalKind::Collect { kind, target } => progress.cleared_by_kind[kind.index()] >= target,
        GoalKind::ClearFrozen { .. } => progress.frozen_remaining == 0,
        GoalKind::CreateSpecials { per_kind_target } => SpecialKind::ALL
            .iter()
            .all(|s| progress.specials_by_kind[s.index()] >= per_kind_target),
        GoalKind::TimedScore { target, .. } => progress.score >= target,
    }
}

/// Evaluate a level. Win takes precedence over loss.
pub fn evaluate(level: &LevelSpec, progress: &Progress) -> LevelOutcome {
    if goal_met(&level.goal, progress) {
        return LevelOutcome::Won;
    }
    let budget_spent = match level.goal {
        GoalKind::TimedScore { .. } => progress.time_left == Some(0),
        _ => progress.moves_left == Some(0),
    };
    if budget_spent {
        LevelOutcome::Lost
    } else {
        LevelOutcome::InProgress
    }
}
