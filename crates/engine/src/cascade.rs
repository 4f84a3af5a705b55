//! Cascade coordinator - the clearing loop as an explicit state machine
//!
//! One accepted swap drives the cycle
//! {resolve -> activate specials -> apply extras -> settle -> re-detect}
//! until detection finds nothing. The combo counter is 1-based and
//! increments each iteration; points per iteration are
//! `(cleared + extra_cleared) * 10 * combo`.
//!
//! Specials fire in the iteration that creates them and also when a later
//! match removes them from the board; a firing special's own tile is never
//! part of its footprint. There is no iteration cap - the loop runs to its
//! fixed point, matching the reference behavior.
//!
//! [`Cascade`] exposes the phases one transition at a time so a caller can
//! pace animation between steps; [`run_cascade`] drives it to completion
//! with no delay.

use crate::core::{
    activation_cells, apply_extras, find_matches, iteration_points, resolve, settle, Board,
    ClearedCell, CreatedSpecial, MatchGroup, TileGen,
};
use crate::types::{CellSet, Pos, SpecialKind};

/// Phases of the cascade state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadePhase {
    Idle,
    AwaitingMatch,
    Resolving,
    Activating,
    Settling,
}

/// Everything one cascade iteration did.
#[derive(Debug, Clone, Default)]
pub struct CascadeStep {
    /// 1-based cascade iteration index (the score multiplier).
    pub combo: u32,
    /// Tiles removed by match groups.
    pub cleared: Vec<ClearedCell>,
    /// Specials created this iteration (at most one per group).
    pub created_specials: Vec<CreatedSpecial>,
    /// Specials that fired this iteration (created or match-cleared).
    pub activated: Vec<(Pos, SpecialKind)>,
    /// Tiles removed by special footprints, deduplicated across specials.
    pub extra_cleared: Vec<ClearedCell>,
    /// Frozen tiles that lost their flag instead of being removed.
    pub unfrozen: Vec<Pos>,
    /// Cells refilled by gravity.
    pub refilled: Vec<Pos>,
    /// Points for this iteration.
    pub points: u32,
    /// True if a time-freeze special fired this iteration.
    pub freeze_triggered: bool,
}

impl CascadeStep {
    fn new(combo: u32) -> Self {
        Self {
            combo,
            ..Self::default()
        }
    }

    /// Total tiles removed this iteration (match plus extras).
    pub fn removed(&self) -> usize {
        self.cleared.len() + self.extra_cleared.len()
    }
}

/// Ordered per-iteration record of a full cascade.
#[derive(Debug, Clone, Default)]
pub struct CascadeLog {
    pub steps: Vec<CascadeStep>,
    pub total_points: u32,
}

impl CascadeLog {
    /// All tiles removed across the cascade, match and extras alike.
    pub fn cleared_cells(&self) -> impl Iterator<Item = &ClearedCell> {
        self.steps
            .iter()
            .flat_map(|s| s.cleared.iter().chain(s.extra_cleared.iter()))
    }

    /// All specials created across the cascade.
    pub fn created_specials(&self) -> impl Iterator<Item = &CreatedSpecial> {
        self.steps.iter().flat_map(|s| s.created_specials.iter())
    }

    /// Number of iterations that triggered a time freeze.
    pub fn freeze_triggers(&self) -> u32 {
        self.steps.iter().filter(|s| s.freeze_triggered).count() as u32
    }
}

/// The cascade state machine. Created from the groups an accepted swap
/// produced; advanced one phase at a time until [`Cascade::is_done`].
#[derive(Debug, Clone)]
pub struct Cascade {
    phase: CascadePhase,
    combo: u32,
    pending: Vec<MatchGroup>,
    current: Option<CascadeStep>,
    log: CascadeLog,
}

impl Cascade {
    /// Start a cascade from the initial detection result.
    pub fn begin(groups: Vec<MatchGroup>) -> Self {
        Self {
            phase: CascadePhase::AwaitingMatch,
            combo: 0,
            pending: groups,
            current: None,
            log: CascadeLog::default(),
        }
    }

    pub fn phase(&self) -> CascadePhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == CascadePhase::Idle
    }

    /// Consume the finished cascade, yielding its log.
    pub fn finish(self) -> CascadeLog {
        debug_assert!(self.is_done());
        self.log
    }

    /// Run one phase transition.
    pub fn advance(&mut self, board: &mut Board, gen: &mut TileGen) {
        match self.phase {
            CascadePhase::Idle => {}
            CascadePhase::AwaitingMatch => {
                if self.pending.is_empty() {
                    self.phase = CascadePhase::Idle;
                } else {
                    self.combo += 1;
                    self.current = Some(CascadeStep::new(self.combo));
                    self.phase = CascadePhase::Resolving;
                }
            }
            CascadePhase::Resolving => {
                let outcome = resolve(board, &self.pending, gen);
                let step = self.current.as_mut().expect("step in progress");
                let mut activated: Vec<(Pos, SpecialKind)> = outcome
                    .created
                    .iter()
                    .map(|c| (c.pos, c.special))
                    .collect();
                activated.extend(outcome.cleared_specials);
                step.cleared = outcome.cleared;
                step.created_specials = outcome.created;
                step.unfrozen = outcome.unfrozen;
                step.activated = activated;
                self.pending.clear();
                self.phase = CascadePhase::Activating;
            }
            CascadePhase::Activating => {
                let step = self.current.as_mut().expect("step in progress");
                let mut extras = CellSet::new();
                for &(pos, special) in &step.activated {
                    let activation = activation_cells(pos, special);
                    extras.union(&activation.cells);
                    if activation.freezes_time {
                        step.freeze_triggered = true;
                    }
                }
                let outcome = apply_extras(board, &extras);
                step.extra_cleared = outcome.cleared;
                step.unfrozen.extend(outcome.unfrozen);
                self.phase = CascadePhase::Settling;
            }
            CascadePhase::Settling => {
                let mut step = self.current.take().expect("step in progress");
                step.refilled = settle(board, gen);
                step.points = iteration_points(step.removed(), step.combo);
                self.log.total_points = self.log.total_points.saturating_add(step.points);
                self.log.steps.push(step);
                self.pending = find_matches(board);
                self.phase = CascadePhase::AwaitingMatch;
            }
        }
    }
}

/// Drive a cascade to its fixed point (no matches remain) with no pacing.
pub fn run_cascade(board: &mut Board, groups: Vec<MatchGroup>, gen: &mut TileGen) -> CascadeLog {
    let mut cascade = Cascade::begin(groups);
    while !cascade.is_done() {
        cascade.advance(board, gen);
    }
    cascade.finish()
}
