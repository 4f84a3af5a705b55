//! Observation DTOs and JSON encoding
//!
//! Snapshots are captured from engine references and own all their data, so
//! a caller can hold or ship them after the session moves on. Positions are
//! `[row, col]` pairs; kinds and specials travel as their lowercase string
//! identifiers, never as enum discriminants.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::Board;
use crate::engine::{CascadeStep, GameSession, LevelOutcome, SwapOutcome};
use crate::sprite::sprite_key;
use crate::types::Pos;

fn pair(pos: Pos) -> [i8; 2] {
    [pos.row, pos.col]
}

/// One tile as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub sprite: String,
    pub special: Option<String>,
    pub frozen: bool,
}

/// Full board snapshot, row-major, `None` for mid-cascade holes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: u8,
    pub cols: u8,
    pub cells: Vec<Option<TileView>>,
}

impl BoardView {
    pub fn capture(board: &Board) -> Self {
        let cells = board
            .cells()
            .iter()
            .map(|cell| {
                cell.map(|tile| TileView {
                    sprite: sprite_key(&tile),
                    special: tile.special.map(|s| s.as_str().to_string()),
                    frozen: tile.frozen,
                })
            })
            .collect();
        Self {
            rows: board.rows(),
            cols: board.cols(),
            cells,
        }
    }
}

/// A special created during a cascade step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedSpecialView {
    pub pos: [i8; 2],
    pub special: String,
    pub kind: String,
}

/// One cascade iteration, ready to animate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeStepView {
    pub combo: u32,
    pub cleared: Vec<[i8; 2]>,
    pub extra_cleared: Vec<[i8; 2]>,
    pub created_specials: Vec<CreatedSpecialView>,
    pub unfrozen: Vec<[i8; 2]>,
    pub refilled: Vec<[i8; 2]>,
    pub points: u32,
    pub freeze_triggered: bool,
}

impl CascadeStepView {
    fn capture(step: &CascadeStep) -> Self {
        Self {
            combo: step.combo,
            cleared: step.cleared.iter().map(|c| pair(c.pos)).collect(),
            extra_cleared: step.extra_cleared.iter().map(|c| pair(c.pos)).collect(),
            created_specials: step
                .created_specials
                .iter()
                .map(|sp| CreatedSpecialView {
                    pos: pair(sp.pos),
                    special: sp.special.as_str().to_string(),
                    kind: sp.kind.as_str().to_string(),
                })
                .collect(),
            unfrozen: step.unfrozen.iter().map(|&p| pair(p)).collect(),
            refilled: step.refilled.iter().map(|&p| pair(p)).collect(),
            points: step.points,
            freeze_triggered: step.freeze_triggered,
        }
    }
}

/// One move's outcome: acceptance plus the full cascade record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReport {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub accepted: bool,
    pub steps: Vec<CascadeStepView>,
    pub total_points: u32,
}

impl SwapReport {
    pub fn capture(outcome: &SwapOutcome) -> Self {
        Self {
            msg_type: "swap_report".to_string(),
            accepted: outcome.accepted,
            steps: outcome.log.steps.iter().map(CascadeStepView::capture).collect(),
            total_points: outcome.log.total_points,
        }
    }
}

fn outcome_str(outcome: LevelOutcome) -> &'static str {
    match outcome {
        LevelOutcome::InProgress => "in_progress",
        LevelOutcome::Won => "won",
        LevelOutcome::Lost => "lost",
    }
}

/// Full game-state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub board: BoardView,
    pub score: u32,
    pub moves_left: Option<u32>,
    pub time_left: Option<u32>,
    pub freeze_left: u32,
    pub frozen_remaining: u32,
    pub outcome: String,
}

impl Observation {
    pub fn capture(session: &GameSession) -> Self {
        let progress = session.progress();
        Self {
            msg_type: "observation".to_string(),
            board: BoardView::capture(session.board()),
            score: progress.score,
            moves_left: progress.moves_left,
            time_left: progress.time_left,
            freeze_left: progress.freeze_left,
            frozen_remaining: progress.frozen_remaining,
            outcome: outcome_str(session.outcome()).to_string(),
        }
    }
}

/// Encode any view as compact single-line JSON.
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode any view as indented JSON, for logs and fixtures.
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
