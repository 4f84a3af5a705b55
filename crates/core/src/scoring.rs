//! Scoring - reference tuning constants turned into points
//!
//! Compatibility note: the per-iteration formula is `removed * 10 * combo`
//! with a 1-based combo counter and linear scaling. Preserved exactly for
//! compatibility testing against the reference behavior.

use crate::types::{MOVE_BONUS_POINTS, POINTS_PER_TILE, SPECIAL_BONUS_POINTS};

/// Points for one cascade iteration.
/// `removed` counts match-cleared plus special-extra cells; unfrozen cells
/// score nothing. `combo` is the 1-based cascade iteration index.
pub fn iteration_points(removed: usize, combo: u32) -> u32 {
    (removed as u32)
        .saturating_mul(POINTS_PER_TILE)
        .saturating_mul(combo)
}

/// Flat bonus per special tile created, tallied by the scoring consumer
/// outside the cascade loop.
pub fn special_bonus(specials_created: usize) -> u32 {
    (specials_created as u32).saturating_mul(SPECIAL_BONUS_POINTS)
}

/// Level-completion bonus for unspent moves.
pub fn remaining_move_bonus(moves_left: u32) -> u32 {
    moves_left.saturating_mul(MOVE_BONUS_POINTS)
}
