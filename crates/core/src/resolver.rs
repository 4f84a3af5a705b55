//! Match resolution - clearing, frozen handling, special creation
//!
//! Consumes the groups produced by the matcher. A group of 4+ cells promotes
//! exactly one of its members into a special tile (the member is chosen at
//! random - a cosmetic choice with no gameplay meaning); the promoted tile
//! stays on the board. Frozen members absorb the clear by unfreezing.
//! Everything else is removed.

use crate::board::Board;
use crate::matcher::MatchGroup;
use crate::rng::TileGen;
use crate::types::{Pos, SpecialKind, TileKind};

/// Minimum group size that qualifies for special creation.
pub const SPECIAL_THRESHOLD: usize = 4;

/// A removed tile: position plus the kind it had, for collection counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedCell {
    pub pos: Pos,
    pub kind: TileKind,
}

/// A tile promoted into a special during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedSpecial {
    pub pos: Pos,
    pub special: SpecialKind,
    pub kind: TileKind,
}

/// Everything a resolution pass did to the board.
#[derive(Debug, Clone, Default)]
pub struct ResolveOutcome {
    /// Tiles removed from the board.
    pub cleared: Vec<ClearedCell>,
    /// Specials created (at most one per group).
    pub created: Vec<CreatedSpecial>,
    /// Special tiles that were removed as part of a group and therefore
    /// still need to fire their power.
    pub cleared_specials: Vec<(Pos, SpecialKind)>,
    /// Frozen tiles that lost their frozen flag instead of being removed.
    pub unfrozen: Vec<Pos>,
}

impl ResolveOutcome {
    fn default_with_capacity(groups: &[MatchGroup]) -> Self {
        let cells: usize = groups.iter().map(|g| g.len()).sum();
        Self {
            cleared: Vec::with_capacity(cells),
            ..Self::default()
        }
    }
}

/// Clear the given match groups, creating specials for qualifying groups.
///
/// For each group of [`SPECIAL_THRESHOLD`]+ cells, one randomly picked member
/// is retyped to the group kind's [`TileKind::special_reward`] and kept on
/// the board (its frozen flag, if any, is also broken). Every other member:
/// frozen tiles unfreeze, ordinary tiles are removed. Groups of 3 clear
/// fully with no special.
pub fn resolve(board: &mut Board, groups: &[MatchGroup], gen: &mut TileGen) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default_with_capacity(groups);

    for group in groups {
        let promoted = if group.len() >= SPECIAL_THRESHOLD {
            Some(group.cells[gen.pick(group.len())])
        } else {
            None
        };

        for &pos in &group.cells {
            let Some(mut tile) = board.tile(pos) else {
                continue;
            };

            if promoted == Some(pos) {
                tile.special = Some(group.kind.special_reward());
                tile.frozen = false;
                board.set(pos, Some(tile));
                outcome.created.push(CreatedSpecial {
                    pos,
                    special: group.kind.special_reward(),
                    kind: group.kind,
                });
            } else if tile.frozen {
                tile.frozen = false;
                board.set(pos, Some(tile));
                outcome.unfrozen.push(pos);
            } else {
                if let Some(special) = tile.special {
                    outcome.cleared_specials.push((pos, special));
                }
                board.set(pos, None);
                outcome.cleared.push(ClearedCell {
                    pos,
                    kind: tile.kind,
                });
            }
        }
    }

    outcome
}
