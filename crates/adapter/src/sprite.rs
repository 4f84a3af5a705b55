//! Sprite-key resolution for renderers
//!
//! A sprite key is a stable flat identifier a renderer resolves through a
//! lookup table: the lowercase kind stem for ordinary tiles, with a short
//! power suffix when the tile is special. Frozen state is not part of the
//! key - renderers draw the ice overlay from [`TileView::frozen`].
//!
//! [`TileView::frozen`]: crate::view::TileView

use crate::types::{SpecialKind, Tile};

fn special_suffix(special: SpecialKind) -> &'static str {
    match special {
        SpecialKind::RowClear => "row",
        SpecialKind::ColumnClear => "col",
        SpecialKind::CrossClear => "cross",
        SpecialKind::TimeFreeze => "stasis",
        SpecialKind::AreaClear => "area",
    }
}

/// Sprite lookup key for a tile, e.g. `"rose"` or `"rose_row"`.
pub fn sprite_key(tile: &Tile) -> String {
    match tile.special {
        Some(special) => format!("{}_{}", tile.kind.as_str(), special_suffix(special)),
        None => tile.kind.as_str().to_string(),
    }
}
