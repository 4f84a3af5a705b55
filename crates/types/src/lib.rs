//! Core types shared across the workspace.
//! This crate contains pure data types with no external dependencies.

/// Board dimensions (rows x columns).
pub const BOARD_ROWS: u8 = 8;
pub const BOARD_COLS: u8 = 8;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);

/// Number of base tile kinds.
pub const TILE_KIND_COUNT: usize = 5;

/// Base points awarded per removed tile, multiplied by the combo counter.
pub const POINTS_PER_TILE: u32 = 10;

/// Bonus points per special tile created, tallied by the scoring consumer.
pub const SPECIAL_BONUS_POINTS: u32 = 25;

/// Bonus points per unspent move on level completion.
pub const MOVE_BONUS_POINTS: u32 = 100;

/// Countdown pause granted by a time-freeze special, in seconds.
pub const TIME_FREEZE_SECS: u32 = 3;

/// Base tile kinds ("colors" for match comparison).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Rose,
    Bonsai,
    Fern,
    Succulent,
    Orchid,
}

impl TileKind {
    /// All kinds in index order.
    pub const ALL: [TileKind; TILE_KIND_COUNT] = [
        TileKind::Rose,
        TileKind::Bonsai,
        TileKind::Fern,
        TileKind::Succulent,
        TileKind::Orchid,
    ];

    /// Stable index of this kind (0-based, matches `ALL` order).
    pub fn index(self) -> usize {
        match self {
            TileKind::Rose => 0,
            TileKind::Bonsai => 1,
            TileKind::Fern => 2,
            TileKind::Succulent => 3,
            TileKind::Orchid => 4,
        }
    }

    /// Parse a kind from its index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase identifier, also the sprite-key stem for renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            TileKind::Rose => "rose",
            TileKind::Bonsai => "bonsai",
            TileKind::Fern => "fern",
            TileKind::Succulent => "succulent",
            TileKind::Orchid => "orchid",
        }
    }

    /// The special kind a 4-or-larger match of this kind is promoted to.
    /// Fixed mapping, one base kind per special kind.
    pub fn special_reward(self) -> SpecialKind {
        match self {
            TileKind::Rose => SpecialKind::RowClear,
            TileKind::Bonsai => SpecialKind::ColumnClear,
            TileKind::Fern => SpecialKind::CrossClear,
            TileKind::Succulent => SpecialKind::TimeFreeze,
            TileKind::Orchid => SpecialKind::AreaClear,
        }
    }
}

/// Special tile powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    RowClear,
    ColumnClear,
    CrossClear,
    TimeFreeze,
    AreaClear,
}

impl SpecialKind {
    /// All special kinds in index order (same order as the base kinds that
    /// produce them).
    pub const ALL: [SpecialKind; TILE_KIND_COUNT] = [
        SpecialKind::RowClear,
        SpecialKind::ColumnClear,
        SpecialKind::CrossClear,
        SpecialKind::TimeFreeze,
        SpecialKind::AreaClear,
    ];

    /// Stable index of this special (0-based, matches `ALL` order).
    pub fn index(self) -> usize {
        match self {
            SpecialKind::RowClear => 0,
            SpecialKind::ColumnClear => 1,
            SpecialKind::CrossClear => 2,
            SpecialKind::TimeFreeze => 3,
            SpecialKind::AreaClear => 4,
        }
    }

    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialKind::RowClear => "row_clear",
            SpecialKind::ColumnClear => "column_clear",
            SpecialKind::CrossClear => "cross_clear",
            SpecialKind::TimeFreeze => "time_freeze",
            SpecialKind::AreaClear => "area_clear",
        }
    }
}

/// A tile occupying a board cell.
///
/// A tile carries at most one special power (`Option`), and may be frozen:
/// the first clear attempt on a frozen tile removes the frozen flag instead
/// of removing the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub kind: TileKind,
    pub special: Option<SpecialKind>,
    pub frozen: bool,
}

impl Tile {
    /// An ordinary tile: no special, not frozen.
    pub fn plain(kind: TileKind) -> Self {
        Self {
            kind,
            special: None,
            frozen: false,
        }
    }

    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }
}

/// Cell on the board (None = empty; empty cells exist only mid-cascade).
pub type Cell = Option<Tile>;

/// Board coordinate (row, col), 0-indexed from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row >= 0
            && self.row < BOARD_ROWS as i8
            && self.col >= 0
            && self.col < BOARD_COLS as i8
    }

    /// Flat row-major index, or None when out of bounds.
    pub fn index(self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some((self.row as usize) * (BOARD_COLS as usize) + (self.col as usize))
    }

    /// Reconstruct a position from a flat row-major index.
    pub fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_COLS as usize) as i8,
            col: (index % BOARD_COLS as usize) as i8,
        }
    }

    /// True iff the Manhattan distance to `other` is exactly 1
    /// (four-directional, no diagonals).
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr + dc == 1
    }

    /// The four orthogonal neighbors, unfiltered for bounds.
    pub fn neighbors(self) -> [Pos; 4] {
        [
            Pos::new(self.row - 1, self.col),
            Pos::new(self.row + 1, self.col),
            Pos::new(self.row, self.col - 1),
            Pos::new(self.row, self.col + 1),
        ]
    }
}

/// Set of board cells backed by a u64 bitmask (one bit per cell).
///
/// Used for match-run marking, flood-fill visitation, and deduplicating
/// special-activation targets so a cell is affected at most once per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellSet {
    bits: u64,
}

impl CellSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Insert a position. Out-of-bounds positions are ignored.
    /// Returns true if the position was newly inserted.
    pub fn insert(&mut self, pos: Pos) -> bool {
        match pos.index() {
            Some(idx) => {
                let mask = 1u64 << idx;
                let new = self.bits & mask == 0;
                self.bits |= mask;
                new
            }
            None => false,
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        match pos.index() {
            Some(idx) => self.bits & (1u64 << idx) != 0,
            None => false,
        }
    }

    pub fn union(&mut self, other: &CellSet) {
        self.bits |= other.bits;
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate positions in flat row-major order.
    pub fn iter(&self) -> CellSetIter {
        CellSetIter { bits: self.bits }
    }
}

/// Iterator over the positions in a [`CellSet`].
#[derive(Debug, Clone)]
pub struct CellSetIter {
    bits: u64,
}

impl Iterator for CellSetIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }
}
