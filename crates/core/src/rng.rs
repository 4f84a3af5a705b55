//! RNG module - deterministic tile generation
//!
//! A simple seeded LCG drives every random decision in the engine: board
//! generation, refill tiles, frozen-cell placement, and the cosmetic pick of
//! which group member becomes a special. One RNG stream per session means a
//! whole level replay is reproducible from a single u32 seed.

use crate::types::{Tile, TileKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Random tile generator wrapping one [`SimpleRng`] stream.
#[derive(Debug, Clone)]
pub struct TileGen {
    rng: SimpleRng,
}

impl TileGen {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw a uniformly random base kind
    pub fn kind(&mut self) -> TileKind {
        let idx = self.rng.next_range(TileKind::ALL.len() as u32) as usize;
        TileKind::ALL[idx]
    }

    /// Draw an ordinary tile: random kind, no special, not frozen
    pub fn tile(&mut self) -> Tile {
        Tile::plain(self.kind())
    }

    /// Pick an index in `[0, len)`; `len` must be non-zero
    pub fn pick(&mut self, len: usize) -> usize {
        self.rng.next_range(len as u32) as usize
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for TileGen {
    fn default() -> Self {
        Self::new(1)
    }
}
