//! Core match-3 logic - pure, deterministic, and testable
//!
//! This crate contains the board model and the algorithms that act on it.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical boards and cascades
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs headless in any environment
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 tile grid with match-free generation and swapping
//! - [`rng`]: seeded LCG and random tile generation
//! - [`matcher`]: run detection and connected-group merging
//! - [`resolver`]: match clearing, frozen-tile handling, special creation
//! - [`specials`]: special-tile activation footprints and extra clears
//! - [`gravity`]: per-column compaction and refill
//! - [`scoring`]: tuning constants turned into points
//!
//! # Game Rules
//!
//! - Straight runs of 3+ equal kinds match; touching runs of one kind merge
//!   into a single group (L/T/plus shapes)
//! - Groups of 4+ promote exactly one member tile into a special tile
//! - Frozen tiles absorb their first clear by unfreezing
//! - Score per cascade iteration is `removed * 10 * combo`

pub mod board;
pub mod gravity;
pub mod matcher;
pub mod resolver;
pub mod rng;
pub mod scoring;
pub mod specials;

pub use garden_crush_types as types;

// Re-export commonly used items for convenience
pub use board::Board;
pub use gravity::settle;
pub use matcher::{find_matches, MatchGroup};
pub use resolver::{resolve, ClearedCell, CreatedSpecial, ResolveOutcome};
pub use rng::{SimpleRng, TileGen};
pub use scoring::{iteration_points, remaining_move_bonus, special_bonus};
pub use specials::{activate, activation_cells, apply_extras, Activation, ExtraOutcome};
