//! Engine crate - cascade coordination, session state, goal evaluation
//!
//! Ties the core algorithms into the move-level contract a presentation
//! layer consumes: a [`GameSession`] accepts swap requests and returns a
//! [`CascadeLog`] describing everything that happened, with no ambient
//! globals and no hidden event routing. A caller can replay an entire level
//! deterministically from a seed and a move list.
//!
//! - [`cascade`]: the {resolve -> activate -> settle -> re-detect} loop
//! - [`session`]: explicit engine-state value owned by the caller
//! - [`goal`]: level definitions and win/lose evaluation (the external
//!   collaborator contract - it consumes engine counters, the engine never
//!   reads it)

pub mod cascade;
pub mod goal;
pub mod session;

pub use garden_crush_core as core;
pub use garden_crush_types as types;

pub use cascade::{run_cascade, Cascade, CascadeLog, CascadePhase, CascadeStep};
pub use goal::{evaluate, GoalKind, LevelOutcome, LevelSpec, Progress};
pub use session::{GameSession, SwapOutcome};
