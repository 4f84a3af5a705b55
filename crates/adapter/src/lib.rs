//! Adapter module - presentation-facing observations with JSON encoding
//!
//! Bridges the engine to renderers, replay tools and external agents
//! without exposing engine internals: everything here is a plain data
//! snapshot built from `&GameSession` / `&CascadeLog` references and
//! serialized as line-friendly JSON.
//!
//! # Message Types
//!
//! - **observation**: full game-state snapshot (board, score, budgets,
//!   goal standing)
//! - **swap_report**: one move's outcome - acceptance plus the
//!   per-iteration cascade record a renderer can animate step by step
//!
//! Field names are stable snake_case; sprite identifiers come from
//! [`sprite_key`] so a renderer can resolve textures with a flat lookup
//! table and no game logic.

pub mod sprite;
pub mod view;

pub use garden_crush_core as core;
pub use garden_crush_engine as engine;
pub use garden_crush_types as types;

pub use sprite::sprite_key;
pub use view::{
    encode, encode_pretty, BoardView, CascadeStepView, CreatedSpecialView, Observation,
    SwapReport, TileView,
};
