//! Garden Crush (workspace facade crate).
//!
//! This package keeps a single `garden_crush::{core,engine,adapter,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use garden_crush_adapter as adapter;
pub use garden_crush_core as core;
pub use garden_crush_engine as engine;
pub use garden_crush_types as types;
