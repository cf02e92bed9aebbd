//! Word tiles (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so callers can write
//! `word_tiles::{core, engine, types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use word_tiles_core as core;
pub use word_tiles_engine as engine;
pub use word_tiles_types as types;
