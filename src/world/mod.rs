//! World module - a small test arena to walk, jump and fall in.

mod arena;
mod plugin;

pub use arena::{ArenaBlock, ArenaGeometry, ARENA_BLOCKS, PLAYER_START};
pub use plugin::{setup_arena, WorldPlugin};
