//! Game state definitions that control when the controller runs.
//!
//! Movement systems only run in `InGame`. Pausing simply stops the per-frame
//! calls, so controller state is frozen until play resumes.

use bevy::prelude::*;

/// Top-level host state.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Active play - cursor locked, controller advancing every frame
    #[default]
    InGame,
    /// Controller frozen, cursor released
    Paused,
}
