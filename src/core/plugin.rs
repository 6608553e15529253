//! Core plugin that sets up game states, events, and host-level input.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (InGame, Paused)
/// - Global events (ReloadPlayerSettings, PlayerLanded)
/// - Pause and settings reload hotkeys
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()

            .add_event::<ReloadPlayerSettings>()
            .add_event::<PlayerLanded>()

            // Pause/unpause with Escape key
            .add_systems(Update, handle_pause_input)

            // F5 re-reads tuning from disk
            .add_systems(Update, handle_reload_input);
    }
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            GameState::InGame => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::InGame),
        }
    }
}

fn handle_reload_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut reload_events: EventWriter<ReloadPlayerSettings>,
) {
    if keyboard.just_pressed(KeyCode::F5) {
        reload_events.send(ReloadPlayerSettings);
    }
}
