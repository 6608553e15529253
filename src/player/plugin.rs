//! Player plugin - movement, camera, and player-related systems.

use bevy::prelude::*;

use super::movement;
use crate::controller::PlayerSettings;

/// Player plugin - loads settings and drives every player controller.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // Settings must exist before anything spawns a player
        app.insert_resource(PlayerSettings::load());

        movement::setup_movement_systems(app);
    }
}
