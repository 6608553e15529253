//! First-person controller demo.
//!
//! Controls:
//! - WASD / arrow keys: Move
//! - Mouse: Look around
//! - Space: Jump
//! - F5: Reload player settings
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "First-Person Controller".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        .add_plugins(first_person_controller::FirstPersonPlugin)
        .add_plugins(first_person_controller::world::WorldPlugin)

        .run();
}
