//! First-person character controller for Bevy.
//!
//! Turns keyboard axes, mouse motion and a jump button into movement and
//! camera orientation for a kinematic capsule, once per frame.
//!
//! # Architecture
//!
//! - **Controller**: the pure per-frame integration (gravity, grounding,
//!   jump, clamped look) and its tuning data
//! - **Player**: host wiring - input sampling, ground probing, applying
//!   motion to the body and camera
//! - **Core**: game states and events
//! - **World**: a demo arena to move around in

pub mod controller;
pub mod core;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Adds the controller and its host systems, without the demo world.
pub struct FirstPersonPlugin;

impl Plugin for FirstPersonPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin);
    }
}
