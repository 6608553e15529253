//! Global events used for cross-system communication.

use bevy::prelude::*;

/// Request to re-read player settings from disk and push them into every
/// controller. Kinematic state (fall speed, pitch) is kept.
#[derive(Event, Default)]
pub struct ReloadPlayerSettings;

/// Sent when a body touches ground after being airborne.
#[derive(Event)]
pub struct PlayerLanded {
    /// The body that landed
    pub entity: Entity,
    /// Vertical velocity on the frame before contact (negative = falling)
    pub impact_speed: f32,
}
