//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Marker component for the player's camera.
#[derive(Component)]
pub struct PlayerCamera;

/// Explicit link from a body to the camera that receives its pitch.
///
/// Set when the player is spawned. If the camera is missing the controller
/// still tracks pitch, it just has nowhere to show it.
#[derive(Component, Default)]
pub struct CameraLink {
    pub camera: Option<Entity>,
}

/// Result of the last ground probe.
#[derive(Component, Default)]
pub struct GroundSensor {
    pub is_grounded: bool,
    has_probed: bool,
}

impl GroundSensor {
    /// Store a probe result. Returns true when the body just touched down.
    ///
    /// The first probe only seeds the sensor, so a body spawned on the floor
    /// does not count as landing.
    pub fn record(&mut self, is_grounded: bool) -> bool {
        let landed = self.has_probed && is_grounded && !self.is_grounded;
        self.is_grounded = is_grounded;
        self.has_probed = true;
        landed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_probe_on_the_floor_is_not_a_landing() {
        let mut sensor = GroundSensor::default();
        assert!(!sensor.record(true));
        assert!(sensor.is_grounded);
    }

    #[test]
    fn landing_only_on_airborne_to_grounded() {
        let mut sensor = GroundSensor::default();
        assert!(!sensor.record(false));
        assert!(sensor.record(true));
        assert!(!sensor.record(true));
        assert!(!sensor.record(false));
        assert!(sensor.record(true));
    }
}
