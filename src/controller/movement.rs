//! Per-frame movement and look integration.
//!
//! The controller turns one frame of input into a [`MotionCommand`]. It never
//! touches transforms, physics or input devices: the caller feeds it an
//! [`InputSample`] and applies whatever comes back.

use bevy::prelude::*;

use super::config::ControllerConfig;

/// Camera pitch is held within `[-PITCH_LIMIT, PITCH_LIMIT]` degrees.
pub const PITCH_LIMIT: f32 = 90.0;

/// The body's current local frame, used to turn axis input into a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyAxes {
    pub right: Vec3,
    pub forward: Vec3,
}

impl Default for BodyAxes {
    fn default() -> Self {
        Self {
            right: Vec3::X,
            forward: Vec3::NEG_Z,
        }
    }
}

impl BodyAxes {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            right: *transform.right(),
            forward: *transform.forward(),
        }
    }
}

/// One frame of input, already resolved from devices and physics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Strafe axis, typically in [-1, 1] (positive = right)
    pub horizontal: f32,
    /// Forward axis, typically in [-1, 1] (positive = forward)
    pub forward: f32,
    /// Mouse movement this frame (x right, y up)
    pub mouse_delta: Vec2,
    /// Jump button went down this frame
    pub jump_pressed: bool,
    /// Physics reports the body touching ground
    pub is_grounded: bool,
    pub axes: BodyAxes,
}

/// What the host should do with the body and camera this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionCommand {
    /// World-space displacement for this frame
    pub displacement: Vec3,
    /// Rotation about the vertical axis in degrees (positive = turn right)
    pub yaw_delta: f32,
    /// Absolute camera pitch in degrees (positive = look down)
    pub camera_pitch: f32,
}

/// First-person movement controller owned by a single body.
///
/// Only `vertical_velocity` and `camera_pitch` change between frames. Yaw is
/// never stored; it is handed back as a delta for the body's own rotation.
#[derive(Component, Debug, Clone)]
pub struct MovementController {
    config: ControllerConfig,
    vertical_velocity: f32,
    camera_pitch: f32,
}

impl MovementController {
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_state(config, 0.0, 0.0)
    }

    /// Create a controller that resumes from a known kinematic state.
    pub fn with_state(config: ControllerConfig, vertical_velocity: f32, camera_pitch: f32) -> Self {
        Self {
            config,
            vertical_velocity,
            camera_pitch: camera_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn camera_pitch(&self) -> f32 {
        self.camera_pitch
    }

    /// Swap in new tuning values. Velocity and pitch carry over.
    pub fn reconfigure(&mut self, config: ControllerConfig) {
        self.config = config;
    }

    /// Integrate one frame.
    ///
    /// Diagonal input is not normalized, so moving on both axes is up to
    /// `sqrt(2)` times faster than a single axis. Non-finite input or `dt`
    /// propagates into the result unchanged.
    pub fn advance(&mut self, input: &InputSample, dt: f32) -> MotionCommand {
        let config = &self.config;

        let mut motion = (input.axes.right * input.horizontal
            + input.axes.forward * input.forward)
            * config.move_speed;

        if input.is_grounded {
            self.vertical_velocity = if input.jump_pressed {
                config.jump_speed
            } else {
                config.grounded_bias
            };
        } else {
            self.vertical_velocity += config.gravity * dt;
        }

        motion.y = self.vertical_velocity;

        let look = input.mouse_delta * config.mouse_sensitivity * dt;
        self.camera_pitch = (self.camera_pitch - look.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        MotionCommand {
            displacement: motion * dt,
            yaw_delta: look.x,
            camera_pitch: self.camera_pitch,
        }
    }
}
