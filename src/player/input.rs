//! Resolves keyboard and mouse state into an [`InputSample`].

use bevy::prelude::*;

use crate::controller::{BodyAxes, InputSample, LookSettings};

/// Key bindings for movement.
#[derive(Resource, Clone)]
pub struct InputBindings {
    pub forward: Vec<KeyCode>,
    pub back: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            back: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            jump: vec![KeyCode::Space],
        }
    }
}

/// Digital axis in {-1, 0, 1}. Holding both directions cancels out.
pub fn key_axis(keyboard: &ButtonInput<KeyCode>, positive: &[KeyCode], negative: &[KeyCode]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(positive.iter().copied()) {
        value += 1.0;
    }
    if keyboard.any_pressed(negative.iter().copied()) {
        value -= 1.0;
    }
    value
}

/// Turn accumulated mouse motion (screen space, y down) into a look axis (y up).
pub fn look_axis(motion: Vec2, look: &LookSettings) -> Vec2 {
    let y_invert = if look.invert_y { -1.0 } else { 1.0 };
    Vec2::new(motion.x, -motion.y * y_invert) * look.mouse_axis_scale
}

/// Build this frame's sample for one body.
pub fn sample_input(
    keyboard: &ButtonInput<KeyCode>,
    bindings: &InputBindings,
    mouse_motion: Vec2,
    look: &LookSettings,
    is_grounded: bool,
    axes: BodyAxes,
) -> InputSample {
    InputSample {
        horizontal: key_axis(keyboard, &bindings.right, &bindings.left),
        forward: key_axis(keyboard, &bindings.forward, &bindings.back),
        mouse_delta: look_axis(mouse_motion, look),
        jump_pressed: keyboard.any_just_pressed(bindings.jump.iter().copied()),
        is_grounded,
        axes,
    }
}
