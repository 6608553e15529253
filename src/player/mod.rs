//! Player module - host side of the controller: input, ground probing,
//! camera, and applying motion.

mod components;
mod input;
mod movement;
mod plugin;

pub use components::*;
pub use input::{key_axis, look_axis, sample_input, InputBindings};
pub use movement::{apply_body_motion, apply_camera_pitch, spawn_player};
pub use plugin::PlayerPlugin;
