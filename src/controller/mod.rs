//! Controller module - the per-frame movement and look integration.
//!
//! Everything here is plain data and arithmetic. Reading devices, querying
//! physics and moving transforms is done by the `player` module.

mod config;
mod error;
mod movement;

pub use config::{ControllerConfig, GroundProbeSettings, LookSettings, PlayerSettings, SETTINGS_PATH};
pub use error::ConfigError;
pub use movement::{BodyAxes, InputSample, MotionCommand, MovementController, PITCH_LIMIT};
