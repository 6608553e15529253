//! Controller tuning loaded from an external RON file.
//!
//! Allows tweaking movement and look parameters without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

use super::error::ConfigError;

/// Default location of the player settings file.
pub const SETTINGS_PATH: &str = "assets/data/player/settings.ron";

/// Tuning values consumed by [`MovementController`](super::MovementController).
///
/// Out-of-range values are accepted as-is; a negative speed simply moves the
/// body backwards.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Horizontal speed in units per second
    pub move_speed: f32,
    /// Vertical speed applied on the jump frame
    pub jump_speed: f32,
    /// Vertical acceleration while airborne (negative = down)
    pub gravity: f32,
    /// Degrees of rotation per unit of mouse axis per second
    pub mouse_sensitivity: f32,
    /// Vertical speed held while grounded, keeps the body pressed to the floor
    pub grounded_bias: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_speed: 8.0,
            gravity: -9.81,
            mouse_sensitivity: 100.0,
            grounded_bias: -0.5,
        }
    }
}

/// How raw mouse motion becomes a look axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LookSettings {
    /// Multiplier from mouse counts to axis units
    pub mouse_axis_scale: f32,
    /// Invert Y-axis for mouse look
    pub invert_y: bool,
}

impl Default for LookSettings {
    fn default() -> Self {
        Self {
            mouse_axis_scale: 0.1,
            invert_y: false,
        }
    }
}

/// Ground ray cast, relative to the body's origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GroundProbeSettings {
    /// Distance below the origin where the ray starts
    pub ray_offset: f32,
    /// Length of the ray
    pub max_distance: f32,
}

impl Default for GroundProbeSettings {
    fn default() -> Self {
        // Player capsule is capsule_y(0.5, 0.3), so bottom is 0.8 below center
        Self {
            ray_offset: 0.75,
            max_distance: 0.15,
        }
    }
}

/// Everything the player needs from `assets/data/player/settings.ron`.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub controller: ControllerConfig,
    pub look: LookSettings,
    pub probe: GroundProbeSettings,
}

impl PlayerSettings {
    /// Parse settings from RON text. `origin` is only used in error messages.
    pub fn from_ron_str(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            details: e.to_string(),
        })
    }

    /// Read and parse a settings file.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound(path.to_string()),
            _ => ConfigError::ReadError {
                path: path.to_string(),
                details: e.to_string(),
            },
        })?;
        Self::from_ron_str(&contents, path)
    }

    /// Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from(SETTINGS_PATH) {
            Ok(settings) => {
                info!("Loaded player settings from {}", SETTINGS_PATH);
                settings
            }
            Err(e @ ConfigError::ParseError { .. }) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning() {
        let config = ControllerConfig::default();
        assert_eq!(config.move_speed, 5.0);
        assert_eq!(config.jump_speed, 8.0);
        assert_eq!(config.gravity, -9.81);
        assert_eq!(config.mouse_sensitivity, 100.0);
        assert_eq!(config.grounded_bias, -0.5);
    }

    #[test]
    fn parses_full_settings() {
        let text = r#"
            (
                controller: (
                    move_speed: 7.5,
                    jump_speed: 4.0,
                    gravity: -20.0,
                    mouse_sensitivity: 50.0,
                    grounded_bias: -1.0,
                ),
                look: (mouse_axis_scale: 0.2, invert_y: true),
                probe: (ray_offset: 0.5, max_distance: 0.3),
            )
        "#;

        let settings = PlayerSettings::from_ron_str(text, "inline").unwrap();

        assert_eq!(settings.controller.move_speed, 7.5);
        assert_eq!(settings.controller.gravity, -20.0);
        assert_eq!(settings.controller.grounded_bias, -1.0);
        assert!(settings.look.invert_y);
        assert_eq!(settings.probe.max_distance, 0.3);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = PlayerSettings::from_ron_str("(controller: (jump_speed: 12.0))", "inline").unwrap();

        assert_eq!(settings.controller.jump_speed, 12.0);
        assert_eq!(settings.controller.move_speed, 5.0);
        assert_eq!(settings.look, LookSettings::default());
        assert_eq!(settings.probe, GroundProbeSettings::default());
    }

    #[test]
    fn parse_errors_name_the_source() {
        let err = PlayerSettings::from_ron_str("(controller: (move_speed: fast))", "broken.ron").unwrap_err();

        assert!(matches!(&err, ConfigError::ParseError { path, .. } if path == "broken.ron"));
        assert!(err.to_string().starts_with("Parse error in 'broken.ron'"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = PlayerSettings::load_from("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(path) if path == "does/not/exist.ron"));
    }

    #[test]
    fn shipped_settings_file_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data/player/settings.ron");
        let settings = PlayerSettings::load_from(path).unwrap();
        assert_eq!(settings.controller, ControllerConfig::default());
        assert_eq!(settings.look, LookSettings::default());
    }
}
