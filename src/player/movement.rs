//! First-person host wiring: ground probing, driving the controller, and
//! applying its commands to the body and camera.

use bevy::prelude::*;
use bevy::input::mouse::MouseMotion;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::input::{sample_input, InputBindings};
use crate::controller::{BodyAxes, MotionCommand, MovementController, PlayerSettings};
use crate::core::{GameState, PlayerLanded, ReloadPlayerSettings};

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app
        .init_resource::<InputBindings>()
        .add_systems(OnEnter(GameState::InGame), grab_cursor)
        .add_systems(OnExit(GameState::InGame), release_cursor)
        .add_systems(
            Update,
            (
                detect_ground,
                drive_controllers,
            )
            .chain()
            .run_if(in_state(GameState::InGame))
        )
        .add_systems(Update, (reload_settings, log_landings));
}

/// Grab and hide cursor when entering gameplay.
fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when leaving gameplay.
fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Probe for ground under each player body.
///
/// Uses a short ray from just above the capsule bottom. Without a physics
/// context the character controller's own output is used, and without that
/// the body counts as airborne.
pub fn detect_ground(
    settings: Res<PlayerSettings>,
    rapier_context: Query<&RapierContext>,
    mut landed_events: EventWriter<PlayerLanded>,
    mut player_query: Query<(
        Entity,
        &Transform,
        &MovementController,
        &mut GroundSensor,
        Option<&KinematicCharacterControllerOutput>,
    ), With<Player>>,
) {
    let context = rapier_context.get_single().ok();
    let probe = settings.probe;

    for (entity, transform, controller, mut sensor, output) in player_query.iter_mut() {
        let is_grounded = if let Some(context) = context {
            let ray_origin = transform.translation - Vec3::Y * probe.ray_offset;
            context.cast_ray(
                ray_origin,
                Vec3::NEG_Y,
                probe.max_distance,
                true,
                QueryFilter::default().exclude_collider(entity),
            ).is_some()
        } else {
            output.is_some_and(|output| output.grounded)
        };

        if sensor.record(is_grounded) {
            landed_events.send(PlayerLanded {
                entity,
                impact_speed: controller.vertical_velocity(),
            });
        }
    }
}

/// Advance every player controller by one frame and apply the result.
pub fn drive_controllers(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    time: Res<Time>,
    bindings: Res<InputBindings>,
    settings: Res<PlayerSettings>,
    mut player_query: Query<(
        &mut Transform,
        &mut MovementController,
        &mut KinematicCharacterController,
        &GroundSensor,
        &CameraLink,
    ), With<Player>>,
    mut camera_query: Query<&mut Transform, (With<PlayerCamera>, Without<Player>)>,
) {
    // Accumulate mouse movement
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }

    let dt = time.delta_secs();

    for (mut transform, mut controller, mut character, sensor, link) in player_query.iter_mut() {
        let input = sample_input(
            &keyboard,
            &bindings,
            delta,
            &settings.look,
            sensor.is_grounded,
            BodyAxes::from_transform(&transform),
        );

        let command = controller.advance(&input, dt);
        apply_body_motion(&mut transform, &mut character, &command);

        let camera_transform = link.camera.and_then(|camera| camera_query.get_mut(camera).ok());
        match camera_transform {
            Some(mut camera_transform) => apply_camera_pitch(&mut camera_transform, &command),
            None => warn_once!("Player camera link is missing; pitch is not applied"),
        }
    }
}

/// Hand displacement to the character controller and turn the body.
///
/// Positive yaw turns right, which is a negative rotation about +Y.
pub fn apply_body_motion(
    transform: &mut Transform,
    character: &mut KinematicCharacterController,
    command: &MotionCommand,
) {
    character.translation = Some(command.displacement);
    transform.rotate_y(-command.yaw_delta.to_radians());
}

/// Positive pitch looks down, which is a negative rotation about +X.
pub fn apply_camera_pitch(camera_transform: &mut Transform, command: &MotionCommand) {
    camera_transform.rotation = Quat::from_rotation_x(-command.camera_pitch.to_radians());
}

/// Re-read settings on request and push them into live controllers.
fn reload_settings(
    mut reload_events: EventReader<ReloadPlayerSettings>,
    mut settings: ResMut<PlayerSettings>,
    mut controllers: Query<&mut MovementController>,
) {
    if reload_events.read().count() == 0 {
        return;
    }

    match PlayerSettings::load_from(crate::controller::SETTINGS_PATH) {
        Ok(reloaded) => {
            info!("Reloaded player settings");
            for mut controller in controllers.iter_mut() {
                controller.reconfigure(reloaded.controller);
            }
            *settings = reloaded;
        }
        Err(e) => error!("{}. Keeping current settings.", e),
    }
}

fn log_landings(mut landed_events: EventReader<PlayerLanded>) {
    for event in landed_events.read() {
        debug!("{:?} landed at {:.2} u/s", event.entity, event.impact_speed);
    }
}

/// Spawn the player body with its camera and wire the camera link.
pub fn spawn_player(commands: &mut Commands, position: Vec3, settings: &PlayerSettings) -> Entity {
    let player = commands
        .spawn((
            Player,
            MovementController::new(settings.controller),
            GroundSensor::default(),
            Transform::from_translation(position),
            Visibility::default(),
            // Rapier physics components
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.3),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                autostep: Some(CharacterAutostep {
                    max_height: CharacterLength::Absolute(0.4),
                    min_width: CharacterLength::Absolute(0.3),
                    include_dynamic_bodies: false,
                }),
                max_slope_climb_angle: 45_f32.to_radians(),
                min_slope_slide_angle: 30_f32.to_radians(),
                // Snap to ground when going down slopes/stairs
                snap_to_ground: Some(CharacterLength::Absolute(0.5)),
                ..default()
            },
        ))
        .id();

    // Camera at eye level relative to the capsule center
    let camera = commands
        .spawn((
            Camera3d::default(),
            PlayerCamera,
            Transform::from_xyz(0.0, 0.4, 0.0),
        ))
        .set_parent(player)
        .id();

    commands.entity(player).insert(CameraLink { camera: Some(camera) });

    player
}
