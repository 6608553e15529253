//! Drives the controller through a tiny host loop with a flat floor at y = 0.

use bevy::prelude::*;
use first_person_controller::controller::{
    BodyAxes, ControllerConfig, InputSample, MovementController, PlayerSettings, PITCH_LIMIT,
};
use first_person_controller::player::{apply_camera_pitch, look_axis, sample_input, InputBindings};

const DT: f32 = 1.0 / 60.0;

/// Minimal host: moves a point body and clamps it to the floor.
struct Host {
    controller: MovementController,
    position: Vec3,
    yaw_degrees: f32,
}

impl Host {
    fn new(config: ControllerConfig) -> Self {
        Self {
            controller: MovementController::new(config),
            position: Vec3::ZERO,
            yaw_degrees: 0.0,
        }
    }

    fn grounded(&self) -> bool {
        self.position.y <= 0.0
    }

    fn step(&mut self, mut input: InputSample) {
        input.is_grounded = self.grounded();
        input.axes = BodyAxes::from_transform(&Transform::from_rotation(Quat::from_rotation_y(
            -self.yaw_degrees.to_radians(),
        )));

        let command = self.controller.advance(&input, DT);

        self.position += command.displacement;
        self.position.y = self.position.y.max(0.0);
        self.yaw_degrees += command.yaw_delta;
    }
}

#[test]
fn standing_still_stays_on_the_floor() {
    let mut host = Host::new(ControllerConfig::default());

    for _ in 0..120 {
        host.step(InputSample::default());
        assert!(host.grounded());
        assert_eq!(host.controller.vertical_velocity(), -0.5);
    }

    assert_eq!(host.position, Vec3::ZERO);
}

#[test]
fn jump_leaves_the_floor_and_lands_again() {
    let mut host = Host::new(ControllerConfig::default());

    host.step(InputSample {
        jump_pressed: true,
        ..default()
    });
    assert!(!host.grounded());
    assert_eq!(host.controller.vertical_velocity(), 8.0);

    let mut airborne_frames = 0;
    while !host.grounded() {
        host.step(InputSample::default());
        airborne_frames += 1;
        assert!(airborne_frames < 200, "never came back down");
    }

    // 2 * v / g is about 1.63 s
    let airtime = airborne_frames as f32 * DT;
    assert!((airtime - 2.0 * 8.0 / 9.81).abs() < 0.1);

    host.step(InputSample::default());
    assert_eq!(host.controller.vertical_velocity(), -0.5);
}

#[test]
fn holding_jump_does_not_bunny_hop_mid_air() {
    let mut host = Host::new(ControllerConfig::default());
    let holding = InputSample {
        jump_pressed: true,
        ..default()
    };

    host.step(holding);
    let after_takeoff = host.controller.vertical_velocity();
    host.step(holding);

    assert!(host.controller.vertical_velocity() < after_takeoff);
}

#[test]
fn walking_forward_after_turning_follows_the_new_heading() {
    let mut host = Host::new(ControllerConfig::default());

    // 90 degrees of yaw in a single frame: 5400 * 100 / 60 / 100
    host.step(InputSample {
        mouse_delta: Vec2::new(54.0, 0.0),
        ..default()
    });
    assert!((host.yaw_degrees - 90.0).abs() < 1e-3);

    for _ in 0..60 {
        host.step(InputSample {
            forward: 1.0,
            ..default()
        });
    }

    // One second at 5 u/s towards +X
    assert!((host.position.x - 5.0).abs() < 1e-3);
    assert!(host.position.z.abs() < 1e-3);
}

#[test]
fn dropping_off_a_ledge_free_falls() {
    let mut host = Host::new(ControllerConfig::default());
    host.position.y = 100.0;

    for n in 1..=30 {
        host.step(InputSample::default());
        let expected = n as f32 * -9.81 * DT;
        assert!((host.controller.vertical_velocity() - expected).abs() < 1e-3);
    }
}

#[test]
fn sustained_mouse_look_parks_the_camera_at_the_limit() {
    let settings = PlayerSettings::default();
    let bindings = InputBindings::default();
    let keyboard = ButtonInput::<KeyCode>::default();
    let mut controller = MovementController::new(settings.controller);
    let mut camera = Transform::default();

    // Mouse moving down the screen looks down.
    for _ in 0..600 {
        let input = sample_input(
            &keyboard,
            &bindings,
            Vec2::new(0.0, 40.0),
            &settings.look,
            true,
            BodyAxes::default(),
        );
        let command = controller.advance(&input, DT);
        assert!(command.camera_pitch.abs() <= PITCH_LIMIT);
        apply_camera_pitch(&mut camera, &command);
    }

    assert_eq!(controller.camera_pitch(), PITCH_LIMIT);
    assert!(camera.forward().distance(Vec3::NEG_Y) < 1e-4);
    assert!(look_axis(Vec2::new(0.0, 40.0), &settings.look).y < 0.0);
}
