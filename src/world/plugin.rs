//! World plugin - spawns the arena, lighting and the player.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::controller::PlayerSettings;
use crate::player::spawn_player;

use super::arena::{ArenaGeometry, ARENA_BLOCKS, PLAYER_START};

/// World plugin - builds the demo arena once at startup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_arena);
    }
}

/// Build the arena geometry and spawn the player at the start position.
pub fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<PlayerSettings>,
) {
    info!("Building arena: {} blocks", ARENA_BLOCKS.len());

    for block in ARENA_BLOCKS {
        let size = block.half_extents * 2.0;
        commands.spawn((
            ArenaGeometry,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(block.color.0, block.color.1, block.color.2),
                perceptual_roughness: 0.9,
                ..default()
            })),
            Transform::from_translation(block.center),
            RigidBody::Fixed,
            Collider::cuboid(block.half_extents.x, block.half_extents.y, block.half_extents.z),
        ));
    }

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.85, 0.8),
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    spawn_player(&mut commands, PLAYER_START, &settings);
}
