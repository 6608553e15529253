//! Static layout of the demo arena.

use bevy::prelude::*;

/// Marker for all arena geometry.
#[derive(Component)]
pub struct ArenaGeometry;

/// One axis-aligned box in the arena.
#[derive(Debug, Clone, Copy)]
pub struct ArenaBlock {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub color: (f32, f32, f32),
}

pub const PLAYER_START: Vec3 = Vec3::new(0.0, 1.5, 6.0);

const STONE: (f32, f32, f32) = (0.45, 0.43, 0.40);
const MOSS: (f32, f32, f32) = (0.30, 0.38, 0.28);
const BRICK: (f32, f32, f32) = (0.52, 0.33, 0.27);

/// Floor, a staircase the autostep can climb, and ledges that need a jump.
pub const ARENA_BLOCKS: &[ArenaBlock] = &[
    // Floor
    ArenaBlock { center: Vec3::new(0.0, -0.5, 0.0), half_extents: Vec3::new(20.0, 0.5, 20.0), color: STONE },
    // Stairs
    ArenaBlock { center: Vec3::new(-6.0, 0.15, 0.0), half_extents: Vec3::new(1.0, 0.15, 1.5), color: BRICK },
    ArenaBlock { center: Vec3::new(-8.0, 0.3, 0.0), half_extents: Vec3::new(1.0, 0.3, 1.5), color: BRICK },
    ArenaBlock { center: Vec3::new(-10.0, 0.45, 0.0), half_extents: Vec3::new(1.0, 0.45, 1.5), color: BRICK },
    ArenaBlock { center: Vec3::new(-12.0, 0.6, 0.0), half_extents: Vec3::new(1.0, 0.6, 1.5), color: BRICK },
    // Jump ledges
    ArenaBlock { center: Vec3::new(5.0, 0.5, -2.0), half_extents: Vec3::new(1.5, 0.5, 1.5), color: MOSS },
    ArenaBlock { center: Vec3::new(8.0, 1.5, -5.0), half_extents: Vec3::new(1.5, 0.25, 1.5), color: MOSS },
    ArenaBlock { center: Vec3::new(5.0, 2.5, -9.0), half_extents: Vec3::new(1.5, 0.25, 1.5), color: MOSS },
    // Boundary walls
    ArenaBlock { center: Vec3::new(0.0, 2.0, -20.5), half_extents: Vec3::new(20.0, 2.0, 0.5), color: STONE },
    ArenaBlock { center: Vec3::new(0.0, 2.0, 20.5), half_extents: Vec3::new(20.0, 2.0, 0.5), color: STONE },
    ArenaBlock { center: Vec3::new(-20.5, 2.0, 0.0), half_extents: Vec3::new(0.5, 2.0, 20.0), color: STONE },
    ArenaBlock { center: Vec3::new(20.5, 2.0, 0.0), half_extents: Vec3::new(0.5, 2.0, 20.0), color: STONE },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_above_the_floor() {
        let floor = ARENA_BLOCKS[0];
        let floor_top = floor.center.y + floor.half_extents.y;
        // Capsule bottom is 0.8 below its center
        assert!(PLAYER_START.y - 0.8 > floor_top);
    }

    #[test]
    fn stair_steps_fit_the_autostep_height() {
        let mut previous = 0.0;
        for block in &ARENA_BLOCKS[1..5] {
            let top = block.center.y + block.half_extents.y;
            assert!(top - previous <= 0.4 + 1e-6);
            previous = top;
        }
    }
}
