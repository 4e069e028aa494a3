//! Player look and movement from raw input flags.

use glam::DVec3;

use horde_collision::CollisionWorld;
use horde_core::constants::*;
use horde_core::enums::BoxKind;
use horde_core::input::InputState;
use horde_core::player::PlayerState;
use horde_core::types::{Bounds, Position};

use crate::world_setup::PLAYER_BOX_ID;

/// Kinds that never block the player's movement probe.
const MOVE_IGNORE: [BoxKind; 3] = [BoxKind::Player, BoxKind::Zombie, BoxKind::Bullet];

/// Apply look deltas, then step the player along the ground plane.
/// Diagonals are normalized; the run flag multiplies speed; the result
/// is clamped to the arena and rejected if it would intersect a wall
/// or obstacle.
pub fn run(player: &mut PlayerState, collision: &mut CollisionWorld, input: &InputState, dt: f64) {
    player.apply_look(input.look_dx, input.look_dy);

    if !input.wants_movement() {
        return;
    }

    let forward = player.ground_forward().as_dvec3();
    let right = player.ground_right().as_dvec3();
    let mut direction = DVec3::ZERO;
    if input.forward {
        direction += forward;
    }
    if input.backward {
        direction -= forward;
    }
    if input.rightward {
        direction += right;
    }
    if input.leftward {
        direction -= right;
    }
    let direction = direction.normalize_or_zero();
    if direction == DVec3::ZERO {
        return;
    }

    let speed = player.speed * if input.run { RUN_MULTIPLIER } else { 1.0 };
    let stepped = player.position.as_dvec3() + direction * speed * dt;

    let bounds = Bounds::new(
        Position::new(-ARENA_HALF_WIDTH, EYE_HEIGHT, -ARENA_HALF_DEPTH),
        Position::new(ARENA_HALF_WIDTH, EYE_HEIGHT, ARENA_HALF_DEPTH),
    );
    let candidate = Position::from_dvec3(stepped).clamped(&bounds);

    // Probe with the body box centered at chest height, not eye height.
    let probe = Position::new(candidate.x, PLAYER_BOX_SIZE[1] / 2.0, candidate.z);
    if collision.is_position_valid(probe, PLAYER_BOX_SIZE, &MOVE_IGNORE) {
        player.position = candidate;
        collision.update_position(PLAYER_BOX_ID, probe);
    }
}
