//! Zombie pursuit steering: every live zombie moves straight toward
//! the player's current position, then overlapping zombies are pushed
//! apart so the horde doesn't collapse into a single point.

use glam::DVec3;
use hecs::World;

use horde_collision::{resolve_push, CollisionBox, CollisionWorld};
use horde_core::components::ZombieState;
use horde_core::constants::*;
use horde_core::enums::BoxKind;
use horde_core::player::PlayerState;
use horde_core::types::Position;

use crate::world_setup::zombie_box_size;

pub fn run(world: &mut World, collision: &mut CollisionWorld, player: &PlayerState, dt: f64) {
    let target = player.position;

    for (_entity, (pos, state)) in world.query_mut::<(&mut Position, &ZombieState)>() {
        if state.dead {
            continue;
        }
        // Ground-plane steering; a zombie exactly at the player yields
        // a zero direction and stays put.
        let to_player =
            DVec3::new(target.x - pos.x, 0.0, target.z - pos.z).normalize_or_zero();
        let stepped = pos.as_dvec3() + to_player * state.speed * dt;
        pos.x = stepped.x.clamp(-ARENA_HALF_WIDTH, ARENA_HALF_WIDTH);
        pos.z = stepped.z.clamp(-ARENA_HALF_DEPTH, ARENA_HALF_DEPTH);
    }

    separate_overlapping(world);

    for (_entity, (pos, state)) in world.query_mut::<(&Position, &ZombieState)>() {
        if !state.dead {
            collision.update_position(state.id, *pos);
        }
    }
}

/// Pairwise push-apart for live zombies whose boxes overlap. The
/// half-strength push keeps the separation stable when three or more
/// zombies crowd the same spot.
fn separate_overlapping(world: &mut World) {
    let mut boxes: Vec<(hecs::Entity, CollisionBox)> = world
        .query::<(&Position, &ZombieState)>()
        .iter()
        .filter(|(_, (_, state))| !state.dead)
        .map(|(entity, (pos, state))| {
            (
                entity,
                CollisionBox::new(state.id, *pos, zombie_box_size(state.boss), BoxKind::Zombie),
            )
        })
        .collect();

    for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            if boxes[i].1.overlaps(&boxes[j].1) {
                let (pa, pb) = resolve_push(&boxes[i].1, &boxes[j].1, 0.5);
                boxes[i].1.position = pa;
                boxes[j].1.position = pb;
            }
        }
    }

    for (entity, b) in boxes {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.x = b.position.x.clamp(-ARENA_HALF_WIDTH, ARENA_HALF_WIDTH);
            pos.z = b.position.z.clamp(-ARENA_HALF_DEPTH, ARENA_HALF_DEPTH);
        }
    }
}
