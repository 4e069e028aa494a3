//! Corpse cleanup: despawn dead zombies once their linger time is up.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use horde_core::components::ZombieState;
use horde_core::constants::CORPSE_LINGER_SECS;

pub fn run(world: &mut World, now_secs: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, state) in world.query_mut::<&ZombieState>() {
        if state.dead && now_secs - state.died_at_secs >= CORPSE_LINGER_SECS {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
