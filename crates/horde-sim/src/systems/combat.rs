//! Damage application and the death sweep.
//!
//! The single writer of zombie health. Intents against an already-dead
//! zombie are dropped — once dead, an entity is inert. A zombie whose
//! health reaches zero is marked dead immediately (excluded from every
//! live query from this instant) and its collision box is removed; the
//! corpse entity lingers for the cleanup system.

use hecs::World;

use horde_collision::CollisionWorld;
use horde_core::components::ZombieState;
use horde_core::events::GameEvent;

use crate::systems::bullets::DamageIntent;

/// Apply all damage intents in order. Returns the number of kills.
pub fn run(
    world: &mut World,
    collision: &mut CollisionWorld,
    intents: &[DamageIntent],
    now_secs: f64,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let mut kills = 0;

    for intent in intents {
        let Ok(mut state) = world.get::<&mut ZombieState>(intent.target) else {
            continue; // Target despawned; intent is stale.
        };
        if state.dead {
            continue;
        }
        state.health = (state.health - intent.amount).max(0.0);
        if state.health <= 0.0 {
            state.dead = true;
            state.died_at_secs = now_secs;
            collision.remove(state.id);
            events.push(GameEvent::ZombieKilled { zombie_id: state.id });
            kills += 1;
        } else {
            events.push(GameEvent::ZombieHit { zombie_id: state.id });
        }
    }

    kills
}
