//! Zombie contact attacks: a live zombie within reach of the player
//! lands its damage, gated by a per-zombie attack cooldown.

use hecs::World;

use horde_core::components::ZombieState;
use horde_core::constants::{ZOMBIE_ATTACK_COOLDOWN_SECS, ZOMBIE_CONTACT_RANGE};
use horde_core::events::GameEvent;
use horde_core::player::PlayerState;
use horde_core::types::Position;

pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    now_secs: f64,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, (pos, state)) in world.query_mut::<(&Position, &mut ZombieState)>() {
        if state.dead {
            continue;
        }
        if pos.distance_to(&player.position) < ZOMBIE_CONTACT_RANGE
            && now_secs >= state.next_attack_at_secs
        {
            player.take_damage(state.damage);
            state.next_attack_at_secs = now_secs + ZOMBIE_ATTACK_COOLDOWN_SECS;
            events.push(GameEvent::ZombieAttack {
                zombie_id: state.id,
                damage: state.damage,
            });
        }
    }
}
