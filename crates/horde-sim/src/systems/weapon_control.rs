//! Weapon handling: slot switching, reload initiation, and firing.
//!
//! Shooting is gated by the arsenal's ammo/cooldown/reload checks;
//! reload completion is deferred through the task schedule so it
//! lands on a later tick and dies with the session generation.

use hecs::World;

use horde_collision::CollisionWorld;
use horde_core::events::GameEvent;
use horde_core::input::InputState;
use horde_core::player::PlayerState;

use crate::arsenal::Arsenal;
use crate::schedule::{Schedule, TaskKind};
use crate::world_setup;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    collision: &mut CollisionWorld,
    arsenal: &mut Arsenal,
    player: &PlayerState,
    schedule: &mut Schedule,
    events: &mut Vec<GameEvent>,
    next_id: &mut u32,
    now_secs: f64,
    input: &InputState,
) {
    if input.slot1 {
        arsenal.select(0);
    } else if input.slot2 {
        arsenal.select(1);
    } else if input.slot3 {
        arsenal.select(2);
    }

    if input.reload {
        if let Some(reload) = arsenal.start_reload(now_secs, player.reload_multiplier()) {
            schedule.push(reload.done_at_secs, TaskKind::FinishReload { slot: reload.slot });
            events.push(GameEvent::ReloadStarted {
                weapon: arsenal.current().kind,
            });
        }
    }

    if input.shoot && arsenal.can_shoot(now_secs) {
        let damage = arsenal.current().damage * player.damage_multiplier();
        let id = *next_id;
        *next_id += 1;
        world_setup::spawn_bullet(
            world,
            collision,
            id,
            player.position,
            player.aim_direction(),
            damage,
        );
        let weapon = arsenal.register_shot(now_secs);
        events.push(GameEvent::ShotFired { weapon });
    }
}
