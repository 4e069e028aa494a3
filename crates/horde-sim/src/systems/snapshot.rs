//! Snapshot system: queries the world and builds the complete
//! `GameSnapshot`. Read-only; views are sorted by id so equal states
//! serialize identically.

use hecs::World;

use horde_core::components::{BulletState, ZombieState};
use horde_core::enums::GamePhase;
use horde_core::events::GameEvent;
use horde_core::player::PlayerState;
use horde_core::state::{BulletView, GameSnapshot, PlayerView, WeaponView, ZombieView};
use horde_core::types::{Position, SimTime};

use crate::arsenal::Arsenal;

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: u32,
    score: u64,
    muted: bool,
    player: &PlayerState,
    arsenal: &Arsenal,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        wave,
        score,
        muted,
        player: build_player(player),
        weapon: build_weapon(arsenal, time.elapsed_secs),
        zombies: build_zombies(world),
        bullets: build_bullets(world),
        events,
    }
}

fn build_player(player: &PlayerState) -> PlayerView {
    PlayerView {
        position: player.position,
        yaw: player.yaw,
        pitch: player.pitch,
        health: player.health,
        max_health: player.max_health,
        speed: player.speed,
        level: player.level,
        experience: player.experience,
        experience_to_next: player.experience_to_next,
        skill_points: player.skill_points,
        skills: player.skills,
    }
}

fn build_weapon(arsenal: &Arsenal, now_secs: f64) -> WeaponView {
    let weapon = arsenal.current();
    WeaponView {
        kind: weapon.kind,
        name: weapon.name().to_string(),
        ammo: weapon.ammo,
        max_ammo: weapon.max_ammo,
        reloading: arsenal.is_reloading(),
        reload_remaining_secs: arsenal.reload_remaining_secs(now_secs),
    }
}

fn build_zombies(world: &World) -> Vec<ZombieView> {
    let mut zombies: Vec<ZombieView> = world
        .query::<(&Position, &ZombieState)>()
        .iter()
        .map(|(_, (pos, state))| ZombieView {
            id: state.id,
            position: *pos,
            health: state.health,
            max_health: state.max_health,
            boss: state.boss,
            dead: state.dead,
        })
        .collect();
    zombies.sort_by_key(|z| z.id);
    zombies
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<(&Position, &BulletState)>()
        .iter()
        .map(|(_, (pos, state))| BulletView {
            id: state.id,
            position: *pos,
        })
        .collect();
    bullets.sort_by_key(|b| b.id);
    bullets
}
