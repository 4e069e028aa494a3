//! Bullet advancement and hit detection.
//!
//! Each bullet moves along its direction, expires past its range, and
//! is absorbed by the first live zombie found within the hit radius —
//! collection iteration order, not nearest-first, and at most one hit
//! per bullet. Hits are emitted as damage intents; the combat system
//! applies them afterward so the zombie collection has exactly one
//! writer per tick.

use hecs::{Entity, World};

use horde_collision::CollisionWorld;
use horde_core::components::{BulletState, ZombieState};
use horde_core::constants::BULLET_HIT_RADIUS;
use horde_core::types::Position;

/// A requested zombie damage application.
#[derive(Debug, Clone, Copy)]
pub struct DamageIntent {
    pub target: Entity,
    pub amount: f64,
}

/// Advance all bullets; despawn expired and absorbed ones this tick.
/// Returns the damage intents for the combat system.
pub fn run(
    world: &mut World,
    collision: &mut CollisionWorld,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<DamageIntent> {
    despawn_buffer.clear();
    let mut intents = Vec::new();

    // Live-zombie positions, snapshotted before bullets mutate anything.
    let zombies: Vec<(Entity, Position)> = world
        .query::<(&Position, &ZombieState)>()
        .iter()
        .filter(|(_, (_, state))| !state.dead)
        .map(|(entity, (pos, _))| (entity, *pos))
        .collect();

    for (entity, (pos, bullet)) in world.query_mut::<(&mut Position, &mut BulletState)>() {
        let step = bullet.speed * dt;
        let d = bullet.direction;
        pos.x += d.x * step;
        pos.y += d.y * step;
        pos.z += d.z * step;
        bullet.distance_traveled += step;

        if bullet.distance_traveled > bullet.range {
            collision.remove(bullet.id);
            despawn_buffer.push(entity);
            continue;
        }

        let hit = zombies
            .iter()
            .find(|(_, zpos)| pos.distance_to(zpos) < BULLET_HIT_RADIUS);
        if let Some((target, _)) = hit {
            intents.push(DamageIntent {
                target: *target,
                amount: bullet.damage,
            });
            collision.remove(bullet.id);
            despawn_buffer.push(entity);
        } else {
            collision.update_position(bullet.id, *pos);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    intents
}
