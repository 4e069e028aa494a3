//! Entity spawn factories and arena setup.
//!
//! Creates the boundary walls, zombies, and bullets with their
//! collision boxes. Entity/box ids come from a single engine counter,
//! so ids are unique across every kind.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use horde_collision::{CollisionBox, CollisionWorld};
use horde_core::components::{BulletState, Projectile, Zombie, ZombieState};
use horde_core::constants::*;
use horde_core::enums::BoxKind;
use horde_core::types::Position;

use crate::systems::wave_spawner::WaveConfig;

/// Fixed registry id for the player's box.
pub const PLAYER_BOX_ID: u32 = 0;

/// Fixed registry ids for the four boundary walls.
pub const WALL_BOX_IDS: [u32; 4] = [1, 2, 3, 4];

/// First id available to the engine's dynamic counter.
pub const FIRST_DYNAMIC_ID: u32 = 10;

/// Register the player box and the four boundary walls. Walls sit
/// just outside the movement clamp so raycasts terminate on them.
pub fn register_arena(collision: &mut CollisionWorld) {
    collision.insert(CollisionBox::new(
        PLAYER_BOX_ID,
        Position::new(0.0, PLAYER_BOX_SIZE[1] / 2.0, 0.0),
        PLAYER_BOX_SIZE,
        BoxKind::Player,
    ));

    let wx = ARENA_HALF_WIDTH + WALL_THICKNESS / 2.0;
    let wz = ARENA_HALF_DEPTH + WALL_THICKNESS / 2.0;
    let span_x = (ARENA_HALF_WIDTH + WALL_THICKNESS) * 2.0;
    let span_z = (ARENA_HALF_DEPTH + WALL_THICKNESS) * 2.0;
    let walls = [
        (Position::new(0.0, WALL_HEIGHT / 2.0, -wz), [span_x, WALL_HEIGHT, WALL_THICKNESS]),
        (Position::new(0.0, WALL_HEIGHT / 2.0, wz), [span_x, WALL_HEIGHT, WALL_THICKNESS]),
        (Position::new(-wx, WALL_HEIGHT / 2.0, 0.0), [WALL_THICKNESS, WALL_HEIGHT, span_z]),
        (Position::new(wx, WALL_HEIGHT / 2.0, 0.0), [WALL_THICKNESS, WALL_HEIGHT, span_z]),
    ];
    for (id, (position, size)) in WALL_BOX_IDS.into_iter().zip(walls) {
        collision.insert(CollisionBox::new(id, position, size, BoxKind::Wall));
    }
}

/// Collision box extents for a zombie of the given rank.
pub fn zombie_box_size(boss: bool) -> [f64; 3] {
    if boss {
        [
            ZOMBIE_BOX_SIZE[0] * BOSS_SIZE_MULT,
            ZOMBIE_BOX_SIZE[1] * BOSS_SIZE_MULT,
            ZOMBIE_BOX_SIZE[2] * BOSS_SIZE_MULT,
        ]
    } else {
        ZOMBIE_BOX_SIZE
    }
}

/// Spawn one zombie on the spawn ring at a random bearing, nudged to
/// the nearest clear position, with stats scaled for the wave.
pub fn spawn_zombie(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    collision: &mut CollisionWorld,
    config: &WaveConfig,
    id: u32,
    boss: bool,
) -> hecs::Entity {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let distance: f64 = rng.gen_range(SPAWN_RING_MIN..SPAWN_RING_MAX);
    let raw = Position::new(
        angle.cos() * distance,
        ZOMBIE_CENTER_HEIGHT,
        angle.sin() * distance,
    );

    let size = zombie_box_size(boss);
    let position = collision
        .find_nearest_valid_position(raw, size, 5.0, &[BoxKind::Player, BoxKind::Bullet])
        .unwrap_or(raw);

    let (health, damage) = if boss {
        (
            config.zombie_health * BOSS_HEALTH_MULT,
            config.zombie_damage * BOSS_DAMAGE_MULT,
        )
    } else {
        (config.zombie_health, config.zombie_damage)
    };

    collision.insert(CollisionBox::new(id, position, size, BoxKind::Zombie));

    world.spawn((
        Zombie,
        position,
        ZombieState {
            id,
            health,
            max_health: health,
            speed: config.zombie_speed,
            damage,
            boss,
            dead: false,
            died_at_secs: 0.0,
            next_attack_at_secs: 0.0,
        },
    ))
}

/// Spawn a bullet at the muzzle with a unit direction and the
/// already-skill-scaled damage.
pub fn spawn_bullet(
    world: &mut World,
    collision: &mut CollisionWorld,
    id: u32,
    origin: Position,
    direction: Position,
    damage: f64,
) -> hecs::Entity {
    collision.insert(CollisionBox::new(id, origin, BULLET_BOX_SIZE, BoxKind::Bullet));

    world.spawn((
        Projectile,
        origin,
        BulletState {
            id,
            direction,
            speed: BULLET_SPEED,
            damage,
            range: BULLET_RANGE,
            distance_traveled: 0.0,
        },
    ))
}
