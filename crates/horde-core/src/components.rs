//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Marks an entity as a zombie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Zombie;

/// Marks an entity as a bullet in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Zombie combat state. Once `dead` is set the entity is inert: no
/// movement, no attacks, no further damage. It lingers briefly as a
/// corpse for rendering before despawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZombieState {
    /// Unique per spawn, stable for the entity's lifetime.
    pub id: u32,
    pub health: f64,
    pub max_health: f64,
    /// Pursuit speed (m/s).
    pub speed: f64,
    /// Damage per landed attack.
    pub damage: f64,
    pub boss: bool,
    pub dead: bool,
    /// Elapsed-seconds timestamp of death, for corpse cleanup.
    pub died_at_secs: f64,
    /// Earliest elapsed-seconds at which this zombie may attack again.
    pub next_attack_at_secs: f64,
}

/// Bullet flight state. `distance_traveled` never exceeds `range`;
/// crossing it removes the bullet the same tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletState {
    pub id: u32,
    /// Unit travel direction.
    pub direction: Position,
    pub speed: f64,
    pub damage: f64,
    pub range: f64,
    pub distance_traveled: f64,
}

// Position (from types.rs) is used directly as the spatial component.
