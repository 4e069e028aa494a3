//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Weapon kind. Closed set; one instance of each is carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Pistol,
    Rifle,
    Shotgun,
}

/// Skill tree branches. Each is an independent, non-decreasing counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    /// Raises max health by a flat amount per rank.
    Health,
    /// Multiplies weapon damage.
    Damage,
    /// Raises movement speed.
    Speed,
    /// Shortens reload duration.
    Reload,
}

/// Collision box category, used for query filtering and raycast ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxKind {
    Player,
    Zombie,
    Bullet,
    Wall,
    Obstacle,
}
