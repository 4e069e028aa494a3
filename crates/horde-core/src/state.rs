//! Game state snapshot — the render-relevant state returned from each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, WeaponKind};
use crate::events::GameEvent;
use crate::player::PlayerSkills;
use crate::types::{Position, SimTime};

/// Complete visible state handed to the rendering/UI/audio layers
/// after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: u32,
    pub score: u64,
    /// Audio-collaborator mute flag; not consumed by the simulation.
    pub muted: bool,
    pub player: PlayerView,
    pub weapon: WeaponView,
    pub zombies: Vec<ZombieView>,
    pub bullets: Vec<BulletView>,
    /// This tick's audio/UI cues, drained from the engine.
    pub events: Vec<GameEvent>,
}

/// HUD and camera fields for the player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub yaw: f64,
    pub pitch: f64,
    pub health: f64,
    pub max_health: f64,
    pub speed: f64,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub skill_points: u32,
    pub skills: PlayerSkills,
}

/// Current weapon HUD fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponView {
    #[serde(default)]
    pub kind: WeaponKind,
    pub name: String,
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
    /// Seconds until the reload completes (0 when not reloading).
    pub reload_remaining_secs: f64,
}

/// A zombie as the renderer sees it. Dead zombies remain in view as
/// corpses until cleanup despawns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZombieView {
    pub id: u32,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub boss: bool,
    pub dead: bool,
}

/// A bullet in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u32,
    pub position: Position,
}
