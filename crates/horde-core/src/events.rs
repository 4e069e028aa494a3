//! Events emitted by the simulation for audio and UI feedback.
//!
//! Events are drained into each tick's snapshot; the collaborators
//! consume them fire-and-forget. Gameplay never depends on them.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

/// One tick's worth of audio/UI cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A bullet left the muzzle.
    ShotFired { weapon: WeaponKind },
    /// Reload began.
    ReloadStarted { weapon: WeaponKind },
    /// Reload finished; magazine refilled.
    ReloadFinished { weapon: WeaponKind },
    /// A bullet struck a zombie that survived.
    ZombieHit { zombie_id: u32 },
    /// A zombie was killed.
    ZombieKilled { zombie_id: u32 },
    /// A zombie landed an attack on the player.
    ZombieAttack { zombie_id: u32, damage: f64 },
    /// The player crossed a level threshold.
    LevelUp { level: u32 },
    /// A new wave began spawning.
    WaveStarted { wave: u32, boss: bool },
    /// All zombies in the wave are dead; advance is scheduled.
    WaveComplete { wave: u32 },
    /// Player health reached zero.
    GameOver { wave: u32, score: u64 },
}
