//! Player commands sent from the menu/UI layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, never
//! mid-update.

use serde::{Deserialize, Serialize};

use crate::enums::SkillKind;

/// All possible menu/UI actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a fresh session from the menu: wave 1, score 0.
    StartGame,
    /// Pause the simulation (only valid while playing).
    Pause,
    /// Resume from pause.
    Resume,
    /// Restart after game over. The wave counter advances and
    /// difficulty carries forward; player stats reset.
    Restart,
    /// Return to the menu from any state, resetting wave and score.
    ReturnToMenu,
    /// Spend a skill point on the named skill.
    UpgradeSkill { skill: SkillKind },
    /// Toggle the audio-collaborator mute flag. Nothing else changes.
    ToggleMute,
}
