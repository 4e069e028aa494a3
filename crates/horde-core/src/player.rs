//! Player state: position, health, and the leveling/skill model.
//!
//! All operations are total: damage and healing clamp, experience
//! awards loop over as many level thresholds as they cross, and
//! upgrades are no-ops without points to spend.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::SkillKind;
use crate::types::Position;

/// Independent skill rank counters. Monotonically non-decreasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub health: u32,
    pub damage: u32,
    pub speed: u32,
    pub reload: u32,
}

/// The player's full simulation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Position,
    /// Look yaw in radians (0 faces -z, positive turns left).
    pub yaw: f64,
    /// Look pitch in radians, clamped to ±90°.
    pub pitch: f64,
    pub health: f64,
    pub max_health: f64,
    /// Walk speed (m/s), derived from the speed skill.
    pub speed: f64,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub skill_points: u32,
    pub skills: PlayerSkills,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Position::new(0.0, EYE_HEIGHT, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            health: PLAYER_BASE_HEALTH,
            max_health: PLAYER_BASE_HEALTH,
            speed: PLAYER_BASE_SPEED,
            level: 1,
            experience: 0,
            experience_to_next: XP_LEVEL_STEP,
            skill_points: INITIAL_SKILL_POINTS,
            skills: PlayerSkills::default(),
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to session defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Health never drops below zero.
    pub fn take_damage(&mut self, amount: f64) {
        self.health = (self.health - amount.max(0.0)).max(0.0);
    }

    /// Health never exceeds max.
    pub fn heal(&mut self, amount: f64) {
        self.health = (self.health + amount.max(0.0)).min(self.max_health);
    }

    /// Award experience, crossing as many level thresholds as it
    /// covers. Each level grants one skill point and raises the next
    /// threshold to `level * XP_LEVEL_STEP`. Returns the number of
    /// levels gained.
    pub fn gain_experience(&mut self, xp: u32) -> u32 {
        self.experience += xp;
        let mut levels = 0;
        while self.experience >= self.experience_to_next {
            self.experience -= self.experience_to_next;
            self.level += 1;
            self.skill_points += 1;
            self.experience_to_next = self.level * XP_LEVEL_STEP;
            levels += 1;
        }
        levels
    }

    /// Spend one skill point on `skill`. No-op without points.
    /// Returns true if the point was spent.
    pub fn upgrade_skill(&mut self, skill: SkillKind) -> bool {
        if self.skill_points == 0 {
            return false;
        }
        self.skill_points -= 1;
        match skill {
            SkillKind::Health => {
                self.skills.health += 1;
                self.max_health = PLAYER_BASE_HEALTH + HEALTH_PER_SKILL * self.skills.health as f64;
                self.health = (self.health + HEALTH_PER_SKILL).min(self.max_health);
            }
            SkillKind::Speed => {
                self.skills.speed += 1;
                self.speed = PLAYER_BASE_SPEED + SPEED_PER_SKILL * self.skills.speed as f64;
            }
            SkillKind::Damage => self.skills.damage += 1,
            SkillKind::Reload => self.skills.reload += 1,
        }
        true
    }

    /// Multiplier applied to weapon damage by the damage skill.
    pub fn damage_multiplier(&self) -> f64 {
        1.0 + DAMAGE_SKILL_BONUS * self.skills.damage as f64
    }

    /// Multiplier applied to reload duration by the reload skill.
    /// Never goes below zero.
    pub fn reload_multiplier(&self) -> f64 {
        (1.0 - RELOAD_SKILL_REDUCTION * self.skills.reload as f64).max(0.0)
    }

    /// Apply raw pointer deltas to yaw/pitch, clamping pitch to ±90°.
    pub fn apply_look(&mut self, dx: f64, dy: f64) {
        self.yaw -= dx * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch - dy * MOUSE_SENSITIVITY)
            .clamp(-std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);
    }

    /// Unit forward vector on the ground plane (yaw only).
    pub fn ground_forward(&self) -> Position {
        Position::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Unit right vector on the ground plane.
    pub fn ground_right(&self) -> Position {
        Position::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Unit aim vector including pitch, for bullet spawning.
    pub fn aim_direction(&self) -> Position {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Position::new(-sy * cp, sp, -cy * cp)
    }
}
