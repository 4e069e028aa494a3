//! Weapon definitions and the per-weapon ammo/reload data model.
//!
//! The fire-rate/reload state machine lives in the sim crate; this is
//! the plain data each weapon carries.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

/// A carried weapon. `ammo` never exceeds `max_ammo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    /// Base damage per bullet, before the damage skill multiplier.
    pub damage: f64,
    /// Shots per second.
    pub fire_rate: f64,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Base reload duration in seconds, before the reload skill multiplier.
    pub reload_secs: f64,
}

impl Weapon {
    pub fn pistol() -> Self {
        Self {
            kind: WeaponKind::Pistol,
            damage: 25.0,
            fire_rate: 3.0,
            ammo: 12,
            max_ammo: 12,
            reload_secs: 2.0,
        }
    }

    pub fn rifle() -> Self {
        Self {
            kind: WeaponKind::Rifle,
            damage: 35.0,
            fire_rate: 6.0,
            ammo: 30,
            max_ammo: 30,
            reload_secs: 3.0,
        }
    }

    pub fn shotgun() -> Self {
        Self {
            kind: WeaponKind::Shotgun,
            damage: 60.0,
            fire_rate: 1.5,
            ammo: 8,
            max_ammo: 8,
            reload_secs: 4.0,
        }
    }

    pub fn for_kind(kind: WeaponKind) -> Self {
        match kind {
            WeaponKind::Pistol => Self::pistol(),
            WeaponKind::Rifle => Self::rifle(),
            WeaponKind::Shotgun => Self::shotgun(),
        }
    }

    /// Display name for HUD/audio collaborators.
    pub fn name(&self) -> &'static str {
        match self.kind {
            WeaponKind::Pistol => "Pistol",
            WeaponKind::Rifle => "Assault Rifle",
            WeaponKind::Shotgun => "Shotgun",
        }
    }

    /// Minimum interval between shots in milliseconds.
    pub fn shot_interval_ms(&self) -> f64 {
        1000.0 / self.fire_rate
    }
}
