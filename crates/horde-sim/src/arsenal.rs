//! The player's carried weapons and the Ready ⇄ Reloading state
//! machine, with fire-rate gating in milliseconds.
//!
//! Stored in `SimulationEngine` directly, not as ECS entities.

use horde_core::enums::WeaponKind;
use horde_core::weapons::Weapon;

/// An in-progress reload. Completion is applied by a scheduled task,
/// never synchronously.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reload {
    pub slot: usize,
    pub started_at_secs: f64,
    pub done_at_secs: f64,
}

/// The three carried weapons plus shared firing state. Reloading
/// blocks shooting on every slot, matching the single reload channel
/// of the weapon hands.
#[derive(Debug, Clone)]
pub struct Arsenal {
    weapons: [Weapon; 3],
    current: usize,
    /// Elapsed-milliseconds timestamp of the last shot.
    last_shot_at_ms: Option<f64>,
    reload: Option<Reload>,
}

impl Default for Arsenal {
    fn default() -> Self {
        Self {
            weapons: [Weapon::pistol(), Weapon::rifle(), Weapon::shotgun()],
            current: 0,
            last_shot_at_ms: None,
            reload: None,
        }
    }
}

impl Arsenal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to full magazines, pistol selected, nothing pending.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn current(&self) -> &Weapon {
        &self.weapons[self.current]
    }

    pub fn current_slot(&self) -> usize {
        self.current
    }

    pub fn weapon(&self, slot: usize) -> Option<&Weapon> {
        self.weapons.get(slot)
    }

    /// Switch to a slot. Out-of-range slots are ignored. Switching
    /// does not interrupt a pending reload.
    pub fn select(&mut self, slot: usize) {
        if slot < self.weapons.len() {
            self.current = slot;
        }
    }

    pub fn is_reloading(&self) -> bool {
        self.reload.is_some()
    }

    /// Seconds until the pending reload completes (0 when idle).
    pub fn reload_remaining_secs(&self, now_secs: f64) -> f64 {
        self.reload
            .map(|r| (r.done_at_secs - now_secs).max(0.0))
            .unwrap_or(0.0)
    }

    /// True iff not reloading, ammo remains, and the fire-rate
    /// interval has elapsed since the last shot.
    pub fn can_shoot(&self, now_secs: f64) -> bool {
        if self.reload.is_some() {
            return false;
        }
        let weapon = self.current();
        if weapon.ammo == 0 {
            return false;
        }
        match self.last_shot_at_ms {
            None => true,
            Some(last_ms) => now_secs * 1000.0 - last_ms >= weapon.shot_interval_ms(),
        }
    }

    /// Consume one round and record the shot timestamp. Callers must
    /// check `can_shoot` first.
    pub fn register_shot(&mut self, now_secs: f64) -> WeaponKind {
        let weapon = &mut self.weapons[self.current];
        weapon.ammo = weapon.ammo.saturating_sub(1);
        self.last_shot_at_ms = Some(now_secs * 1000.0);
        weapon.kind
    }

    /// Enter Reloading for the current weapon. No-op (returns `None`)
    /// when already reloading or the magazine is full. The duration is
    /// the weapon's base reload time scaled by `reload_multiplier`.
    /// Returns the pending reload for the caller to schedule.
    pub fn start_reload(&mut self, now_secs: f64, reload_multiplier: f64) -> Option<Reload> {
        if self.reload.is_some() {
            return None;
        }
        let weapon = self.current();
        if weapon.ammo >= weapon.max_ammo {
            return None;
        }
        let reload = Reload {
            slot: self.current,
            started_at_secs: now_secs,
            done_at_secs: now_secs + weapon.reload_secs * reload_multiplier,
        };
        self.reload = Some(reload);
        Some(reload)
    }

    /// Complete the pending reload for `slot`: refill the magazine and
    /// return to Ready. Returns the weapon kind if applied, `None` if
    /// no matching reload was pending.
    pub fn finish_reload(&mut self, slot: usize) -> Option<WeaponKind> {
        match self.reload {
            Some(r) if r.slot == slot => {
                self.reload = None;
                let weapon = &mut self.weapons[slot];
                weapon.ammo = weapon.max_ammo;
                Some(weapon.kind)
            }
            _ => None,
        }
    }
}
