//! Raw per-tick input contract consumed by the simulation.
//!
//! The binding layer (keyboard/mouse/pointer-lock) is external; it
//! reports plain flags and pointer deltas here, once per frame.

use serde::{Deserialize, Serialize};

/// Input sampled for one tick. Pointer-lock is assumed active when
/// look deltas are nonzero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub leftward: bool,
    pub rightward: bool,
    /// Hold to move at run speed.
    pub run: bool,
    /// Fire the current weapon (subject to ammo and fire-rate gating).
    pub shoot: bool,
    /// Begin a reload.
    pub reload: bool,
    /// Weapon slot selectors (pistol, rifle, shotgun).
    pub slot1: bool,
    pub slot2: bool,
    pub slot3: bool,
    /// Raw pointer movement this frame (pixels); converted to yaw/pitch
    /// by the simulation.
    pub look_dx: f64,
    pub look_dy: f64,
}

impl InputState {
    /// True if any movement flag is held.
    pub fn wants_movement(&self) -> bool {
        self.forward || self.backward || self.leftward || self.rightward
    }
}
