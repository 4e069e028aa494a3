//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in arena space (meters, Cartesian).
/// x = East, y = Up, z = South (right-handed, camera looks down -z at yaw 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Axis-aligned bounds used to keep entities inside the arena.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance to another position in meters (3D).
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec3().distance(other.as_dvec3())
    }

    /// Unit direction from `self` toward `other`.
    /// A zero offset yields the zero vector, never NaN.
    pub fn direction_to(&self, other: &Position) -> Position {
        Position::from_dvec3((other.as_dvec3() - self.as_dvec3()).normalize_or_zero())
    }

    /// Linear interpolation toward `other` by `factor` in [0, 1].
    pub fn lerp(&self, other: &Position, factor: f64) -> Position {
        Position::from_dvec3(self.as_dvec3().lerp(other.as_dvec3(), factor))
    }

    /// Clamp each component into the given bounds.
    pub fn clamped(&self, bounds: &Bounds) -> Position {
        Position::new(
            self.x.clamp(bounds.min.x, bounds.max.x),
            self.y.clamp(bounds.min.y, bounds.max.y),
            self.z.clamp(bounds.min.z, bounds.max.z),
        )
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn from_dvec3(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Bounds {
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
