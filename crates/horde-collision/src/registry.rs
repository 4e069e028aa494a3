//! Collision box registry: insertion, overlap tests, validity and
//! nearest-valid-position searches, and push-apart resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use horde_core::enums::BoxKind;
use horde_core::types::Position;

/// Separation margin added when pushing overlapping boxes apart.
const PUSH_EPSILON: f64 = 0.1;

/// Expanding-ring search step (meters).
const SEARCH_RADIUS_STEP: f64 = 0.5;

/// Angular samples per search ring.
const SEARCH_RING_SAMPLES: u32 = 16;

/// An axis-aligned box. `position` is the center, `size` the full
/// extents on each axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionBox {
    pub id: u32,
    pub position: Position,
    pub size: [f64; 3],
    pub kind: BoxKind,
}

impl CollisionBox {
    pub fn new(id: u32, position: Position, size: [f64; 3], kind: BoxKind) -> Self {
        Self {
            id,
            position,
            size,
            kind,
        }
    }

    /// Minimum corner.
    pub fn min(&self) -> Position {
        Position::new(
            self.position.x - self.size[0] / 2.0,
            self.position.y - self.size[1] / 2.0,
            self.position.z - self.size[2] / 2.0,
        )
    }

    /// Maximum corner.
    pub fn max(&self) -> Position {
        Position::new(
            self.position.x + self.size[0] / 2.0,
            self.position.y + self.size[1] / 2.0,
            self.position.z + self.size[2] / 2.0,
        )
    }

    /// AABB overlap: centers closer than the summed half-extents on
    /// all three axes.
    pub fn overlaps(&self, other: &CollisionBox) -> bool {
        (self.position.x - other.position.x).abs() < (self.size[0] + other.size[0]) / 2.0
            && (self.position.y - other.position.y).abs() < (self.size[1] + other.size[1]) / 2.0
            && (self.position.z - other.position.z).abs() < (self.size[2] + other.size[2]) / 2.0
    }
}

/// The registry. Iteration order is id order, keeping query results
/// deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    boxes: BTreeMap<u32, CollisionBox>,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a box, replacing any existing box with the same id.
    pub fn insert(&mut self, b: CollisionBox) {
        self.boxes.insert(b.id, b);
    }

    /// Unregister. Unknown ids are ignored.
    pub fn remove(&mut self, id: u32) {
        self.boxes.remove(&id);
    }

    /// Move a registered box. Unknown ids are ignored.
    pub fn update_position(&mut self, id: u32, position: Position) {
        if let Some(b) = self.boxes.get_mut(&id) {
            b.position = position;
        }
    }

    pub fn get(&self, id: u32) -> Option<&CollisionBox> {
        self.boxes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollisionBox> {
        self.boxes.values()
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// All registered boxes overlapping `target`, excluding `target`
    /// itself (matched by id).
    pub fn collisions_for(&self, target: &CollisionBox) -> Vec<&CollisionBox> {
        self.boxes
            .values()
            .filter(|b| b.id != target.id && b.overlaps(target))
            .collect()
    }

    /// All registered boxes of the given kind.
    pub fn boxes_of_kind(&self, kind: BoxKind) -> Vec<&CollisionBox> {
        self.boxes.values().filter(|b| b.kind == kind).collect()
    }

    /// True if a box of `size` centered at `position` would overlap
    /// nothing, ignoring the listed kinds.
    pub fn is_position_valid(&self, position: Position, size: [f64; 3], ignore: &[BoxKind]) -> bool {
        let probe = CollisionBox::new(u32::MAX, position, size, BoxKind::Player);
        !self
            .boxes
            .values()
            .any(|b| !ignore.contains(&b.kind) && b.overlaps(&probe))
    }

    /// Find the closest valid position to `target`: the target itself
    /// if it is already valid, otherwise the first valid sample on
    /// expanding rings in the xz plane (radius steps of 0.5 up to
    /// `search_radius`, 16 samples per ring). `None` if every sample
    /// is blocked.
    pub fn find_nearest_valid_position(
        &self,
        target: Position,
        size: [f64; 3],
        search_radius: f64,
        ignore: &[BoxKind],
    ) -> Option<Position> {
        if self.is_position_valid(target, size, ignore) {
            return Some(target);
        }

        let angle_step = std::f64::consts::TAU / SEARCH_RING_SAMPLES as f64;
        let mut radius = SEARCH_RADIUS_STEP;
        while radius <= search_radius {
            for i in 0..SEARCH_RING_SAMPLES {
                let angle = i as f64 * angle_step;
                let candidate = Position::new(
                    target.x + angle.cos() * radius,
                    target.y,
                    target.z + angle.sin() * radius,
                );
                if self.is_position_valid(candidate, size, ignore) {
                    return Some(candidate);
                }
            }
            radius += SEARCH_RADIUS_STEP;
        }

        None
    }
}

/// Separate two overlapping boxes along the ground axis (x or z) with
/// the smaller penetration. Push magnitude is half the overlap plus a
/// small margin, signed away from the other box and scaled by
/// `strength`. Returns the new center positions `(a, b)`.
pub fn resolve_push(a: &CollisionBox, b: &CollisionBox, strength: f64) -> (Position, Position) {
    let overlap_x = (a.size[0] + b.size[0]) / 2.0 - (a.position.x - b.position.x).abs();
    let overlap_z = (a.size[2] + b.size[2]) / 2.0 - (a.position.z - b.position.z).abs();

    let mut push_x = 0.0;
    let mut push_z = 0.0;

    if overlap_x < overlap_z {
        push_x = (overlap_x / 2.0 + PUSH_EPSILON) * (a.position.x - b.position.x).signum() * strength;
    } else {
        push_z = (overlap_z / 2.0 + PUSH_EPSILON) * (a.position.z - b.position.z).signum() * strength;
    }

    (
        Position::new(a.position.x + push_x, a.position.y, a.position.z + push_z),
        Position::new(b.position.x - push_x, b.position.y, b.position.z - push_z),
    )
}
