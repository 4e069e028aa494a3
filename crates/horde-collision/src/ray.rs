//! Ray casting against the registry, for line-of-sight and trajectory
//! queries.

use serde::{Deserialize, Serialize};

use horde_core::enums::BoxKind;
use horde_core::types::Position;

use crate::registry::{CollisionBox, CollisionWorld};

/// Result of a raycast. A miss still carries the ray's terminal point
/// at `max_distance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    pub hit: bool,
    pub hit_box: Option<CollisionBox>,
    pub distance: f64,
    pub point: Position,
}

impl CollisionWorld {
    /// Cast a ray and return the nearest box intersection within
    /// `max_distance`, skipping the ignored kinds. The direction is
    /// normalized internally; a zero direction always misses.
    pub fn raycast(
        &self,
        origin: Position,
        direction: Position,
        max_distance: f64,
        ignore: &[BoxKind],
    ) -> RayHit {
        let dir = origin
            .direction_to(&Position::new(
                origin.x + direction.x,
                origin.y + direction.y,
                origin.z + direction.z,
            ));

        let mut closest: Option<(&CollisionBox, f64)> = None;

        if dir != Position::default() {
            for b in self.iter() {
                if ignore.contains(&b.kind) {
                    continue;
                }
                if let Some(t) = ray_box_entry(&origin, &dir, b) {
                    if t <= max_distance && closest.map_or(true, |(_, best)| t < best) {
                        closest = Some((b, t));
                    }
                }
            }
        }

        match closest {
            Some((b, t)) => RayHit {
                hit: true,
                hit_box: Some(b.clone()),
                distance: t,
                point: point_along(&origin, &dir, t),
            },
            None => RayHit {
                hit: false,
                hit_box: None,
                distance: max_distance,
                point: point_along(&origin, &dir, max_distance),
            },
        }
    }
}

fn point_along(origin: &Position, dir: &Position, t: f64) -> Position {
    Position::new(
        origin.x + dir.x * t,
        origin.y + dir.y * t,
        origin.z + dir.z * t,
    )
}

/// Slab test: distance along the ray to the box entry point, or
/// `None` when the ray misses. A ray starting inside the box hits at
/// distance 0.
fn ray_box_entry(origin: &Position, dir: &Position, b: &CollisionBox) -> Option<f64> {
    let min = b.min();
    let max = b.max();
    let origins = [origin.x, origin.y, origin.z];
    let dirs = [dir.x, dir.y, dir.z];
    let mins = [min.x, min.y, min.z];
    let maxs = [max.x, max.y, max.z];

    let mut t_enter = f64::NEG_INFINITY;
    let mut t_exit = f64::INFINITY;

    for axis in 0..3 {
        if dirs[axis].abs() < f64::EPSILON {
            // Parallel to this slab: must already be within it.
            if origins[axis] < mins[axis] || origins[axis] > maxs[axis] {
                return None;
            }
            continue;
        }
        let t0 = (mins[axis] - origins[axis]) / dirs[axis];
        let t1 = (maxs[axis] - origins[axis]) / dirs[axis];
        let (near, far) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        t_enter = t_enter.max(near);
        t_exit = t_exit.min(far);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None; // Entirely behind the origin.
    }
    Some(t_enter.max(0.0))
}
