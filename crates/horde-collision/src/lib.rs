//! AABB collision service for the HORDE simulation.
//!
//! A `CollisionWorld` is an explicitly constructed registry of
//! axis-aligned boxes keyed by id — one per live entity, owned and
//! updated by that entity's subsystem. Queries are pure; the only
//! state is the registry itself. Malformed ids are silent no-ops.

pub mod ray;
pub mod registry;

pub use ray::RayHit;
pub use registry::{resolve_push, CollisionBox, CollisionWorld};
