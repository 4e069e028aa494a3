//! Per-tick systems, run in a fixed order by the engine:
//! movement, then weapon resolution, then the death sweep, then the
//! wave check. Systems do not own state; they operate on the world,
//! the collision registry, and the engine-held player/weapon state.

pub mod bullets;
pub mod cleanup;
pub mod combat;
pub mod contact;
pub mod player_move;
pub mod pursuit;
pub mod snapshot;
pub mod wave_spawner;
pub mod weapon_control;
