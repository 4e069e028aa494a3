//! Simulation engine for HORDE.
//!
//! Owns the hecs ECS world, the collision registry, and the player/
//! weapon state; runs systems once per external frame tick and
//! produces `GameSnapshot`s for the rendering/UI/audio layers.

pub mod arsenal;
pub mod engine;
pub mod schedule;
pub mod systems;
pub mod world_setup;

pub use horde_core as core;

pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
