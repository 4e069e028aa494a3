//! Core types and definitions for the HORDE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric types, components, commands, input, snapshots, events,
//! and constants. It has no dependency on any rendering or windowing
//! framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod player;
pub mod state;
pub mod types;
pub mod weapons;
