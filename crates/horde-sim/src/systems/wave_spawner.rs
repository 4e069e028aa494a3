//! Wave difficulty scaling and progress bookkeeping.
//!
//! Spawns themselves are scheduled tasks (staggered, one zombie per
//! task); this module defines the per-wave parameters and the
//! completion condition.

use hecs::World;

use horde_core::components::ZombieState;
use horde_core::constants::*;

/// Parameters for one wave. All stats scale linearly with the wave
/// number; the count is capped and the spawn stagger has a floor.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveConfig {
    pub wave: u32,
    pub zombie_count: u32,
    pub zombie_health: f64,
    pub zombie_speed: f64,
    pub zombie_damage: f64,
    /// Delay between consecutive spawns within the wave (seconds).
    pub spawn_delay_secs: f64,
    /// Every `BOSS_WAVE_INTERVAL`th wave leads with a boss.
    pub boss_wave: bool,
}

impl WaveConfig {
    pub fn for_wave(wave: u32) -> Self {
        let wave = wave.max(1);
        Self {
            wave,
            zombie_count: (WAVE_BASE_COUNT + (wave - 1) * WAVE_COUNT_INCREMENT).min(WAVE_MAX_COUNT),
            zombie_health: 100.0 + wave as f64 * 10.0,
            zombie_speed: 0.5 + wave as f64 * 0.1,
            zombie_damage: 10.0 + wave as f64 * 2.0,
            spawn_delay_secs: (SPAWN_DELAY_BASE_SECS - wave as f64 * SPAWN_DELAY_DECAY_SECS)
                .max(SPAWN_DELAY_MIN_SECS),
            boss_wave: wave % BOSS_WAVE_INTERVAL == 0,
        }
    }
}

/// Spawn-delivery progress for the current wave.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveProgress {
    /// Spawn tasks still pending delivery.
    pub pending: u32,
    /// Zombies delivered so far this wave.
    pub spawned: u32,
    /// Guard so the grace-delay advance is scheduled exactly once.
    pub advance_scheduled: bool,
}

/// Zombies still counting as alive.
pub fn live_zombie_count(world: &World) -> u32 {
    world
        .query::<&ZombieState>()
        .iter()
        .filter(|(_, state)| !state.dead)
        .count() as u32
}

/// The wave is complete when every scheduled spawn has been delivered,
/// at least one zombie was spawned, and none remain alive.
pub fn wave_complete(world: &World, progress: &WaveProgress) -> bool {
    progress.pending == 0 && progress.spawned > 0 && live_zombie_count(world) == 0
}
