//! Simulation constants and tuning parameters.

// --- Arena ---

/// Playable half-width along x (meters). Movement is clamped to ±this.
pub const ARENA_HALF_WIDTH: f64 = 45.0;

/// Playable half-depth along z (meters).
pub const ARENA_HALF_DEPTH: f64 = 45.0;

/// Boundary wall thickness (meters). Walls sit just outside the clamp bounds.
pub const WALL_THICKNESS: f64 = 1.0;

/// Boundary wall height (meters).
pub const WALL_HEIGHT: f64 = 4.0;

// --- Player ---

/// Camera eye height; the player is pinned to this altitude.
pub const EYE_HEIGHT: f64 = 1.7;

/// Base max health before skill bonuses.
pub const PLAYER_BASE_HEALTH: f64 = 100.0;

/// Base movement speed (m/s) before skill bonuses.
pub const PLAYER_BASE_SPEED: f64 = 8.0;

/// Speed multiplier while the run flag is held.
pub const RUN_MULTIPLIER: f64 = 1.5;

/// Pointer-delta to radians conversion for look input.
pub const MOUSE_SENSITIVITY: f64 = 0.002;

/// Player collision box extents (w, h, d).
pub const PLAYER_BOX_SIZE: [f64; 3] = [0.6, 1.8, 0.3];

// --- Progression ---

/// Skill points granted at the start of a session.
pub const INITIAL_SKILL_POINTS: u32 = 3;

/// XP threshold for the next level is `level * XP_LEVEL_STEP`.
pub const XP_LEVEL_STEP: u32 = 100;

/// Flat max-health gain per health skill rank.
pub const HEALTH_PER_SKILL: f64 = 25.0;

/// Movement speed gain per speed skill rank (m/s).
pub const SPEED_PER_SKILL: f64 = 1.2;

/// Weapon damage bonus per damage skill rank (fraction).
pub const DAMAGE_SKILL_BONUS: f64 = 0.1;

/// Reload duration reduction per reload skill rank (fraction).
pub const RELOAD_SKILL_REDUCTION: f64 = 0.2;

/// XP awarded per zombie kill.
pub const XP_PER_KILL: u32 = 50;

// --- Bullets ---

/// Muzzle speed for all weapons (m/s).
pub const BULLET_SPEED: f64 = 50.0;

/// Maximum bullet travel distance (meters).
pub const BULLET_RANGE: f64 = 100.0;

/// A bullet within this distance of a live zombie registers a hit.
pub const BULLET_HIT_RADIUS: f64 = 1.0;

/// Bullet collision box extents.
pub const BULLET_BOX_SIZE: [f64; 3] = [0.1, 0.1, 0.1];

// --- Zombies ---

/// Zombie body center altitude (meters).
pub const ZOMBIE_CENTER_HEIGHT: f64 = 0.9;

/// Zombie collision box extents (w, h, d).
pub const ZOMBIE_BOX_SIZE: [f64; 3] = [0.6, 1.8, 0.3];

/// A zombie within this distance of the player lands an attack.
pub const ZOMBIE_CONTACT_RANGE: f64 = 1.5;

/// Minimum time between attacks from the same zombie (seconds).
pub const ZOMBIE_ATTACK_COOLDOWN_SECS: f64 = 1.0;

/// Dead zombies linger as corpses for this long before despawn (seconds).
/// The simulation stops counting them as alive the instant they die.
pub const CORPSE_LINGER_SECS: f64 = 3.0;

// --- Waves ---

/// Zombie count in wave 1.
pub const WAVE_BASE_COUNT: u32 = 25;

/// Additional zombies per subsequent wave.
pub const WAVE_COUNT_INCREMENT: u32 = 5;

/// Zombie count cap.
pub const WAVE_MAX_COUNT: u32 = 50;

/// Delay between clearing a wave and starting the next (seconds).
pub const WAVE_GRACE_SECS: f64 = 2.0;

/// Per-zombie spawn stagger in wave 1 (seconds).
pub const SPAWN_DELAY_BASE_SECS: f64 = 0.5;

/// Spawn stagger reduction per wave (seconds).
pub const SPAWN_DELAY_DECAY_SECS: f64 = 0.02;

/// Spawn stagger floor (seconds).
pub const SPAWN_DELAY_MIN_SECS: f64 = 0.2;

/// Zombies spawn on a ring this far from the arena center (meters).
pub const SPAWN_RING_MIN: f64 = 20.0;
pub const SPAWN_RING_MAX: f64 = 30.0;

/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Boss stat multipliers relative to the wave's regular zombies.
pub const BOSS_HEALTH_MULT: f64 = 5.0;
pub const BOSS_DAMAGE_MULT: f64 = 2.0;
pub const BOSS_SIZE_MULT: f64 = 1.5;

// --- Score ---

/// Score per zombie kill.
pub const SCORE_PER_KILL: u64 = 100;

/// Completion bonus is the cleared wave number times this.
pub const WAVE_BONUS_MULT: u64 = 500;
