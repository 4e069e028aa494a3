//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the collision registry,
//! the player and weapon state, and the task schedule. It processes
//! queued commands at the tick boundary, runs all systems in a fixed
//! order, and produces a `GameSnapshot` per tick. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use horde_collision::CollisionWorld;
use horde_core::commands::PlayerCommand;
use horde_core::constants::*;
use horde_core::enums::GamePhase;
use horde_core::events::GameEvent;
use horde_core::input::InputState;
use horde_core::player::PlayerState;
use horde_core::state::GameSnapshot;
use horde_core::types::SimTime;

use crate::arsenal::Arsenal;
use crate::schedule::{Schedule, TaskKind};
use crate::systems;
use crate::systems::wave_spawner::{self, WaveConfig, WaveProgress};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and same inputs give the
    /// same snapshot stream.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns all game state.
pub struct SimulationEngine {
    world: World,
    collision: CollisionWorld,
    time: SimTime,
    phase: GamePhase,
    wave: u32,
    score: u64,
    muted: bool,
    player: PlayerState,
    arsenal: Arsenal,
    rng: ChaCha8Rng,
    schedule: Schedule,
    wave_progress: WaveProgress,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    next_id: u32,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            collision: CollisionWorld::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            wave: 1,
            score: 0,
            muted: false,
            player: PlayerState::new(),
            arsenal: Arsenal::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            schedule: Schedule::new(),
            wave_progress: WaveProgress::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            next_id: world_setup::FIRST_DYNAMIC_ID,
        }
    }

    /// Queue a menu/UI command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick of `dt` seconds under the
    /// given raw input, returning the resulting snapshot. Outside the
    /// Playing phase the world is frozen and only commands apply.
    pub fn tick(&mut self, dt: f64, input: &InputState) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems(dt, input);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            self.wave,
            self.score,
            self.muted,
            &self.player,
            &self.arsenal,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn arsenal(&self) -> &Arsenal {
        &self.arsenal
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Read-only access to the collision registry.
    pub fn collision(&self) -> &CollisionWorld {
        &self.collision
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Menu {
                    self.score = 0;
                    self.start_session(1);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Restart => {
                // Difficulty carries forward: the wave counter advances
                // while player stats reset. Score survives the death.
                if self.phase == GamePhase::GameOver {
                    let next_wave = self.wave + 1;
                    self.start_session(next_wave);
                }
            }
            PlayerCommand::ReturnToMenu => {
                self.reset_world();
                self.player.reset();
                self.arsenal.reset();
                self.schedule.invalidate();
                self.time = SimTime::default();
                self.wave = 1;
                self.score = 0;
                self.wave_progress = WaveProgress::default();
                self.phase = GamePhase::Menu;
            }
            PlayerCommand::UpgradeSkill { skill } => {
                if matches!(self.phase, GamePhase::Playing | GamePhase::Paused) {
                    self.player.upgrade_skill(skill);
                }
            }
            PlayerCommand::ToggleMute => {
                self.muted = !self.muted;
            }
        }
    }

    /// Begin a fresh Playing session at the given wave.
    fn start_session(&mut self, wave: u32) {
        self.reset_world();
        self.player.reset();
        self.arsenal.reset();
        self.schedule.invalidate();
        self.time = SimTime::default();
        self.wave = wave;
        self.phase = GamePhase::Playing;
        self.begin_wave();
    }

    /// Despawn every entity and rebuild the static arena boxes.
    fn reset_world(&mut self) {
        self.world.clear();
        self.collision.clear();
        world_setup::register_arena(&mut self.collision);
    }

    /// Schedule the current wave's staggered spawns.
    fn begin_wave(&mut self) {
        let config = WaveConfig::for_wave(self.wave);
        self.events.push(GameEvent::WaveStarted {
            wave: self.wave,
            boss: config.boss_wave,
        });
        self.wave_progress = WaveProgress {
            pending: config.zombie_count,
            spawned: 0,
            advance_scheduled: false,
        };
        let now = self.time.elapsed_secs;
        for i in 0..config.zombie_count {
            let boss = config.boss_wave && i == 0;
            self.schedule.push(
                now + i as f64 * config.spawn_delay_secs,
                TaskKind::SpawnZombie { boss },
            );
        }
    }

    /// Complete the cleared wave: bank the completion bonus and start
    /// the next one.
    fn advance_wave(&mut self) {
        self.score += self.wave as u64 * WAVE_BONUS_MULT;
        self.wave += 1;
        self.begin_wave();
    }

    /// Run all systems in order: deferred tasks, movement, weapon
    /// resolution, death sweep, cleanup, wave check, game-over check.
    fn run_systems(&mut self, dt: f64, input: &InputState) {
        let now = self.time.elapsed_secs;

        // 1. Fire due scheduled tasks (spawns, reload, wave advance).
        for task in self.schedule.take_due(now) {
            self.fire_task(task);
        }

        // 2. Player look + movement.
        systems::player_move::run(&mut self.player, &mut self.collision, input, dt);

        // 3. Zombie pursuit and separation.
        systems::pursuit::run(&mut self.world, &mut self.collision, &self.player, dt);

        // 4. Zombie contact attacks.
        systems::contact::run(&mut self.world, &mut self.player, now, &mut self.events);

        // 5. Weapon handling: switch, reload, shoot.
        systems::weapon_control::run(
            &mut self.world,
            &mut self.collision,
            &mut self.arsenal,
            &self.player,
            &mut self.schedule,
            &mut self.events,
            &mut self.next_id,
            now,
            input,
        );

        // 6. Bullet advance + hit intents.
        let intents = systems::bullets::run(
            &mut self.world,
            &mut self.collision,
            dt,
            &mut self.despawn_buffer,
        );

        // 7. Damage application and death sweep.
        let kills = systems::combat::run(
            &mut self.world,
            &mut self.collision,
            &intents,
            now,
            &mut self.events,
        );
        if kills > 0 {
            self.score += kills as u64 * SCORE_PER_KILL;
            let levels = self.player.gain_experience(kills * XP_PER_KILL);
            for i in 0..levels {
                self.events.push(GameEvent::LevelUp {
                    level: self.player.level - levels + i + 1,
                });
            }
        }

        // 8. Corpse cleanup.
        systems::cleanup::run(&mut self.world, now, &mut self.despawn_buffer);

        // 9. Wave-completion check: exactly one advance per wave.
        if !self.wave_progress.advance_scheduled
            && wave_spawner::wave_complete(&self.world, &self.wave_progress)
        {
            self.wave_progress.advance_scheduled = true;
            self.events.push(GameEvent::WaveComplete { wave: self.wave });
            self.schedule.push(now + WAVE_GRACE_SECS, TaskKind::AdvanceWave);
        }

        // 10. Game over on player death; freeze the session.
        if self.player.is_dead() {
            self.phase = GamePhase::GameOver;
            self.schedule.invalidate();
            self.events.push(GameEvent::GameOver {
                wave: self.wave,
                score: self.score,
            });
        }
    }

    /// Apply one due scheduled task.
    fn fire_task(&mut self, task: TaskKind) {
        match task {
            TaskKind::SpawnZombie { boss } => {
                let config = WaveConfig::for_wave(self.wave);
                let id = self.next_id;
                self.next_id += 1;
                world_setup::spawn_zombie(
                    &mut self.world,
                    &mut self.rng,
                    &mut self.collision,
                    &config,
                    id,
                    boss,
                );
                self.wave_progress.pending = self.wave_progress.pending.saturating_sub(1);
                self.wave_progress.spawned += 1;
            }
            TaskKind::AdvanceWave => {
                self.advance_wave();
            }
            TaskKind::FinishReload { slot } => {
                if let Some(weapon) = self.arsenal.finish_reload(slot) {
                    self.events.push(GameEvent::ReloadFinished { weapon });
                }
            }
        }
    }

    // ---- Test support ----

    /// Remove every zombie (and its pending spawns) so tests can stage
    /// their own.
    #[cfg(test)]
    pub fn clear_wave(&mut self) {
        self.schedule
            .cancel_where(|task| matches!(task, TaskKind::SpawnZombie { .. }));
        let entities: Vec<hecs::Entity> = self
            .world
            .query::<&horde_core::components::ZombieState>()
            .iter()
            .map(|(entity, state)| {
                self.collision.remove(state.id);
                entity
            })
            .collect();
        for entity in entities {
            let _ = self.world.despawn(entity);
        }
        self.wave_progress = WaveProgress::default();
    }

    /// Spawn one zombie with explicit stats, counted toward the
    /// current wave. Returns its id.
    #[cfg(test)]
    pub fn spawn_test_zombie(
        &mut self,
        position: horde_core::types::Position,
        health: f64,
        speed: f64,
        damage: f64,
    ) -> u32 {
        use horde_collision::CollisionBox;
        use horde_core::components::{Zombie, ZombieState};
        use horde_core::enums::BoxKind;

        let id = self.next_id;
        self.next_id += 1;
        self.collision.insert(CollisionBox::new(
            id,
            position,
            world_setup::zombie_box_size(false),
            BoxKind::Zombie,
        ));
        self.world.spawn((
            Zombie,
            position,
            ZombieState {
                id,
                health,
                max_health: health,
                speed,
                damage,
                boss: false,
                dead: false,
                died_at_secs: 0.0,
                next_attack_at_secs: 0.0,
            },
        ));
        self.wave_progress.spawned += 1;
        id
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    #[cfg(test)]
    pub fn live_zombies(&self) -> u32 {
        wave_spawner::live_zombie_count(&self.world)
    }
}
