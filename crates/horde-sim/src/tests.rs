//! Tests for the simulation engine: phases, weapons, waves, combat,
//! scheduling, and determinism.

use horde_core::commands::PlayerCommand;
use horde_core::constants::*;
use horde_core::enums::{GamePhase, SkillKind, WeaponKind};
use horde_core::events::GameEvent;
use horde_core::input::InputState;
use horde_core::state::GameSnapshot;
use horde_core::types::Position;

use crate::arsenal::Arsenal;
use crate::schedule::{Schedule, TaskKind};
use crate::systems::wave_spawner::WaveConfig;
use crate::{SimConfig, SimulationEngine};

const TICK: f64 = 1.0 / 60.0;

/// Engine in the Playing phase, one tick in.
fn started_engine(seed: u64) -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig { seed });
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick(TICK, &InputState::default());
    engine
}

fn advance(engine: &mut SimulationEngine, secs: f64, input: &InputState) -> GameSnapshot {
    let ticks = (secs / TICK).round() as u32;
    let mut snapshot = GameSnapshot::default();
    for _ in 0..ticks {
        snapshot = engine.tick(TICK, input);
    }
    snapshot
}

fn advance_collecting(
    engine: &mut SimulationEngine,
    secs: f64,
    input: &InputState,
) -> Vec<GameEvent> {
    let ticks = (secs / TICK).round() as u32;
    let mut events = Vec::new();
    for _ in 0..ticks {
        events.extend(engine.tick(TICK, input).events);
    }
    events
}

fn shoot_input() -> InputState {
    InputState {
        shoot: true,
        ..Default::default()
    }
}

// ---- Phases and commands ----

#[test]
fn starts_in_menu_with_frozen_clock() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    assert_eq!(engine.phase(), GamePhase::Menu);

    let snapshot = advance(&mut engine, 1.0, &InputState::default());
    assert_eq!(snapshot.phase, GamePhase::Menu);
    assert_eq!(snapshot.time.tick, 0);
    assert_eq!(snapshot.time.elapsed_secs, 0.0);
}

#[test]
fn start_game_enters_wave_one() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartGame);
    let snapshot = engine.tick(TICK, &InputState::default());

    assert_eq!(snapshot.phase, GamePhase::Playing);
    assert_eq!(snapshot.wave, 1);
    assert_eq!(snapshot.score, 0);
    assert!(snapshot
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::WaveStarted { wave: 1, boss: false })));
    // The first staggered spawn is due immediately.
    assert_eq!(snapshot.zombies.len(), 1);
}

#[test]
fn start_game_outside_menu_is_ignored() {
    let mut engine = started_engine(1);
    let before = engine.time().elapsed_secs;
    engine.queue_command(PlayerCommand::StartGame);
    let snapshot = engine.tick(TICK, &InputState::default());
    // No session reset: the clock keeps running.
    assert!(snapshot.time.elapsed_secs > before);
}

#[test]
fn pause_freezes_the_simulation() {
    let mut engine = started_engine(2);
    engine.queue_command(PlayerCommand::Pause);
    let paused = engine.tick(TICK, &InputState::default());
    assert_eq!(paused.phase, GamePhase::Paused);

    // Time, zombies, and weapons are all inert while paused.
    let later = advance(&mut engine, 1.0, &shoot_input());
    assert_eq!(later.time.elapsed_secs, paused.time.elapsed_secs);
    assert_eq!(later.zombies, paused.zombies);
    assert_eq!(later.weapon.ammo, 12);

    engine.queue_command(PlayerCommand::Resume);
    let resumed = engine.tick(TICK, &InputState::default());
    assert_eq!(resumed.phase, GamePhase::Playing);
    assert!(resumed.time.elapsed_secs > paused.time.elapsed_secs);
}

#[test]
fn pause_and_resume_require_matching_phases() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::Pause);
    assert_eq!(engine.tick(TICK, &InputState::default()).phase, GamePhase::Menu);

    let mut engine = started_engine(3);
    engine.queue_command(PlayerCommand::Resume);
    assert_eq!(engine.tick(TICK, &InputState::default()).phase, GamePhase::Playing);
}

#[test]
fn player_death_ends_the_game() {
    let mut engine = started_engine(4);
    engine.player_mut().take_damage(1000.0);
    let snapshot = engine.tick(TICK, &InputState::default());

    assert_eq!(snapshot.phase, GamePhase::GameOver);
    assert!(snapshot
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::GameOver { wave: 1, .. })));

    // The world is frozen afterwards.
    let frozen = advance(&mut engine, 1.0, &shoot_input());
    assert_eq!(frozen.time.elapsed_secs, snapshot.time.elapsed_secs);
    assert_eq!(frozen.weapon.ammo, 12);
}

#[test]
fn restart_carries_wave_forward_and_keeps_score() {
    let mut engine = started_engine(5);

    // Restart is only valid from GameOver.
    engine.queue_command(PlayerCommand::Restart);
    assert_eq!(engine.tick(TICK, &InputState::default()).wave, 1);

    engine.player_mut().take_damage(1000.0);
    engine.tick(TICK, &InputState::default());
    let score = engine.score();

    engine.queue_command(PlayerCommand::Restart);
    let snapshot = engine.tick(TICK, &InputState::default());
    assert_eq!(snapshot.phase, GamePhase::Playing);
    assert_eq!(snapshot.wave, 2);
    assert_eq!(snapshot.score, score);
    assert_eq!(snapshot.player.health, PLAYER_BASE_HEALTH);
    assert_eq!(snapshot.time.tick, 1);
    assert!(snapshot
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::WaveStarted { wave: 2, .. })));
}

#[test]
fn return_to_menu_resets_everything() {
    let mut engine = started_engine(6);
    engine.queue_command(PlayerCommand::UpgradeSkill {
        skill: SkillKind::Damage,
    });
    engine.tick(TICK, &InputState::default());

    engine.queue_command(PlayerCommand::ReturnToMenu);
    let snapshot = engine.tick(TICK, &InputState::default());
    assert_eq!(snapshot.phase, GamePhase::Menu);
    assert_eq!(snapshot.wave, 1);
    assert_eq!(snapshot.score, 0);
    assert!(snapshot.zombies.is_empty());
    assert_eq!(snapshot.player.skill_points, INITIAL_SKILL_POINTS);
    assert_eq!(snapshot.player.skills.damage, 0);
}

#[test]
fn upgrade_skill_command_spends_a_point_while_playing() {
    let mut engine = started_engine(7);
    engine.queue_command(PlayerCommand::UpgradeSkill {
        skill: SkillKind::Damage,
    });
    let snapshot = engine.tick(TICK, &InputState::default());
    assert_eq!(snapshot.player.skills.damage, 1);
    assert_eq!(snapshot.player.skill_points, INITIAL_SKILL_POINTS - 1);

    // Ignored from the menu.
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::UpgradeSkill {
        skill: SkillKind::Health,
    });
    let snapshot = engine.tick(TICK, &InputState::default());
    assert_eq!(snapshot.player.skills.health, 0);
    assert_eq!(snapshot.player.skill_points, INITIAL_SKILL_POINTS);
}

#[test]
fn toggle_mute_flips_the_flag() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::ToggleMute);
    assert!(engine.tick(TICK, &InputState::default()).muted);
    engine.queue_command(PlayerCommand::ToggleMute);
    assert!(!engine.tick(TICK, &InputState::default()).muted);
}

// ---- Movement ----

#[test]
fn player_runs_forward_and_stops_at_the_boundary() {
    let mut engine = started_engine(8);
    engine.clear_wave();
    let input = InputState {
        forward: true,
        run: true,
        ..Default::default()
    };

    // Yaw 0 faces -z; run speed is 8 * 1.5 = 12 m/s.
    let snapshot = advance(&mut engine, 1.0, &input);
    assert!((snapshot.player.position.z + 12.0).abs() < 1e-6);
    assert_eq!(snapshot.player.position.x, 0.0);
    assert_eq!(snapshot.player.position.y, EYE_HEIGHT);

    // Long before the clamp the boundary wall blocks the probe.
    let snapshot = advance(&mut engine, 10.0, &input);
    assert!(snapshot.player.position.z > -ARENA_HALF_DEPTH);
    assert!(snapshot.player.position.z < -44.0);
}

#[test]
fn diagonal_movement_is_normalized() {
    let mut engine = started_engine(9);
    engine.clear_wave();
    let input = InputState {
        forward: true,
        rightward: true,
        ..Default::default()
    };
    let snapshot = advance(&mut engine, 1.0, &input);
    let p = snapshot.player.position;
    let travelled = (p.x * p.x + p.z * p.z).sqrt();
    assert!((travelled - PLAYER_BASE_SPEED).abs() < 1e-6);
}

// ---- Weapons and bullets ----

#[test]
fn fire_rate_gates_successive_shots() {
    let mut engine = started_engine(10);
    engine.clear_wave();

    let snapshot = engine.tick(TICK, &shoot_input());
    assert_eq!(snapshot.weapon.ammo, 11);
    assert_eq!(snapshot.bullets.len(), 1);
    assert!(snapshot
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ShotFired { weapon: WeaponKind::Pistol })));

    // One tick later the pistol's 333 ms interval has not elapsed.
    let snapshot = engine.tick(TICK, &shoot_input());
    assert_eq!(snapshot.weapon.ammo, 11);
    assert_eq!(snapshot.bullets.len(), 1);

    // Well past the interval exactly one more shot fires.
    let snapshot = advance(&mut engine, 0.4, &shoot_input());
    assert_eq!(snapshot.weapon.ammo, 10);
}

#[test]
fn bullet_expires_at_max_range() {
    let mut engine = started_engine(11);
    engine.clear_wave();

    let snapshot = engine.tick(TICK, &shoot_input());
    assert_eq!(snapshot.bullets.len(), 1);

    // 100 m at 50 m/s: alive at 1.9 s of flight, gone past 2 s.
    let snapshot = advance(&mut engine, 1.9, &InputState::default());
    assert_eq!(snapshot.bullets.len(), 1);
    let snapshot = advance(&mut engine, 0.3, &InputState::default());
    assert!(snapshot.bullets.is_empty());
}

#[test]
fn reload_refills_after_the_delay_and_blocks_shooting() {
    let mut engine = started_engine(12);
    engine.clear_wave();

    engine.tick(TICK, &shoot_input());
    let reload = InputState {
        reload: true,
        ..Default::default()
    };
    let snapshot = engine.tick(TICK, &reload);
    assert!(snapshot.weapon.reloading);
    assert!(snapshot.weapon.reload_remaining_secs > 1.9);
    assert!(snapshot
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ReloadStarted { weapon: WeaponKind::Pistol })));

    // Shooting is blocked mid-reload.
    let snapshot = advance(&mut engine, 1.0, &shoot_input());
    assert!(snapshot.weapon.reloading);
    assert_eq!(snapshot.weapon.ammo, 11);

    let events = advance_collecting(&mut engine, 1.2, &InputState::default());
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::ReloadFinished { weapon: WeaponKind::Pistol })));
    let snapshot = engine.tick(TICK, &InputState::default());
    assert_eq!(snapshot.weapon.ammo, 12);
    assert!(!snapshot.weapon.reloading);
}

#[test]
fn switching_slots_does_not_cancel_a_reload() {
    let mut engine = started_engine(13);
    engine.clear_wave();

    engine.tick(TICK, &shoot_input());
    engine.tick(
        TICK,
        &InputState {
            reload: true,
            ..Default::default()
        },
    );
    let snapshot = engine.tick(
        TICK,
        &InputState {
            slot2: true,
            ..Default::default()
        },
    );
    assert_eq!(snapshot.weapon.kind, WeaponKind::Rifle);
    assert!(snapshot.weapon.reloading);

    let events = advance_collecting(&mut engine, 2.2, &InputState::default());
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::ReloadFinished { weapon: WeaponKind::Pistol })));
    assert_eq!(engine.arsenal().weapon(0).map(|w| w.ammo), Some(12));
    assert_eq!(engine.arsenal().current().kind, WeaponKind::Rifle);
}

#[test]
fn stale_reload_from_a_previous_session_never_lands() {
    let mut engine = started_engine(14);
    engine.clear_wave();

    // Start a reload, then abandon the session before it completes.
    engine.tick(TICK, &shoot_input());
    engine.tick(
        TICK,
        &InputState {
            reload: true,
            ..Default::default()
        },
    );
    engine.queue_command(PlayerCommand::ReturnToMenu);
    engine.tick(TICK, &InputState::default());

    engine.queue_command(PlayerCommand::StartGame);
    engine.tick(TICK, &InputState::default());
    engine.clear_wave();
    let snapshot = engine.tick(TICK, &shoot_input());
    assert_eq!(snapshot.weapon.ammo, 11);

    // Run the new session well past the old task's deadline.
    let events = advance_collecting(&mut engine, 2.5, &InputState::default());
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::ReloadFinished { .. })));
    let snapshot = engine.tick(TICK, &InputState::default());
    assert_eq!(snapshot.weapon.ammo, 11);
    assert!(!snapshot.weapon.reloading);
}

// ---- Zombies and combat ----

#[test]
fn bullets_kill_zombies_and_award_score_and_xp() {
    let mut engine = started_engine(15);
    engine.clear_wave();
    engine.spawn_test_zombie(Position::new(0.0, 0.9, -5.0), 1.0, 0.0, 10.0);
    engine.spawn_test_zombie(Position::new(0.0, 0.9, -7.0), 1.0, 0.0, 10.0);
    engine.spawn_test_zombie(Position::new(0.0, 0.9, -9.0), 1.0, 0.0, 10.0);

    let events = advance_collecting(&mut engine, 1.5, &shoot_input());
    let kills = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ZombieKilled { .. }))
        .count();
    assert_eq!(kills, 3);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::WaveComplete { wave: 1 })));
    // 150 XP crosses the 100 XP threshold for level 2.
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::LevelUp { level: 2 })));
    assert_eq!(engine.player().level, 2);
    assert_eq!(engine.player().skill_points, INITIAL_SKILL_POINTS + 1);
    // Grace delay has not elapsed yet.
    assert_eq!(engine.wave(), 1);
    assert_eq!(engine.score(), 300);
}

#[test]
fn wave_advances_once_after_the_grace_delay() {
    let mut engine = started_engine(16);
    engine.clear_wave();
    engine.spawn_test_zombie(Position::new(0.0, 0.9, -5.0), 1.0, 0.0, 10.0);
    engine.spawn_test_zombie(Position::new(0.0, 0.9, -7.0), 1.0, 0.0, 10.0);
    engine.spawn_test_zombie(Position::new(0.0, 0.9, -9.0), 1.0, 0.0, 10.0);

    let mut events = advance_collecting(&mut engine, 1.5, &shoot_input());
    events.extend(advance_collecting(&mut engine, 2.0, &InputState::default()));

    assert_eq!(engine.wave(), 2);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::WaveComplete { .. }))
            .count(),
        1
    );
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::WaveStarted { wave: 2, .. })));
    // 3 kills plus the wave 1 completion bonus.
    assert_eq!(engine.score(), 3 * SCORE_PER_KILL + WAVE_BONUS_MULT);
}

#[test]
fn surviving_zombie_reports_a_hit() {
    let mut engine = started_engine(17);
    engine.clear_wave();
    let id = engine.spawn_test_zombie(Position::new(0.0, 0.9, -5.0), 200.0, 0.0, 10.0);

    let events = advance_collecting(&mut engine, 0.3, &shoot_input());
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::ZombieHit { zombie_id } if *zombie_id == id)));
    let snapshot = engine.tick(TICK, &InputState::default());
    let zombie = snapshot.zombies.iter().find(|z| z.id == id).unwrap();
    // One pistol hit at base damage.
    assert_eq!(zombie.health, 200.0 - 25.0);
    assert!(!zombie.dead);
}

#[test]
fn corpse_lingers_then_despawns() {
    let mut engine = started_engine(18);
    engine.clear_wave();
    let id = engine.spawn_test_zombie(Position::new(0.0, 0.9, -5.0), 1.0, 0.0, 10.0);

    advance(&mut engine, 0.3, &shoot_input());
    let snapshot = engine.tick(TICK, &InputState::default());
    let zombie = snapshot.zombies.iter().find(|z| z.id == id).unwrap();
    assert!(zombie.dead);
    assert_eq!(engine.live_zombies(), 0);
    // The corpse no longer has a collision box.
    assert!(engine.collision().get(id).is_none());

    let snapshot = advance(&mut engine, 3.2, &InputState::default());
    assert!(snapshot.zombies.iter().all(|z| z.id != id));
}

#[test]
fn zombies_pursue_the_player() {
    let mut engine = started_engine(19);
    engine.clear_wave();
    let id = engine.spawn_test_zombie(Position::new(0.0, 0.9, -10.0), 100.0, 2.0, 5.0);

    let snapshot = advance(&mut engine, 1.0, &InputState::default());
    let zombie = snapshot.zombies.iter().find(|z| z.id == id).unwrap();
    assert!((zombie.position.z + 8.0).abs() < 1e-6);
    assert_eq!(zombie.position.x, 0.0);
    // The collision registry tracks the movement.
    let b = engine.collision().get(id).unwrap();
    assert!((b.position.z + 8.0).abs() < 1e-6);
}

#[test]
fn contact_attacks_respect_the_cooldown() {
    let mut engine = started_engine(20);
    engine.clear_wave();
    engine.spawn_test_zombie(Position::new(0.0, 0.9, -1.0), 100.0, 0.0, 10.0);

    let snapshot = engine.tick(TICK, &InputState::default());
    assert_eq!(snapshot.player.health, 90.0);

    // Within the 1 s cooldown nothing lands.
    let snapshot = advance(&mut engine, 0.9, &InputState::default());
    assert_eq!(snapshot.player.health, 90.0);

    let snapshot = advance(&mut engine, 0.2, &InputState::default());
    assert_eq!(snapshot.player.health, 80.0);
}

// ---- Determinism ----

#[test]
fn same_seed_and_inputs_give_identical_snapshots() {
    let input = InputState {
        forward: true,
        shoot: true,
        look_dx: 3.0,
        ..Default::default()
    };
    let mut a = SimulationEngine::new(SimConfig { seed: 7 });
    let mut b = SimulationEngine::new(SimConfig { seed: 7 });
    a.queue_command(PlayerCommand::StartGame);
    b.queue_command(PlayerCommand::StartGame);

    for _ in 0..300 {
        let sa = serde_json::to_string(&a.tick(TICK, &input)).unwrap();
        let sb = serde_json::to_string(&b.tick(TICK, &input)).unwrap();
        assert_eq!(sa, sb);
    }
}

#[test]
fn different_seeds_place_spawns_differently() {
    let mut a = SimulationEngine::new(SimConfig { seed: 1 });
    let mut b = SimulationEngine::new(SimConfig { seed: 2 });
    a.queue_command(PlayerCommand::StartGame);
    b.queue_command(PlayerCommand::StartGame);
    let sa = a.tick(TICK, &InputState::default());
    let sb = b.tick(TICK, &InputState::default());
    assert_ne!(sa.zombies[0].position, sb.zombies[0].position);
}

// ---- Wave scaling ----

#[test]
fn wave_config_scales_and_caps() {
    let w1 = WaveConfig::for_wave(1);
    assert_eq!(w1.zombie_count, 25);
    assert_eq!(w1.zombie_health, 110.0);
    assert_eq!(w1.zombie_damage, 12.0);
    assert!(!w1.boss_wave);

    let w4 = WaveConfig::for_wave(4);
    assert_eq!(w4.zombie_count, 40);

    // Count caps at 50 from wave 6 on.
    assert_eq!(WaveConfig::for_wave(6).zombie_count, 50);
    assert_eq!(WaveConfig::for_wave(30).zombie_count, 50);

    // Spawn stagger decays to its floor.
    assert!((WaveConfig::for_wave(10).spawn_delay_secs - 0.3).abs() < 1e-12);
    assert_eq!(WaveConfig::for_wave(30).spawn_delay_secs, 0.2);

    assert!(WaveConfig::for_wave(5).boss_wave);
    assert!(WaveConfig::for_wave(10).boss_wave);
    assert!(!WaveConfig::for_wave(11).boss_wave);
}

#[test]
fn boss_wave_leads_with_a_boss() {
    let mut engine = SimulationEngine::new(SimConfig { seed: 21 });
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick(TICK, &InputState::default());

    // Die and restart until the session begins at wave 5.
    for _ in 0..3 {
        engine.player_mut().take_damage(1000.0);
        engine.tick(TICK, &InputState::default());
        engine.queue_command(PlayerCommand::Restart);
        engine.tick(TICK, &InputState::default());
    }
    assert_eq!(engine.wave(), 4);

    engine.player_mut().take_damage(1000.0);
    engine.tick(TICK, &InputState::default());
    engine.queue_command(PlayerCommand::Restart);
    let snapshot = engine.tick(TICK, &InputState::default());

    assert_eq!(snapshot.wave, 5);
    assert!(snapshot
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::WaveStarted { wave: 5, boss: true })));
    // The lead spawn of a boss wave carries the boss multipliers.
    let boss = &snapshot.zombies[0];
    assert!(boss.boss);
    assert_eq!(boss.max_health, (100.0 + 5.0 * 10.0) * BOSS_HEALTH_MULT);
}

// ---- Arsenal ----

#[test]
fn arsenal_gates_by_interval_and_ammo() {
    let mut arsenal = Arsenal::new();
    assert!(arsenal.can_shoot(0.0));
    arsenal.register_shot(0.0);
    // Pistol interval is 1000/3 ms.
    assert!(!arsenal.can_shoot(0.2));
    assert!(arsenal.can_shoot(0.4));

    for i in 0..11 {
        arsenal.register_shot(1.0 + i as f64);
    }
    assert_eq!(arsenal.current().ammo, 0);
    assert!(!arsenal.can_shoot(100.0));
}

#[test]
fn arsenal_reload_state_machine() {
    let mut arsenal = Arsenal::new();
    // Full magazine: nothing to reload.
    assert!(arsenal.start_reload(0.0, 1.0).is_none());

    arsenal.register_shot(0.0);
    let reload = arsenal.start_reload(1.0, 1.0).unwrap();
    assert_eq!(reload.slot, 0);
    assert_eq!(reload.done_at_secs, 3.0);
    assert!(arsenal.is_reloading());
    assert!(!arsenal.can_shoot(10.0));

    // A second request while pending is refused.
    assert!(arsenal.start_reload(1.5, 1.0).is_none());
    // Wrong slot does not complete it.
    assert!(arsenal.finish_reload(2).is_none());
    assert!(arsenal.is_reloading());

    assert_eq!(arsenal.finish_reload(0), Some(WeaponKind::Pistol));
    assert_eq!(arsenal.current().ammo, 12);
    assert!(!arsenal.is_reloading());
}

#[test]
fn arsenal_reload_duration_scales_with_the_multiplier() {
    let mut arsenal = Arsenal::new();
    arsenal.register_shot(0.0);
    // Two reload skill ranks: 2 s * (1 - 0.4).
    let reload = arsenal.start_reload(0.0, 0.6).unwrap();
    assert!((reload.done_at_secs - 1.2).abs() < 1e-12);
}

#[test]
fn arsenal_select_ignores_bad_slots() {
    let mut arsenal = Arsenal::new();
    arsenal.select(2);
    assert_eq!(arsenal.current().kind, WeaponKind::Shotgun);
    arsenal.select(5);
    assert_eq!(arsenal.current().kind, WeaponKind::Shotgun);
}

// ---- Schedule ----

#[test]
fn schedule_fires_due_tasks_and_keeps_future_ones() {
    let mut schedule = Schedule::new();
    schedule.push(0.5, TaskKind::AdvanceWave);
    schedule.push(2.0, TaskKind::SpawnZombie { boss: false });

    assert_eq!(schedule.take_due(1.0), vec![TaskKind::AdvanceWave]);
    assert_eq!(schedule.pending(), 1);
    assert_eq!(
        schedule.take_due(2.0),
        vec![TaskKind::SpawnZombie { boss: false }]
    );
    assert_eq!(schedule.pending(), 0);
}

#[test]
fn schedule_drops_tasks_from_stale_generations() {
    let mut schedule = Schedule::new();
    schedule.push(1.0, TaskKind::FinishReload { slot: 0 });
    schedule.invalidate();
    schedule.push(1.0, TaskKind::SpawnZombie { boss: true });

    assert_eq!(schedule.pending(), 1);
    assert_eq!(
        schedule.take_due(5.0),
        vec![TaskKind::SpawnZombie { boss: true }]
    );
}

#[test]
fn schedule_cancel_where_removes_matching_tasks() {
    let mut schedule = Schedule::new();
    schedule.push(1.0, TaskKind::SpawnZombie { boss: false });
    schedule.push(1.0, TaskKind::SpawnZombie { boss: false });
    schedule.push(1.5, TaskKind::AdvanceWave);

    schedule.cancel_where(|task| matches!(task, TaskKind::SpawnZombie { .. }));
    assert_eq!(schedule.take_due(5.0), vec![TaskKind::AdvanceWave]);
}
