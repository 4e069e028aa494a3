//! horde-headless: scripted soak runner for the simulation core.
//!
//! Drives a full session with a simple aim-and-shoot bot at a fixed
//! 60 Hz tick, logging wave and progression events. Useful for
//! profiling, balance checks, and verifying determinism from the
//! command line.
//!
//! Usage:
//!   horde-headless [--seed N] [--secs N] [--snapshot]

use std::process;

use log::{debug, info};

use horde_core::commands::PlayerCommand;
use horde_core::constants::MOUSE_SENSITIVITY;
use horde_core::enums::{GamePhase, SkillKind};
use horde_core::events::GameEvent;
use horde_core::input::InputState;
use horde_core::state::GameSnapshot;
use horde_sim::{SimConfig, SimulationEngine};

const TICK_SECS: f64 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let seed = parse_u64(&args, "--seed", 42);
    let secs = parse_f64(&args, "--secs", 60.0);
    let dump_snapshot = args.iter().any(|a| a == "--snapshot");

    if secs <= 0.0 {
        eprintln!("Error: --secs must be positive");
        process::exit(1);
    }

    let snapshot = run_session(seed, secs);

    info!(
        "session finished: phase={:?} wave={} score={} level={}",
        snapshot.phase, snapshot.wave, snapshot.score, snapshot.player.level
    );

    if dump_snapshot {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    }
}

fn print_usage() {
    eprintln!(
        "horde-headless: scripted soak runner for the HORDE simulation\n\
         \n\
         Options:\n\
         \n\
           --seed <N>   RNG seed (default: 42)\n\
           --secs <N>   Simulated seconds to run (default: 60)\n\
           --snapshot   Print the final snapshot as JSON on stdout\n"
    );
}

fn parse_u64(args: &[String], flag: &str, default: u64) -> u64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n;
            }
            eprintln!("Error: {flag} expects an integer");
            process::exit(1);
        }
    }
    default
}

fn parse_f64(args: &[String], flag: &str, default: f64) -> f64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<f64>() {
                return n;
            }
            eprintln!("Error: {flag} expects a number");
            process::exit(1);
        }
    }
    default
}

/// Run one scripted session until the time budget or the player dies.
fn run_session(seed: u64, secs: f64) -> GameSnapshot {
    let mut engine = SimulationEngine::new(SimConfig { seed });
    engine.queue_command(PlayerCommand::StartGame);
    info!("starting session: seed={seed} budget={secs}s");

    let ticks = (secs / TICK_SECS).ceil() as u64;
    let mut snapshot = engine.tick(TICK_SECS, &InputState::default());
    let mut skill_rotation = [
        SkillKind::Damage,
        SkillKind::Health,
        SkillKind::Speed,
        SkillKind::Reload,
    ]
    .into_iter()
    .cycle();

    for _ in 0..ticks {
        // Spend points as they arrive.
        if snapshot.player.skill_points > 0 {
            if let Some(skill) = skill_rotation.next() {
                engine.queue_command(PlayerCommand::UpgradeSkill { skill });
            }
        }

        let input = bot_input(&snapshot);
        snapshot = engine.tick(TICK_SECS, &input);
        log_events(&snapshot.events);

        if snapshot.phase == GamePhase::GameOver {
            break;
        }
    }

    snapshot
}

/// Aim at the nearest live zombie and hold the trigger; reload on an
/// empty magazine.
fn bot_input(snapshot: &GameSnapshot) -> InputState {
    let player = &snapshot.player;

    let target = snapshot
        .zombies
        .iter()
        .filter(|z| !z.dead)
        .min_by(|a, b| {
            let da = a.position.distance_to(&player.position);
            let db = b.position.distance_to(&player.position);
            da.total_cmp(&db)
        });

    let mut input = InputState::default();
    match target {
        Some(zombie) => {
            // Forward is (-sin yaw, -cos yaw); invert to a pointer delta.
            let dx = zombie.position.x - player.position.x;
            let dz = zombie.position.z - player.position.z;
            let desired_yaw = (-dx).atan2(-dz);
            input.look_dx = (player.yaw - desired_yaw) / MOUSE_SENSITIVITY;
            input.shoot = true;
        }
        None => {
            input.forward = true;
        }
    }

    if snapshot.weapon.ammo == 0 && !snapshot.weapon.reloading {
        input.reload = true;
        input.shoot = false;
    }

    input
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::WaveStarted { wave, boss } => info!("wave {wave} started (boss: {boss})"),
            GameEvent::WaveComplete { wave } => info!("wave {wave} complete"),
            GameEvent::LevelUp { level } => info!("level up -> {level}"),
            GameEvent::GameOver { wave, score } => info!("game over: wave={wave} score={score}"),
            GameEvent::ZombieKilled { zombie_id } => debug!("zombie {zombie_id} killed"),
            other => debug!("{other:?}"),
        }
    }
}
