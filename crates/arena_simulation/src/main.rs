//! Headless симуляция ARENA
//!
//! Boss (или профиль из JSON: `arena_simulation path/to/profile.json`)
//! преследует неподвижную цель, рядом поворотная платформа.

use std::process::ExitCode;

use bevy::prelude::*;

use arena_simulation::ai::{AttackFinished, AttackStarted};
use arena_simulation::config::presets;
use arena_simulation::{
    create_headless_app, log_error, log_info, spawn_hostile_agent, AgentProfile, ContactEvent,
    HeadlessNavigationPlugin, RotatingPlatform, SimulationPlugin, Target, Vulnerability,
};

const TICKS: u32 = 1500;

fn main() -> ExitCode {
    let seed = 42;

    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin, HeadlessNavigationPlugin))
        .add_systems(FixedUpdate, report_attacks);

    let profile = match load_profile(std::env::args().nth(1)) {
        Ok(profile) => profile,
        Err(message) => {
            log_error(&message);
            return ExitCode::FAILURE;
        }
    };
    log_info(&format!(
        "Starting ARENA headless simulation (seed: {}, profile: {})",
        seed, profile.name
    ));

    let world = app.world_mut();
    let player = world
        .spawn((
            Name::new("Player"),
            Target,
            Vulnerability::new(false),
            Transform::from_xyz(0.0, 0.0, 0.0),
        ))
        .id();

    if let Err(error) = spawn_hostile_agent(world, profile, Vec3::new(0.0, 0.0, 20.0), player) {
        log_error(&format!("Spawn failed: {}", error));
        return ExitCode::FAILURE;
    }

    let platform = world
        .spawn((
            Name::new("Platform"),
            RotatingPlatform::new(player),
            Transform::from_xyz(5.0, 0.0, 0.0),
        ))
        .id();
    world.send_event(ContactEvent::new(player, platform));

    for tick in 0..TICKS {
        app.update();

        if tick % 250 == 0 {
            let entity_count = app.world().entities().len();
            log_info(&format!("Tick {}: {} entities", tick, entity_count));
        }
    }

    log_info("Simulation complete!");
    ExitCode::SUCCESS
}

fn load_profile(path: Option<String>) -> Result<AgentProfile, String> {
    let Some(path) = path else {
        return Ok(presets::boss());
    };

    let json = std::fs::read_to_string(&path)
        .map_err(|error| format!("Cannot read profile {}: {}", path, error))?;
    AgentProfile::from_json_str(&json).map_err(|error| format!("Invalid profile {}: {}", path, error))
}

fn report_attacks(mut started: EventReader<AttackStarted>, mut finished: EventReader<AttackFinished>) {
    for event in started.read() {
        log_info(&format!("{:?} started {}", event.agent, event.plan.label()));
    }
    for event in finished.read() {
        log_info(&format!(
            "{:?} finished {} (next in {:.2}s)",
            event.agent,
            event.plan.label(),
            event.next_cooldown
        ));
    }
}
