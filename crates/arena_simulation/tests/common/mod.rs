//! Общие helpers для integration тестов: headless arena + запись событий

#![allow(dead_code)]

use bevy::prelude::*;

use arena_simulation::ai::{
    AttackFinished, AttackStarted, ChargeDashCompleted, EffectRequested, TargetContact,
};
use arena_simulation::{
    create_headless_app, DamageDealt, EntityDied, HeadlessNavigationPlugin, SimulationPlugin,
    Target, Vulnerability,
};

/// Всё что агенты отправили хосту за прогон
#[derive(Resource, Default, Debug)]
pub struct Recorded {
    pub started: Vec<AttackStarted>,
    pub finished: Vec<AttackFinished>,
    pub effects: Vec<EffectRequested>,
    pub dashes: Vec<ChargeDashCompleted>,
    pub contacts: Vec<TargetContact>,
    pub damage: Vec<DamageDealt>,
    pub died: Vec<EntityDied>,
}

fn record_events(
    mut recorded: ResMut<Recorded>,
    mut started: EventReader<AttackStarted>,
    mut finished: EventReader<AttackFinished>,
    mut effects: EventReader<EffectRequested>,
    mut dashes: EventReader<ChargeDashCompleted>,
    mut contacts: EventReader<TargetContact>,
    mut damage: EventReader<DamageDealt>,
    mut died: EventReader<EntityDied>,
) {
    recorded.started.extend(started.read().cloned());
    recorded.finished.extend(finished.read().cloned());
    recorded.effects.extend(effects.read().cloned());
    recorded.dashes.extend(dashes.read().cloned());
    recorded.contacts.extend(contacts.read().cloned());
    recorded.damage.extend(damage.read().cloned());
    recorded.died.extend(died.read().cloned());
}

/// Headless app со всеми plugins + запись событий
///
/// Делает один warmup update (нулевой delta), дальше каждый update = один fixed tick.
pub fn arena_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin, HeadlessNavigationPlugin))
        .init_resource::<Recorded>()
        .add_systems(Last, record_events);
    app.update();
    app
}

pub fn spawn_target(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Name::new("Player"),
            Target,
            Vulnerability::new(false),
            Transform::from_translation(position),
        ))
        .id()
}

pub fn run(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

pub fn recorded(app: &App) -> &Recorded {
    app.world().resource::<Recorded>()
}
