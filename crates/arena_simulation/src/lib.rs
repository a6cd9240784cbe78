//! ARENA Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: hostile AI (boss / enemy) и поворотные платформы.
//!
//! Хост (движок) владеет рендером, физикой, NavMesh, частицами и UI;
//! ядро общается с ним через события (ContactEvent, TakeDamage, EffectRequested)
//! и компоненты (NavigationRequest, HealthDisplay).

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod events;
pub mod logger;
pub mod math;
pub mod navigation;
pub mod platform;

// Re-export базовых типов для удобства
pub use ai::{spawn_hostile_agent, AIPlugin, AgentState, HostileAgent, SpawnError};
pub use combat::{CombatPlugin, DamageDealt, EntityDied, HitSide, TakeDamage};
pub use components::*;
pub use config::{AgentProfile, ConfigError};
pub use events::ContactEvent;
pub use logger::*;
pub use navigation::HeadlessNavigationPlugin;
pub use platform::{PlatformPlugin, RetriggerPolicy, RotatingPlatform};

/// Fixed tick симуляции: 50Hz
pub const FIXED_TIMESTEP: Duration = Duration::from_millis(20);

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// HeadlessNavigationPlugin не входит: его подключает тот, у кого нет NavMesh.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_duration(FIXED_TIMESTEP));

        // Детерминистичный RNG (seed по умолчанию), если хост не задал свой
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.add_plugins((AIPlugin, CombatPlugin, PlatformPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Каждый `app.update()` двигает время ровно на FIXED_TIMESTEP
/// (первый update: нулевой delta), т.е. один FixedUpdate на update.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_duration(FIXED_TIMESTEP))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FIXED_TIMESTEP));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    // Собираем все компоненты в детерминированный формат
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
