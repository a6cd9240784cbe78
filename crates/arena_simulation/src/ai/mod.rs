//! AI module: HostileAgent (boss / enemy)
//!
//! FSM: Cooldown → Deciding → Acting → Cooldown.
//! Decision: чистая функция (distance + health tier), атака: явная routine
//! (очередь шагов), вспомогательные таймеры: timer queue.

use bevy::prelude::*;

pub mod components;
pub mod decision;
pub mod events;
pub mod routine;
pub mod spawn;
pub mod systems;
pub mod timers;


// Re-export основных типов
pub use components::*;
pub use decision::{decide_attack, select_tier};
pub use events::*;
pub use routine::{AttackRoutine, RoutineStep};
pub use spawn::{spawn_hostile_agent, SpawnError};
pub use systems::{
    advance_attack_routines, agent_fsm_transitions, chase_target, report_target_contacts,
    sense_targets,
};
pub use timers::{tick_movement_timers, MovementTimers, TimerAction};

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. sense_targets: снимок цели (distance, vulnerability, time scale)
/// 2. tick_movement_timers: timer queue (resume после charge wind-up)
/// 3. agent_fsm_transitions: cooldown/decision, запуск routine
/// 4. chase_target: движение + поворот в Cooldown
/// 5. advance_attack_routines: шаги routine, reset cooldown в конце
/// 6. report_target_contacts: "Hit!" при касании цели
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<EffectRequested>()
            .add_event::<AttackStarted>()
            .add_event::<AttackFinished>()
            .add_event::<ChargeDashCompleted>()
            .add_event::<TargetContact>()
            .add_event::<crate::events::ContactEvent>()
            .register_type::<AgentState>()
            .register_type::<ActionCooldown>()
            .register_type::<AttackGuard>()
            .register_type::<TargetSense>();

        app.add_systems(
            FixedUpdate,
            (
                sense_targets,
                tick_movement_timers,
                agent_fsm_transitions,
                chase_target,
                advance_attack_routines,
                report_target_contacts,
            )
                .chain(), // Последовательное выполнение для детерминизма
        );
    }
}
