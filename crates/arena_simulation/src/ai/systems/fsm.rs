//! FSM AI systems (state transitions, attack routines).

use bevy::prelude::*;

use crate::ai::routine::{AttackRoutine, RoutineContext};
use crate::ai::timers::MovementTimers;
use crate::ai::{
    reset_action_cooldown, ActionCooldown, AgentState, AttackFinished, AttackGuard, AttackStarted,
    ChargeDashCompleted, CurrentAttack, DecisionInput, EffectRequested, HostileAgent, TargetSense,
    Transition,
};
use crate::components::{Health, MoveSpeed};
use crate::config::AgentProfile;
use crate::DeterministicRng;

/// Система: AI FSM transitions (Cooldown → Deciding → Acting)
///
/// Единственное место где меняется AgentState (кроме reset после routine).
/// Без цели FSM стоит на месте.
pub fn agent_fsm_transitions(
    mut agents: Query<
        (
            Entity,
            &mut AgentState,
            &mut ActionCooldown,
            &mut AttackGuard,
            &mut CurrentAttack,
            &AgentProfile,
            &Health,
            &TargetSense,
        ),
        With<HostileAgent>,
    >,
    mut rng: ResMut<DeterministicRng>,
    mut started: EventWriter<AttackStarted>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut state, mut cooldown, mut guard, mut current, profile, health, sense) in
        agents.iter_mut()
    {
        if !sense.has_target {
            continue;
        }

        let input = DecisionInput {
            distance_to_target: sense.distance,
            health_fraction: health.fraction(),
        };

        // Cooldown → Deciding и Deciding → Acting могут случиться в один tick
        let mut transition = state.step(&mut cooldown, &mut guard, input, profile, sense.scaled(delta));
        if transition == Transition::ReadyToDecide {
            transition = state.step(&mut cooldown, &mut guard, input, profile, 0.0);
        }

        match transition {
            Transition::Stay | Transition::ReadyToDecide => {}

            Transition::Launch(plan) => {
                crate::log(&format!(
                    "AI: {:?} → {} (distance {:.2}, health {:.2})",
                    entity,
                    plan.label(),
                    input.distance_to_target,
                    input.health_fraction
                ));
                current.routine = Some(AttackRoutine::new(plan, profile));
                started.write(AttackStarted { agent: entity, plan });
            }

            Transition::Hold => {
                crate::log(&format!(
                    "AI: {:?} has no attack for health {:.2}, waiting",
                    entity, input.health_fraction
                ));
                reset_action_cooldown(&mut state, &mut cooldown, &mut guard, profile, &mut rng.rng);
            }

            Transition::Dropped => {
                crate::log_warning(&format!(
                    "AI: {:?} decision dropped (attack already running)",
                    entity
                ));
            }
        }
    }
}

/// Система: продвижение attack routines (по одному шагу-suspend за tick)
///
/// По завершении: новый cooldown из [min, max], guard снят, AttackFinished.
pub fn advance_attack_routines(
    mut agents: Query<
        (
            Entity,
            &mut Transform,
            &mut MoveSpeed,
            &mut MovementTimers,
            &mut CurrentAttack,
            &mut AgentState,
            &mut ActionCooldown,
            &mut AttackGuard,
            &AgentProfile,
            &TargetSense,
        ),
        With<HostileAgent>,
    >,
    mut rng: ResMut<DeterministicRng>,
    mut effects: EventWriter<EffectRequested>,
    mut dashes: EventWriter<ChargeDashCompleted>,
    mut finished: EventWriter<AttackFinished>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (
        entity,
        mut transform,
        mut speed,
        mut timers,
        mut current,
        mut state,
        mut cooldown,
        mut guard,
        profile,
        sense,
    ) in agents.iter_mut()
    {
        if *state != AgentState::Acting {
            continue;
        }

        let Some(routine) = current.routine.as_mut() else {
            // Acting без routine (guard остался от прерванной атаки) → назад в Cooldown
            crate::log_warning(&format!("AI: {:?} acting without routine, resetting", entity));
            reset_action_cooldown(&mut state, &mut cooldown, &mut guard, profile, &mut rng.rng);
            continue;
        };

        if !sense.has_target {
            continue;
        }

        let mut ctx = RoutineContext {
            transform: &mut *transform,
            speed: &mut *speed,
            timers: &mut *timers,
            sense,
            profile,
        };
        let output = routine.advance(&mut ctx, sense.scaled(delta));

        for effect in output.effects {
            effects.write(EffectRequested {
                source: entity,
                effect,
                position: transform.translation,
            });
        }

        for dash_index in output.dashes_completed {
            dashes.write(ChargeDashCompleted {
                agent: entity,
                dash_index,
            });
        }

        if output.finished {
            let plan = routine.plan();
            current.routine = None;
            reset_action_cooldown(&mut state, &mut cooldown, &mut guard, profile, &mut rng.rng);

            crate::log(&format!(
                "AI: {:?} finished {}, next decision in {:.2}s",
                entity,
                plan.label(),
                cooldown.remaining
            ));
            finished.write(AttackFinished {
                agent: entity,
                plan,
                next_cooldown: cooldown.remaining,
            });
        }
    }
}
