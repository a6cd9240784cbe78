//! Attack routines как явная очередь шагов
//!
//! Routine = VecDeque<RoutineStep>. Мгновенные шаги выполняются подряд,
//! suspend шаги (Wait, ChargeDash) отдают управление до следующего tick.
//! За один `advance` время (dt) тратит только один suspend шаг.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::ai::timers::{MovementTimers, TimerAction};
use crate::ai::{AttackPlan, EffectKind, FollowUp, TargetSense};
use crate::components::MoveSpeed;
use crate::config::AgentProfile;
use crate::math::{look_rotation_planar, move_towards, planar_distance_direction};

/// Один шаг routine
#[derive(Debug, Clone, PartialEq)]
pub enum RoutineStep {
    /// Лог-сообщение (telegraph для игрока/хоста)
    Announce(String),
    /// Suspend на `remaining` секунд
    Wait { remaining: f32 },
    /// Мгновенно встать перед целью: target.position + target.forward * distance
    Teleport,
    /// Мгновенно развернуться к цели (только yaw)
    FaceTarget,
    /// MoveSpeed → 0 на `duration`, параллельно (через timer queue)
    HaltMovement { duration: f32 },
    PlayEffect(EffectKind),
    /// Двигаться к точке за целью каждый tick, пока не ближе arrive_tolerance
    ChargeDash { destination: Option<Vec3> },
    /// Routine закончена → ResetActionCooldown
    Finish,
}

/// Мутабельное окружение routine на один tick
pub struct RoutineContext<'a> {
    pub transform: &'a mut Transform,
    pub speed: &'a mut MoveSpeed,
    pub timers: &'a mut MovementTimers,
    pub sense: &'a TargetSense,
    pub profile: &'a AgentProfile,
}

/// Что routine сделала за tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutineOutput {
    pub effects: Vec<EffectKind>,
    /// Индексы (с 1) рывков, завершённых в этот tick
    pub dashes_completed: Vec<u32>,
    pub finished: bool,
}

/// Одна запущенная атака агента
#[derive(Debug, Clone)]
pub struct AttackRoutine {
    plan: AttackPlan,
    steps: VecDeque<RoutineStep>,
    dashes_completed: u32,
}

impl AttackRoutine {
    pub fn new(plan: AttackPlan, profile: &AgentProfile) -> Self {
        let mut steps = VecDeque::new();

        match plan {
            AttackPlan::CloseRange => push_close_range(&mut steps),
            AttackPlan::Charge { repeats } => push_charges(&mut steps, repeats, profile),
            AttackPlan::Teleport { follow_up } => {
                let teleport = &profile.teleport;
                steps.push_back(RoutineStep::Announce(format!(
                    "Teleport in {} seconds.",
                    teleport.delay
                )));
                push_wait(&mut steps, teleport.delay);
                steps.push_back(RoutineStep::Teleport);
                steps.push_back(RoutineStep::FaceTarget);

                match follow_up {
                    FollowUp::CloseRange => {
                        push_wait(&mut steps, teleport.settle_time);
                        push_close_range(&mut steps);
                    }
                    FollowUp::Charge { repeats } => push_charges(&mut steps, repeats, profile),
                }
            }
        }

        steps.push_back(RoutineStep::Finish);

        Self {
            plan,
            steps,
            dashes_completed: 0,
        }
    }

    pub fn plan(&self) -> AttackPlan {
        self.plan
    }

    pub fn dashes_completed(&self) -> u32 {
        self.dashes_completed
    }

    pub fn steps(&self) -> impl Iterator<Item = &RoutineStep> {
        self.steps.iter()
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }

    /// Выполнить routine до следующей точки suspend (или до конца)
    ///
    /// `dt`: время агента (уже с time scale).
    pub fn advance(&mut self, ctx: &mut RoutineContext, dt: f32) -> RoutineOutput {
        let mut output = RoutineOutput::default();
        // dt тратится максимум одним suspend шагом за tick
        let mut consumed = false;

        while let Some(step) = self.steps.front_mut() {
            match step {
                RoutineStep::Announce(message) => {
                    crate::log_info(message);
                    self.steps.pop_front();
                }

                RoutineStep::Wait { remaining } => {
                    if consumed {
                        return output;
                    }
                    consumed = true;
                    *remaining = (*remaining - dt.max(0.0)).max(0.0);
                    if *remaining > 0.0 {
                        return output;
                    }
                    self.steps.pop_front();
                }

                RoutineStep::Teleport => {
                    let destination = ctx.sense.target_position
                        + ctx.sense.target_forward * ctx.profile.teleport.distance;
                    ctx.transform.translation = destination;
                    self.steps.pop_front();
                }

                RoutineStep::FaceTarget => {
                    face_target(ctx.transform, ctx.sense.target_position);
                    self.steps.pop_front();
                }

                RoutineStep::HaltMovement { duration } => {
                    // tick_movement_timers в этом tick уже отработал, а следующий Wait
                    // ещё потратит dt: вычитаем его, чтобы оба истекли в один tick
                    let elapsed = if consumed { 0.0 } else { dt.max(0.0) };
                    ctx.speed.halt();
                    ctx.timers
                        .schedule(*duration - elapsed, TimerAction::ResumeMovement);
                    self.steps.pop_front();
                }

                RoutineStep::PlayEffect(effect) => {
                    output.effects.push(*effect);
                    self.steps.pop_front();
                }

                RoutineStep::ChargeDash { destination } => {
                    let charge = &ctx.profile.charge;
                    // Направление от текущей позиции: sense снят до Teleport в этом tick
                    let origin = ctx.transform.translation;
                    let point = *destination.get_or_insert_with(|| {
                        let (_, direction) =
                            planar_distance_direction(origin, ctx.sense.target_position);
                        ctx.sense.target_position + direction * charge.offset
                    });

                    if ctx.transform.translation.distance(point) <= charge.arrive_tolerance {
                        self.dashes_completed += 1;
                        output.dashes_completed.push(self.dashes_completed);
                        self.steps.pop_front();
                        continue;
                    }

                    if consumed {
                        return output;
                    }
                    ctx.transform.translation =
                        move_towards(ctx.transform.translation, point, charge.speed * dt.max(0.0));
                    return output;
                }

                RoutineStep::Finish => {
                    self.steps.pop_front();
                    output.finished = true;
                    return output;
                }
            }
        }

        output
    }
}

/// Развернуть агента к точке по yaw (высота не важна)
pub fn face_target(transform: &mut Transform, target_position: Vec3) {
    if let Some(rotation) = look_rotation_planar(target_position - transform.translation) {
        transform.rotation = rotation;
    }
}

fn push_wait(steps: &mut VecDeque<RoutineStep>, seconds: f32) {
    if seconds > 0.0 {
        steps.push_back(RoutineStep::Wait { remaining: seconds });
    }
}

fn push_close_range(steps: &mut VecDeque<RoutineStep>) {
    steps.push_back(RoutineStep::Announce("Close range attack".to_string()));
    steps.push_back(RoutineStep::PlayEffect(EffectKind::CloseRange));
}

fn push_charges(steps: &mut VecDeque<RoutineStep>, repeats: u32, profile: &AgentProfile) {
    let charge = &profile.charge;
    for _ in 0..repeats {
        steps.push_back(RoutineStep::FaceTarget);
        steps.push_back(RoutineStep::Announce("Charging...".to_string()));
        steps.push_back(RoutineStep::HaltMovement {
            duration: charge.prepare_time,
        });
        push_wait(steps, charge.prepare_time);
        push_wait(steps, charge.extra_delay);
        steps.push_back(RoutineStep::PlayEffect(EffectKind::Charge));
        steps.push_back(RoutineStep::ChargeDash { destination: None });
    }
}
