//! FSM AI components (state machine, action cooldown, attack guard).

use bevy::prelude::*;
use rand::Rng;

use crate::ai::decision::decide_attack;
use crate::ai::AttackPlan;
use crate::config::AgentProfile;

/// AI FSM состояния HostileAgent
///
/// Cooldown → Deciding → Acting → Cooldown (смерть: ортогонально, через Health)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum AgentState {
    /// Chase + поворот к цели, тикает ActionCooldown
    #[default]
    Cooldown,

    /// Один tick: выбираем атаку по distance + health fraction
    Deciding,

    /// Работает AttackRoutine; сам state per-tick ничего не делает
    Acting,
}

/// Результат одного шага FSM
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Остаёмся в текущем state
    Stay,
    /// Cooldown истёк → Deciding
    ReadyToDecide,
    /// Deciding → Acting, запустить routine
    Launch(AttackPlan),
    /// Для текущего health нет tier'а → сразу reset cooldown
    Hold,
    /// Decision пришёл во время атаки → отброшен (не ставится в очередь)
    Dropped,
}

/// Входные данные для decision (снимок на текущий tick)
#[derive(Debug, Clone, Copy)]
pub struct DecisionInput {
    pub distance_to_target: f32,
    pub health_fraction: f32,
}

impl AgentState {
    /// Единственная transition функция FSM
    ///
    /// `dt` уже с учётом time scale агента.
    pub fn step(
        &mut self,
        cooldown: &mut ActionCooldown,
        guard: &mut AttackGuard,
        input: DecisionInput,
        profile: &AgentProfile,
        dt: f32,
    ) -> Transition {
        match *self {
            AgentState::Cooldown => {
                if cooldown.tick(dt) {
                    *self = AgentState::Deciding;
                    Transition::ReadyToDecide
                } else {
                    Transition::Stay
                }
            }

            AgentState::Deciding => {
                if guard.is_attacking {
                    *self = AgentState::Acting;
                    return Transition::Dropped;
                }

                match decide_attack(
                    &profile.repertoire,
                    input.health_fraction,
                    input.distance_to_target,
                    profile.actions.close_range_threshold,
                ) {
                    Some(plan) => {
                        guard.is_attacking = true;
                        *self = AgentState::Acting;
                        Transition::Launch(plan)
                    }
                    None => Transition::Hold,
                }
            }

            AgentState::Acting => Transition::Stay,
        }
    }
}

/// Таймер до следующего decision (секунды)
///
/// Инвариант: remaining ≥ 0, уменьшается только в Cooldown.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ActionCooldown {
    pub remaining: f32,
}

impl Default for ActionCooldown {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl ActionCooldown {
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: sanitize_seconds(seconds),
        }
    }

    /// Уменьшить таймер; true когда дошли до 0
    pub fn tick(&mut self, dt: f32) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
        self.remaining <= 0.0
    }

    /// Новый cooldown из [min, max] (uniform)
    pub fn reset_random(&mut self, rng: &mut impl Rng, min: f32, max: f32) {
        let (low, high) = (sanitize_seconds(min), sanitize_seconds(max));
        let seconds = if high > low {
            rng.gen_range(low..=high)
        } else {
            low
        };
        self.remaining = sanitize_seconds(seconds);
    }
}

fn sanitize_seconds(seconds: f32) -> f32 {
    if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        0.0
    }
}

/// Guard: не больше одной attack routine на агента
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct AttackGuard {
    pub is_attacking: bool,
}

/// ResetActionCooldown: новый таймер, снять guard, вернуться в Cooldown
pub fn reset_action_cooldown(
    state: &mut AgentState,
    cooldown: &mut ActionCooldown,
    guard: &mut AttackGuard,
    profile: &AgentProfile,
    rng: &mut impl Rng,
) {
    cooldown.reset_random(rng, profile.actions.min_cooldown, profile.actions.max_cooldown);
    guard.is_attacking = false;
    *state = AgentState::Cooldown;
}
