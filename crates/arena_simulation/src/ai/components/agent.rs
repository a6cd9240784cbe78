//! HostileAgent components: привязка к цели и per-tick снимок сенсоров.

use bevy::prelude::*;

use crate::ai::routine::AttackRoutine;

/// Hostile AI агент (boss / enemy): поведение задаётся AgentProfile
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostileAgent {
    /// Кого преследуем и атакуем (должен иметь Target + Transform)
    pub target: Entity,
}

/// Снимок цели, пересчитывается в начале каждого fixed tick
///
/// distance/direction: планарные (XZ), Y игнорируется.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TargetSense {
    pub has_target: bool,
    pub distance: f32,
    pub direction: Vec3,
    pub target_position: Vec3,
    pub target_forward: Vec3,
    pub target_vulnerable: bool,
    /// Множитель времени агента (1.0, или 1/slow_factor пока цель уязвима)
    pub time_scale: f32,
}

impl Default for TargetSense {
    fn default() -> Self {
        Self {
            has_target: false,
            distance: 0.0,
            direction: Vec3::ZERO,
            target_position: Vec3::ZERO,
            target_forward: Vec3::NEG_Z,
            target_vulnerable: false,
            time_scale: 1.0,
        }
    }
}

impl TargetSense {
    /// dt агента с учётом замедления
    pub fn scaled(&self, dt: f32) -> f32 {
        dt * self.time_scale
    }
}

/// Текущая attack routine (None вне Acting)
#[derive(Component, Debug, Default)]
pub struct CurrentAttack {
    pub routine: Option<AttackRoutine>,
}
