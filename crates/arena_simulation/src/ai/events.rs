//! AI Events: исходящие события агентов для хоста (VFX, звук, UI)

use bevy::prelude::*;

use crate::ai::AttackPlan;

/// Какой эффект проиграть (particle system хоста)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum EffectKind {
    CloseRange,
    Charge,
}

/// Запрос на проигрывание эффекта в позиции агента
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EffectRequested {
    pub source: Entity,
    pub effect: EffectKind,
    pub position: Vec3,
}

/// Агент начал атаку (Deciding → Acting)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AttackStarted {
    pub agent: Entity,
    pub plan: AttackPlan,
}

/// Routine закончена, cooldown сброшен
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AttackFinished {
    pub agent: Entity,
    pub plan: AttackPlan,
    pub next_cooldown: f32,
}

/// Рывок достиг точки (dash_index с 1)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ChargeDashCompleted {
    pub agent: Entity,
    pub dash_index: u32,
}

/// Агент коснулся своей цели (trigger от хоста)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct TargetContact {
    pub agent: Entity,
    pub target: Entity,
}
