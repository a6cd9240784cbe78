//! Attack plans: что агент решил сделать в Deciding

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Выбранная атака (результат decision)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum AttackPlan {
    /// Эффект + сразу reset cooldown
    CloseRange,
    /// Announce → delay → relocate к цели → face → follow-up
    Teleport { follow_up: FollowUp },
    /// N рывков к точке за целью
    Charge { repeats: u32 },
}

/// Что делаем после телепорта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum FollowUp {
    CloseRange,
    Charge { repeats: u32 },
}

impl AttackPlan {
    pub fn label(&self) -> &'static str {
        match self {
            AttackPlan::CloseRange => "close-range",
            AttackPlan::Teleport { follow_up: FollowUp::CloseRange } => "teleport+close-range",
            AttackPlan::Teleport { follow_up: FollowUp::Charge { .. } } => "teleport+charge",
            AttackPlan::Charge { .. } => "charge",
        }
    }
}

/// Health tier: какие атаки доступны при health fraction ≥ `min_health_fraction`
///
/// `near`: цель в пределах close range, `far`: дальше.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthTier {
    pub min_health_fraction: f32,
    pub near: AttackPlan,
    pub far: AttackPlan,
}
