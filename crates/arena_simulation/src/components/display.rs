//! Health bar компоненты (UI хоста читает, ECS пишет)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::Health;

/// Когда показывать health bar агента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum HealthBarMode {
    #[default]
    Hidden,
    Always,
    /// Только пока цель уязвима (enemy variant)
    WhenTargetVulnerable,
}

/// Состояние health bar для хоста
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HealthDisplay {
    pub mode: HealthBarMode,
    /// Заполнение 0..1
    pub fill: f32,
    pub visible: bool,
}

impl HealthDisplay {
    pub fn new(mode: HealthBarMode) -> Self {
        Self {
            mode,
            fill: 1.0,
            visible: mode == HealthBarMode::Always,
        }
    }

    pub fn refresh_fill(&mut self, health: &Health) {
        self.fill = health.fraction().clamp(0.0, 1.0);
    }

    pub fn refresh_visibility(&mut self, target_vulnerable: bool) {
        self.visible = match self.mode {
            HealthBarMode::Hidden => false,
            HealthBarMode::Always => true,
            HealthBarMode::WhenTargetVulnerable => target_vulnerable,
        };
    }
}
