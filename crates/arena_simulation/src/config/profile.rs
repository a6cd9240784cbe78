//! AgentProfile: все tunables одного HostileAgent
//!
//! Boss и Enemy: это не разные типы, а разные профили (см. presets).
//! Профиль живёт на entity как Component и читается всеми AI/combat системами.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::{AttackPlan, FollowUp, HealthTier};
use crate::components::{HealthBarMode, MotionMode};

/// Ошибки загрузки/валидации профиля
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse agent profile: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("action cooldown range is inverted: min {min} > max {max}")]
    CooldownRange { min: f32, max: f32 },

    #[error("attack repertoire is empty")]
    EmptyRepertoire,

    #[error("health tier #{index} has min_health_fraction {fraction} outside 0..=1")]
    InvalidTier { index: usize, fraction: f32 },
}

/// Движение и поворот во время Cooldown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub mode: MotionMode,
    /// м/с
    pub move_speed: f32,
    /// Ближе не подходим (0 = вплотную)
    pub stopping_distance: f32,
    /// Slerp factor в секунду (меньше = медленнее поворот)
    pub rotation_smoothing: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            mode: MotionMode::Navigation,
            move_speed: 5.0,
            stopping_distance: 0.0,
            rotation_smoothing: 5.0,
        }
    }
}

/// Таймеры цикла Cooldown → Deciding → Acting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionTuning {
    /// Cooldown сразу после спавна
    pub initial_cooldown: f32,
    pub min_cooldown: f32,
    pub max_cooldown: f32,
    /// distance ≤ threshold → near атака
    pub close_range_threshold: f32,
}

impl Default for ActionTuning {
    fn default() -> Self {
        Self {
            initial_cooldown: 5.0,
            min_cooldown: 5.0,
            max_cooldown: 10.0,
            close_range_threshold: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeleportTuning {
    /// Насколько перед целью (вдоль её forward) появляемся
    pub distance: f32,
    /// Пауза между announce и телепортом
    pub delay: f32,
    /// Пауза после телепорта перед close-range follow-up
    pub settle_time: f32,
}

impl Default for TeleportTuning {
    fn default() -> Self {
        Self {
            distance: 3.0,
            delay: 2.0,
            settle_time: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeTuning {
    /// Wind-up: стоим на месте столько секунд
    pub prepare_time: f32,
    /// Дополнительная пауза после wind-up
    pub extra_delay: f32,
    /// м/с во время рывка
    pub speed: f32,
    /// Насколько за цель (вдоль направления на неё) проскакиваем
    pub offset: f32,
    /// Рывок закончен когда ближе этого к точке
    pub arrive_tolerance: f32,
}

impl Default for ChargeTuning {
    fn default() -> Self {
        Self {
            prepare_time: 1.0,
            extra_delay: 1.0,
            speed: 25.0,
            offset: 3.0,
            arrive_tolerance: 0.1,
        }
    }
}

/// Множители урона по стороне попадания
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageMultipliers {
    pub front: f32,
    pub side: f32,
    pub back: f32,
}

impl Default for DamageMultipliers {
    fn default() -> Self {
        Self {
            front: 1.0,
            side: 1.0,
            back: 1.0,
        }
    }
}

/// Полный профиль агента
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentProfile {
    pub name: String,
    pub max_health: f32,
    pub movement: MovementTuning,
    pub actions: ActionTuning,
    pub teleport: TeleportTuning,
    pub charge: ChargeTuning,
    pub damage: DamageMultipliers,
    /// Some(f): агент замедляется в f раз пока цель уязвима
    pub vulnerability_slow_factor: Option<f32>,
    pub health_bar: HealthBarMode,
    /// Tiers по health fraction (берётся tier с наибольшим подходящим порогом)
    pub repertoire: Vec<HealthTier>,
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            name: "Agent".to_string(),
            max_health: 100.0,
            movement: MovementTuning::default(),
            actions: ActionTuning::default(),
            teleport: TeleportTuning::default(),
            charge: ChargeTuning::default(),
            damage: DamageMultipliers::default(),
            vulnerability_slow_factor: None,
            health_bar: HealthBarMode::Hidden,
            repertoire: vec![HealthTier {
                min_health_fraction: 0.0,
                near: AttackPlan::CloseRange,
                far: AttackPlan::Teleport {
                    follow_up: FollowUp::CloseRange,
                },
            }],
        }
    }
}

impl AgentProfile {
    /// Парсинг + валидация (отсутствующие поля берутся из Default)
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let profile: AgentProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Проверка числовых инвариантов профиля
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("max_health", self.max_health)?;

        non_negative("movement.move_speed", self.movement.move_speed)?;
        non_negative("movement.stopping_distance", self.movement.stopping_distance)?;
        non_negative("movement.rotation_smoothing", self.movement.rotation_smoothing)?;

        non_negative("actions.initial_cooldown", self.actions.initial_cooldown)?;
        non_negative("actions.min_cooldown", self.actions.min_cooldown)?;
        non_negative("actions.max_cooldown", self.actions.max_cooldown)?;
        non_negative("actions.close_range_threshold", self.actions.close_range_threshold)?;
        if self.actions.min_cooldown > self.actions.max_cooldown {
            return Err(ConfigError::CooldownRange {
                min: self.actions.min_cooldown,
                max: self.actions.max_cooldown,
            });
        }

        non_negative("teleport.distance", self.teleport.distance)?;
        non_negative("teleport.delay", self.teleport.delay)?;
        non_negative("teleport.settle_time", self.teleport.settle_time)?;

        non_negative("charge.prepare_time", self.charge.prepare_time)?;
        non_negative("charge.extra_delay", self.charge.extra_delay)?;
        positive("charge.speed", self.charge.speed)?;
        non_negative("charge.offset", self.charge.offset)?;
        positive("charge.arrive_tolerance", self.charge.arrive_tolerance)?;

        non_negative("damage.front", self.damage.front)?;
        non_negative("damage.side", self.damage.side)?;
        non_negative("damage.back", self.damage.back)?;

        if let Some(factor) = self.vulnerability_slow_factor {
            positive("vulnerability_slow_factor", factor)?;
        }

        if self.repertoire.is_empty() {
            return Err(ConfigError::EmptyRepertoire);
        }
        for (index, tier) in self.repertoire.iter().enumerate() {
            let fraction = tier.min_health_fraction;
            if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                return Err(ConfigError::InvalidTier { index, fraction });
            }
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}
