//! RotatingPlatform: одноразовый поворот по yaw при касании активатора

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::events::ContactEvent;
use crate::math::{delta_angle, move_towards_angle, yaw_degrees, yaw_rotation};

/// Допуск на "доехали" (градусы)
pub const ANGLE_TOLERANCE: f32 = 1e-3;

/// Что делать с повторным касанием во время поворота
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum RetriggerPolicy {
    /// Касание игнорируется, пока поворот не закончен
    #[default]
    Ignore,
    /// Новый target = текущий yaw + rotation_angle (поворот перезапускается)
    Restart,
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct RotatingPlatform {
    /// Кто запускает поворот
    pub activator: Entity,
    /// На сколько повернуть (градусы, со знаком)
    pub rotation_angle: f32,
    /// Градусы в секунду
    pub rotation_speed: f32,
    pub policy: RetriggerPolicy,
    pub is_rotating: bool,
    pub current_angle: f32,
    pub target_angle: f32,
}

impl RotatingPlatform {
    /// Платформа по умолчанию: −90° со скоростью 90°/s
    pub fn new(activator: Entity) -> Self {
        Self {
            activator,
            rotation_angle: -90.0,
            rotation_speed: 90.0,
            policy: RetriggerPolicy::default(),
            is_rotating: false,
            current_angle: 0.0,
            target_angle: 0.0,
        }
    }

    pub fn with_rotation(mut self, angle: f32, speed: f32) -> Self {
        self.rotation_angle = if angle.is_finite() { angle } else { 0.0 };
        self.rotation_speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
        self
    }

    pub fn with_policy(mut self, policy: RetriggerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Касание активатора; true если поворот (пере)запущен
    pub fn trigger(&mut self, current_yaw: f32) -> bool {
        if self.is_rotating && self.policy == RetriggerPolicy::Ignore {
            return false;
        }

        self.current_angle = current_yaw;
        self.target_angle = current_yaw + self.rotation_angle;
        self.is_rotating = true;
        true
    }

    /// Один tick поворота; возвращает новый yaw (градусы)
    pub fn advance(&mut self, dt: f32) -> f32 {
        if !self.is_rotating {
            return self.current_angle;
        }

        let step = self.rotation_speed * dt.max(0.0);
        self.current_angle = move_towards_angle(self.current_angle, self.target_angle, step);

        if delta_angle(self.current_angle, self.target_angle).abs() <= ANGLE_TOLERANCE {
            self.current_angle = self.target_angle;
            self.is_rotating = false;
        }
        self.current_angle
    }
}

/// Система: ContactEvent (platform ↔ activator) → запуск поворота
pub fn trigger_platforms(
    mut contacts: EventReader<ContactEvent>,
    mut platforms: Query<(Entity, &mut RotatingPlatform, &Transform)>,
) {
    for contact in contacts.read() {
        for (platform_entity, other) in [(contact.entity, contact.other), (contact.other, contact.entity)] {
            let Ok((entity, mut platform, transform)) = platforms.get_mut(platform_entity) else {
                continue;
            };
            if platform.activator != other {
                continue;
            }

            let started = platform.trigger(yaw_degrees(transform.rotation));
            if started {
                crate::log(&format!(
                    "Platform: {:?} rotating {:.1}° → {:.1}°",
                    entity, platform.current_angle, platform.target_angle
                ));
            } else {
                crate::log(&format!("Platform: {:?} already rotating, contact ignored", entity));
            }
        }
    }
}

/// Система: поворот платформ (variable tick)
pub fn rotate_platforms(
    mut platforms: Query<(Entity, &mut RotatingPlatform, &mut Transform)>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (entity, mut platform, mut transform) in platforms.iter_mut() {
        if !platform.is_rotating {
            continue;
        }

        let yaw = platform.advance(delta);
        transform.rotation = yaw_rotation(yaw);

        if !platform.is_rotating {
            crate::log(&format!("Platform: {:?} stopped at {:.1}°", entity, yaw));
        }
    }
}
