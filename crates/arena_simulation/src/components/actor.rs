//! Базовые компоненты агентов: Health, MoveSpeed

use bevy::prelude::*;

/// Здоровье агента
///
/// Инвариант: 0.0 ≤ current ≤ max, никаких NaN (каждая мутация clamp'ится)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Health {
    pub fn new(max: f32) -> Self {
        let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Доля здоровья 0..1 (0 при max == 0)
    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    /// Отнять урон; non-finite урон игнорируется
    pub fn take_damage(&mut self, amount: f32) {
        if !amount.is_finite() {
            return;
        }
        self.current = (self.current - amount).clamp(0.0, self.max);
    }

    /// Прямая установка (debug override), тоже с clamp
    pub fn set(&mut self, value: f32) {
        if !value.is_finite() {
            return;
        }
        self.current = value.clamp(0.0, self.max);
    }
}

/// Скорость движения агента (м/с)
///
/// `base`: из профиля, `current`: с учётом остановок (charge wind-up).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveSpeed {
    pub base: f32,
    pub current: f32,
}

impl Default for MoveSpeed {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl MoveSpeed {
    pub fn new(base: f32) -> Self {
        Self { base, current: base }
    }

    pub fn halt(&mut self) {
        self.current = 0.0;
    }

    pub fn resume(&mut self) {
        self.current = self.base;
    }

    pub fn is_halted(&self) -> bool {
        self.current <= 0.0
    }
}
