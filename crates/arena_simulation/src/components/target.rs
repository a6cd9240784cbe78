//! Target компоненты: цель агентов (игрок) и её флаг уязвимости

use bevy::prelude::*;

/// Маркер: entity может быть целью HostileAgent
///
/// Агент читает у цели только Transform (позиция + forward) и `Vulnerability`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Target;

/// Флаг уязвимости цели ("energy full" у игрока)
///
/// Владелец: хост (player controller). Агенты с `vulnerability_slow_factor`
/// замедляют свои скорости и таймеры, пока флаг поднят.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Vulnerability {
    pub active: bool,
}

impl Vulnerability {
    pub fn new(active: bool) -> Self {
        Self { active }
    }
}
