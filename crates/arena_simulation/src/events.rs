//! Входящие события от хоста (физика/триггеры)

use bevy::prelude::*;

/// Хост: два entity коснулись (trigger enter)
///
/// Порядок не важен: подписчики проверяют обе пары.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub entity: Entity,
    pub other: Entity,
}

impl ContactEvent {
    pub fn new(entity: Entity, other: Entity) -> Self {
        Self { entity, other }
    }
}
