//! Movement компоненты: режим движения и navigation запросы для хоста

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Как агент перемещается во время chase
///
/// - Direct: сами двигаем Transform
/// - Navigation: пишем `NavigationRequest`, двигает хост (NavMesh agent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum MotionMode {
    #[default]
    Direct,
    Navigation,
}

/// Запрос движения для navigation хоста
///
/// ECS пишет (destination + speed каждый tick), хост читает и двигает агента.
/// `speed == 0`: стоять на месте.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct NavigationRequest {
    pub destination: Vec3,
    pub speed: f32,
    pub stopping_distance: f32,
}

impl Default for NavigationRequest {
    fn default() -> Self {
        Self {
            destination: Vec3::ZERO,
            speed: 0.0,
            stopping_distance: 0.0,
        }
    }
}

impl NavigationRequest {
    pub fn stop(&mut self) {
        self.speed = 0.0;
    }
}
