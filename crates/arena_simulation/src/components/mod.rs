//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: здоровье и скорость агента (Health, MoveSpeed)
//! - target: цель и её флаг уязвимости (Target, Vulnerability)
//! - movement: режим движения и navigation запросы (MotionMode, NavigationRequest)
//! - display: health bar для хоста (HealthDisplay, HealthBarMode)

pub mod actor;
pub mod display;
pub mod movement;
pub mod target;

// Re-exports для удобного импорта
pub use actor::*;
pub use display::*;
pub use movement::*;
pub use target::*;
