//! Конфигурация агентов
//!
//! - profile: AgentProfile (serde) + валидация + ConfigError
//! - presets: boss() / enemy()

pub mod presets;
pub mod profile;


pub use profile::*;
