//! Combat system module (host-driven damage)
//!
//! ECS ответственность:
//! - Health, positional damage multipliers, смерть
//! - Events: DamageDealt, EntityDied
//!
//! Хост ответственность:
//! - hit detection → TakeDamage / TakeDebuff
//! - отрисовка health bar по HealthDisplay

use bevy::prelude::*;

pub mod damage;
pub mod health_bar;

#[cfg(test)]
mod damage_tests;

// Re-export основных типов
pub use damage::{
    absorb_debuffs, apply_damage, apply_debug_health, classify_hit, hit_side, DamageDealt,
    DebugSetHealth, EntityDied, HitSide, TakeDamage, TakeDebuff, BACK_DOT_THRESHOLD,
    FRONT_DOT_THRESHOLD,
};
pub use health_bar::refresh_health_bars;

/// Combat Plugin
///
/// FixedUpdate (после AI): apply_damage → absorb_debuffs
/// Update: apply_debug_health → refresh_health_bars
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<TakeDamage>()
            .add_event::<TakeDebuff>()
            .add_event::<DebugSetHealth>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>();

        app.add_systems(
            FixedUpdate,
            (apply_damage, absorb_debuffs)
                .chain()
                .after(crate::ai::report_target_contacts),
        );

        app.add_systems(Update, (apply_debug_health, refresh_health_bars).chain());
    }
}
