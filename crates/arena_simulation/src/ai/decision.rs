//! Decision: выбор атаки по дистанции и health tier
//!
//! Чистая функция, без RNG: одинаковые входы дают одинаковый план.

use crate::ai::{AttackPlan, HealthTier};

/// Tier с наибольшим порогом, который ещё ≤ health fraction
pub fn select_tier(repertoire: &[HealthTier], health_fraction: f32) -> Option<&HealthTier> {
    repertoire
        .iter()
        .filter(|tier| health_fraction >= tier.min_health_fraction)
        .max_by(|a, b| a.min_health_fraction.total_cmp(&b.min_health_fraction))
}

/// distance ≤ threshold → `near`, иначе `far`
///
/// `None` если ни один tier не подходит (boss ниже последней фазы).
pub fn decide_attack(
    repertoire: &[HealthTier],
    health_fraction: f32,
    distance_to_target: f32,
    close_range_threshold: f32,
) -> Option<AttackPlan> {
    let tier = select_tier(repertoire, health_fraction)?;
    if distance_to_target <= close_range_threshold {
        Some(tier.near)
    } else {
        Some(tier.far)
    }
}
