//! Sensing: снимок цели для каждого агента (первая система tick'а)

use bevy::prelude::*;

use crate::ai::{HostileAgent, TargetSense};
use crate::components::{Target, Vulnerability};
use crate::config::AgentProfile;
use crate::math::planar_distance_direction;

/// Система: пересчёт TargetSense (distance, direction, vulnerability, time scale)
///
/// Target обязан иметь `Target` + `Transform`. Если цель пропала (despawn),
/// агент замирает: has_target = false, chase/decision/routine пропускаются.
pub fn sense_targets(
    mut agents: Query<(Entity, &HostileAgent, &Transform, &AgentProfile, &mut TargetSense)>,
    targets: Query<(&Transform, Option<&Vulnerability>), (With<Target>, Without<HostileAgent>)>,
) {
    for (entity, agent, transform, profile, mut sense) in agents.iter_mut() {
        let Ok((target_transform, vulnerability)) = targets.get(agent.target) else {
            if sense.has_target {
                crate::log_error(&format!(
                    "AI: {:?} lost target {:?} (despawned or not a Target)",
                    entity, agent.target
                ));
            }
            sense.has_target = false;
            sense.time_scale = 1.0;
            continue;
        };

        let (distance, direction) =
            planar_distance_direction(transform.translation, target_transform.translation);
        let target_vulnerable = vulnerability.map(|v| v.active).unwrap_or(false);

        if target_vulnerable != sense.target_vulnerable && profile.vulnerability_slow_factor.is_some() {
            crate::log(&format!(
                "AI: {:?} target vulnerable = {} (slow-mo {})",
                entity,
                target_vulnerable,
                if target_vulnerable { "on" } else { "off" }
            ));
        }

        sense.has_target = true;
        sense.distance = distance;
        sense.direction = direction;
        sense.target_position = target_transform.translation;
        sense.target_forward = target_transform.forward().as_vec3();
        sense.target_vulnerable = target_vulnerable;
        sense.time_scale = time_scale(profile, target_vulnerable);
    }
}

/// 1/slow_factor пока цель уязвима, иначе 1
pub fn time_scale(profile: &AgentProfile, target_vulnerable: bool) -> f32 {
    match profile.vulnerability_slow_factor {
        Some(factor) if target_vulnerable && factor.is_finite() && factor > 0.0 => 1.0 / factor,
        _ => 1.0,
    }
}
