//! Health bar: fill + видимость для UI хоста (variable tick)

use bevy::prelude::*;

use crate::ai::TargetSense;
use crate::components::{Health, HealthDisplay};

/// Система: обновление HealthDisplay
///
/// Fill всегда из Health, visibility по режиму (WhenTargetVulnerable: по флагу цели).
pub fn refresh_health_bars(mut agents: Query<(&Health, &TargetSense, &mut HealthDisplay)>) {
    for (health, sense, mut display) in agents.iter_mut() {
        let before = *display;
        display.refresh_fill(health);
        display.refresh_visibility(sense.target_vulnerable);

        if before.visible != display.visible {
            crate::log(&format!(
                "UI: health bar {} ({:.0}%)",
                if display.visible { "shown" } else { "hidden" },
                display.fill * 100.0
            ));
        }
    }
}
