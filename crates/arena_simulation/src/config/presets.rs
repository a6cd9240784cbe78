//! Готовые профили: Boss (health-gated teleport/charge) и Enemy (chaser + slow-mo)

use crate::ai::{AttackPlan, FollowUp, HealthTier};
use crate::components::{HealthBarMode, MotionMode};

use super::{
    ActionTuning, AgentProfile, ChargeTuning, DamageMultipliers, MovementTuning, TeleportTuning,
};

/// Сколько рывков делает boss во второй фазе
pub const BOSS_CHARGE_REPEATS: u32 = 3;

/// Сколько рывков делает enemy в ближнем бою
pub const ENEMY_CHARGE_REPEATS: u32 = 2;

/// Boss: NavMesh chase, две фазы по здоровью
///
/// - health ≥ 2/3: далеко → teleport + close-range, близко → close-range
/// - 1/3 ≤ health < 2/3: далеко → teleport + charge×3, близко → charge×3
/// - ниже 1/3 tier'а нет (decision пропускается, cooldown сбрасывается)
pub fn boss() -> AgentProfile {
    AgentProfile {
        name: "Boss".to_string(),
        max_health: 5.0,
        movement: MovementTuning {
            mode: MotionMode::Navigation,
            move_speed: 5.0,
            stopping_distance: 0.0,
            rotation_smoothing: 5.0,
        },
        actions: ActionTuning {
            initial_cooldown: 5.0,
            min_cooldown: 5.0,
            max_cooldown: 10.0,
            close_range_threshold: 10.0,
        },
        teleport: TeleportTuning {
            distance: 3.0,
            delay: 2.0,
            settle_time: 1.0,
        },
        charge: ChargeTuning {
            prepare_time: 1.0,
            extra_delay: 1.0,
            speed: 25.0,
            offset: 3.0,
            arrive_tolerance: 0.1,
        },
        damage: DamageMultipliers::default(),
        vulnerability_slow_factor: None,
        health_bar: HealthBarMode::Hidden,
        repertoire: vec![
            HealthTier {
                min_health_fraction: 2.0 / 3.0,
                near: AttackPlan::CloseRange,
                far: AttackPlan::Teleport {
                    follow_up: FollowUp::CloseRange,
                },
            },
            HealthTier {
                min_health_fraction: 1.0 / 3.0,
                near: AttackPlan::Charge {
                    repeats: BOSS_CHARGE_REPEATS,
                },
                far: AttackPlan::Teleport {
                    follow_up: FollowUp::Charge {
                        repeats: BOSS_CHARGE_REPEATS,
                    },
                },
            },
        ],
    }
}

/// Enemy: chaser с stopping distance, позиционный урон, замедление при full energy цели
///
/// Близко → charge×2, далеко → teleport + пауза 1.5s + close-range.
pub fn enemy() -> AgentProfile {
    AgentProfile {
        name: "Enemy".to_string(),
        max_health: 100.0,
        movement: MovementTuning {
            mode: MotionMode::Navigation,
            move_speed: 5.0,
            stopping_distance: 3.0,
            rotation_smoothing: 5.0,
        },
        actions: ActionTuning {
            initial_cooldown: 2.0,
            min_cooldown: 2.0,
            max_cooldown: 2.0,
            close_range_threshold: 4.0,
        },
        teleport: TeleportTuning {
            distance: 3.0,
            delay: 0.0,
            settle_time: 1.5,
        },
        charge: ChargeTuning {
            prepare_time: 1.0,
            extra_delay: 0.0,
            speed: 20.0,
            offset: 3.0,
            arrive_tolerance: 0.1,
        },
        damage: DamageMultipliers {
            front: 1.0,
            side: 1.1,
            back: 1.5,
        },
        vulnerability_slow_factor: Some(1000.0),
        health_bar: HealthBarMode::WhenTargetVulnerable,
        repertoire: vec![HealthTier {
            min_health_fraction: 0.0,
            near: AttackPlan::Charge {
                repeats: ENEMY_CHARGE_REPEATS,
            },
            far: AttackPlan::Teleport {
                follow_up: FollowUp::CloseRange,
            },
        }],
    }
}
