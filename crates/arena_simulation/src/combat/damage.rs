//! Positional damage: множитель по стороне попадания, clamp, смерть
//!
//! dot = agent.forward · normalize(target.position − agent.position)
//! - dot > 0.5 → front
//! - dot < −0.7 → back
//! - иначе → side

use bevy::prelude::*;

use crate::ai::HostileAgent;
use crate::components::{Health, HealthDisplay};
use crate::config::{AgentProfile, DamageMultipliers};

/// Порог front (строго больше)
pub const FRONT_DOT_THRESHOLD: f32 = 0.5;

/// Порог back (строго меньше)
pub const BACK_DOT_THRESHOLD: f32 = -0.7;

/// С какой стороны агента находится его цель в момент удара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum HitSide {
    Front,
    Side,
    Back,
}

impl HitSide {
    pub fn multiplier(&self, multipliers: &DamageMultipliers) -> f32 {
        match self {
            HitSide::Front => multipliers.front,
            HitSide::Side => multipliers.side,
            HitSide::Back => multipliers.back,
        }
    }
}

/// Классификация по dot (границы 0.5 и −0.7 → Side)
pub fn classify_hit(dot: f32) -> HitSide {
    if dot > FRONT_DOT_THRESHOLD {
        HitSide::Front
    } else if dot < BACK_DOT_THRESHOLD {
        HitSide::Back
    } else {
        HitSide::Side
    }
}

/// Сторона попадания по forward агента и позициям (3D, не планарно)
pub fn hit_side(agent_forward: Vec3, agent_position: Vec3, target_position: Vec3) -> HitSide {
    let to_target = (target_position - agent_position).normalize_or_zero();
    classify_hit(agent_forward.dot(to_target))
}

/// Входящий урон агенту (takeDamage от хоста)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TakeDamage {
    pub entity: Entity,
    pub amount: f32,
}

/// Входящий debuff (объявлен, эффекта нет)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TakeDebuff {
    pub entity: Entity,
    pub value: f32,
}

/// Debug: выставить health напрямую (variable tick)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DebugSetHealth {
    pub entity: Entity,
    pub value: f32,
}

/// Событие: урон нанесён (после множителя и clamp)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageDealt {
    pub target: Entity,
    pub side: HitSide,
    pub raw_amount: f32,
    pub damage: f32,
    pub remaining_health: f32,
    pub target_died: bool,
}

/// Событие: агент умер (health = 0), entity удалён
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EntityDied {
    pub entity: Entity,
}

/// Система: apply damage от TakeDamage событий
///
/// 1. Сторона попадания по позиции цели агента
/// 2. damage = amount × multiplier, Health clamp [0, max]
/// 3. HealthDisplay.fill обновляется сразу
/// 4. health = 0 → EntityDied + despawn (routine умирает вместе с entity)
pub fn apply_damage(
    mut commands: Commands,
    mut damage_events: EventReader<TakeDamage>,
    mut damage_dealt_events: EventWriter<DamageDealt>,
    mut entity_died_events: EventWriter<EntityDied>,
    mut agents: Query<(
        &HostileAgent,
        &Transform,
        &AgentProfile,
        &mut Health,
        Option<&mut HealthDisplay>,
    )>,
    targets: Query<&Transform, Without<HostileAgent>>,
) {
    for event in damage_events.read() {
        let Ok((agent, transform, profile, mut health, display)) = agents.get_mut(event.entity) else {
            crate::log_error(&format!(
                "Combat: TakeDamage for {:?} which is not a live agent",
                event.entity
            ));
            continue;
        };

        if !health.is_alive() {
            // Уже мёртв, despawn в этом tick'е ещё не применён
            continue;
        }

        let (side, multiplier) = match targets.get(agent.target) {
            Ok(target_transform) => {
                let side = hit_side(
                    transform.forward().as_vec3(),
                    transform.translation,
                    target_transform.translation,
                );
                (side, side.multiplier(&profile.damage))
            }
            Err(_) => {
                crate::log_warning(&format!(
                    "Combat: {:?} target {:?} missing, damage side unknown (x1.0)",
                    event.entity, agent.target
                ));
                (HitSide::Side, 1.0)
            }
        };

        let amount = if event.amount.is_finite() { event.amount } else { 0.0 };
        let damage = amount * multiplier;
        health.take_damage(damage);

        if let Some(mut display) = display {
            display.refresh_fill(&health);
        }

        let target_died = !health.is_alive();
        crate::log(&format!(
            "Combat: {:?} hit from {:?} for {:.2} (x{:.2}) → {:.2}/{:.2}",
            event.entity, side, damage, multiplier, health.current, health.max
        ));

        damage_dealt_events.write(DamageDealt {
            target: event.entity,
            side,
            raw_amount: amount,
            damage,
            remaining_health: health.current,
            target_died,
        });

        if target_died {
            crate::log_info(&format!("Combat: {} {:?} died", profile.name, event.entity));
            entity_died_events.write(EntityDied {
                entity: event.entity,
            });
            commands.entity(event.entity).despawn();
        }
    }
}

/// Система: takeDebuff: событие принимается, эффекта нет
pub fn absorb_debuffs(mut debuffs: EventReader<TakeDebuff>) {
    for debuff in debuffs.read() {
        crate::log(&format!(
            "Combat: debuff {:.2} on {:?} ignored",
            debuff.value, debuff.entity
        ));
    }
}

/// Система: DebugSetHealth (Update): clamp в [0, max], смерть не проверяется
pub fn apply_debug_health(
    mut requests: EventReader<DebugSetHealth>,
    mut agents: Query<(&mut Health, Option<&mut HealthDisplay>)>,
) {
    for request in requests.read() {
        let Ok((mut health, display)) = agents.get_mut(request.entity) else {
            crate::log_error(&format!("Combat: DebugSetHealth for missing {:?}", request.entity));
            continue;
        };

        health.set(request.value);
        if let Some(mut display) = display {
            display.refresh_fill(&health);
        }
        crate::log(&format!(
            "Combat: debug health {:?} = {:.2}",
            request.entity, health.current
        ));
    }
}
