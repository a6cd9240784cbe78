//! Contact reports: хост сообщает о касаниях, агент узнаёт свою цель

use bevy::prelude::*;

use crate::ai::{HostileAgent, TargetContact};
use crate::events::ContactEvent;

/// Система: ContactEvent (agent ↔ target) → TargetContact + "Hit!"
///
/// Урона не наносит, только сообщает. Порядок entity/other в событии не важен.
pub fn report_target_contacts(
    mut contacts: EventReader<ContactEvent>,
    agents: Query<&HostileAgent>,
    mut reports: EventWriter<TargetContact>,
) {
    for contact in contacts.read() {
        for (agent_entity, other) in [(contact.entity, contact.other), (contact.other, contact.entity)] {
            let Ok(agent) = agents.get(agent_entity) else {
                continue;
            };
            if agent.target != other {
                continue;
            }

            crate::log_info("Hit!");
            reports.write(TargetContact {
                agent: agent_entity,
                target: other,
            });
        }
    }
}
