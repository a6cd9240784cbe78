//! Spawn API: создание HostileAgent с полным набором компонентов

use bevy::prelude::*;
use thiserror::Error;

use crate::ai::timers::MovementTimers;
use crate::ai::{ActionCooldown, AgentState, AttackGuard, CurrentAttack, HostileAgent, TargetSense};
use crate::components::{Health, HealthDisplay, MotionMode, MoveSpeed, NavigationRequest, Target};
use crate::config::{AgentProfile, ConfigError};

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("target {0:?} does not exist")]
    MissingTarget(Entity),
    #[error("entity {0:?} is not a valid target (needs Target + Transform)")]
    NotATarget(Entity),
    #[error("invalid agent profile: {0}")]
    InvalidProfile(#[from] ConfigError),
}

/// Spawn агента по профилю рядом с целью
///
/// Профиль валидируется, цель обязана существовать и иметь `Target` + `Transform`.
/// Navigation агенты получают `NavigationRequest` (хост или headless navigator).
pub fn spawn_hostile_agent(
    world: &mut World,
    profile: AgentProfile,
    position: Vec3,
    target: Entity,
) -> Result<Entity, SpawnError> {
    profile.validate()?;

    if !world.entities().contains(target) {
        return Err(SpawnError::MissingTarget(target));
    }
    let target_ref = world.entity(target);
    if !target_ref.contains::<Target>() || !target_ref.contains::<Transform>() {
        return Err(SpawnError::NotATarget(target));
    }

    let mut entity = world.spawn((
        Name::new(profile.name.clone()),
        HostileAgent { target },
        Transform::from_translation(position),
        Health::new(profile.max_health),
        MoveSpeed::new(profile.movement.move_speed),
        AgentState::default(),
        ActionCooldown::new(profile.actions.initial_cooldown),
        AttackGuard::default(),
        CurrentAttack::default(),
        MovementTimers::default(),
        TargetSense::default(),
        HealthDisplay::new(profile.health_bar),
    ));

    if profile.movement.mode == MotionMode::Navigation {
        entity.insert(NavigationRequest {
            destination: position,
            speed: 0.0,
            stopping_distance: profile.movement.stopping_distance,
        });
    }

    let id = entity.id();
    crate::log_info(&format!(
        "AI: spawned {} {:?} at {:?} (target {:?})",
        profile.name, id, position, target
    ));

    entity.insert(profile);
    Ok(id)
}
