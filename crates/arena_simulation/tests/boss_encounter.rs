//! Integration тесты boss профиля (teleport / charge фазы)

mod common;

use bevy::prelude::*;

use arena_simulation::ai::{ActionCooldown, AttackGuard, AttackPlan, EffectKind, FollowUp};
use arena_simulation::config::presets::boss;
use arena_simulation::{spawn_hostile_agent, AgentProfile, AgentState, Health};

use common::{arena_app, recorded, run, spawn_target};

/// Boss без начального cooldown: решение в первый fixed tick, дистанция ещё 20
fn eager_boss() -> AgentProfile {
    let mut profile = boss();
    profile.actions.initial_cooldown = 0.0;
    profile
}

#[test]
fn test_boss_far_teleports_then_close_range() {
    let mut app = arena_app(1);
    let target = spawn_target(&mut app, Vec3::ZERO);
    let boss = spawn_hostile_agent(app.world_mut(), eager_boss(), Vec3::new(0.0, 0.0, 20.0), target)
        .expect("spawn boss");

    run(&mut app, 200);

    let recorded = recorded(&app);
    assert_eq!(recorded.started.len(), 1);
    assert_eq!(
        recorded.started[0].plan,
        AttackPlan::Teleport {
            follow_up: FollowUp::CloseRange
        }
    );

    // Close-range эффект проигран перед целью: target + forward(−Z) * 3
    assert_eq!(recorded.effects.len(), 1);
    assert_eq!(recorded.effects[0].effect, EffectKind::CloseRange);
    assert!(
        recorded.effects[0].position.distance(Vec3::new(0.0, 0.0, -3.0)) < 1e-3,
        "effect at {:?}",
        recorded.effects[0].position
    );

    assert_eq!(recorded.finished.len(), 1);
    let next = recorded.finished[0].next_cooldown;
    assert!((5.0..=10.0).contains(&next), "next cooldown {}", next);

    let world = app.world();
    assert_eq!(world.get::<AgentState>(boss), Some(&AgentState::Cooldown));
    assert_eq!(world.get::<AttackGuard>(boss).map(|g| g.is_attacking), Some(false));
    let remaining = world.get::<ActionCooldown>(boss).map(|c| c.remaining).unwrap_or(-1.0);
    assert!(remaining >= 0.0 && remaining <= next);
}

#[test]
fn test_boss_teleport_waits_for_delay() {
    let mut app = arena_app(2);
    let target = spawn_target(&mut app, Vec3::ZERO);
    let boss = spawn_hostile_agent(app.world_mut(), eager_boss(), Vec3::new(0.0, 0.0, 20.0), target)
        .expect("spawn boss");

    // 1.5s из 2s teleport delay: boss стоит на месте (navigation погашена)
    run(&mut app, 75);

    let world = app.world();
    assert_eq!(world.get::<AgentState>(boss), Some(&AgentState::Acting));
    let position = world.get::<Transform>(boss).map(|t| t.translation).unwrap_or_default();
    assert_eq!(position, Vec3::new(0.0, 0.0, 20.0));
    assert!(recorded(&app).effects.is_empty());
}

#[test]
fn test_boss_second_phase_charges_three_times() {
    let mut app = arena_app(3);
    let target = spawn_target(&mut app, Vec3::ZERO);
    let boss = spawn_hostile_agent(app.world_mut(), eager_boss(), Vec3::new(0.0, 0.0, 20.0), target)
        .expect("spawn boss");

    // 3/5 = 0.6 → вторая фаза
    app.world_mut()
        .get_mut::<Health>(boss)
        .expect("boss health")
        .set(3.0);

    run(&mut app, 600);

    let recorded = recorded(&app);
    assert_eq!(
        recorded.started[0].plan,
        AttackPlan::Teleport {
            follow_up: FollowUp::Charge { repeats: 3 }
        }
    );

    let dash_indices: Vec<u32> = recorded.dashes.iter().map(|d| d.dash_index).collect();
    assert_eq!(dash_indices, vec![1, 2, 3]);

    let charge_effects = recorded
        .effects
        .iter()
        .filter(|e| e.effect == EffectKind::Charge)
        .count();
    assert_eq!(charge_effects, 3);

    // Reset только после третьего рывка
    assert_eq!(recorded.finished.len(), 1);
    assert_eq!(app.world().get::<AgentState>(boss), Some(&AgentState::Cooldown));
}

#[test]
fn test_boss_near_uses_close_range() {
    let mut app = arena_app(4);
    let target = spawn_target(&mut app, Vec3::ZERO);
    spawn_hostile_agent(app.world_mut(), eager_boss(), Vec3::new(0.0, 0.0, 6.0), target)
        .expect("spawn boss");

    run(&mut app, 5);

    let recorded = recorded(&app);
    assert_eq!(recorded.started[0].plan, AttackPlan::CloseRange);
    assert_eq!(recorded.finished.len(), 1);
}

#[test]
fn test_boss_below_last_tier_holds() {
    let mut app = arena_app(5);
    let target = spawn_target(&mut app, Vec3::ZERO);
    let boss = spawn_hostile_agent(app.world_mut(), eager_boss(), Vec3::new(0.0, 0.0, 20.0), target)
        .expect("spawn boss");

    app.world_mut()
        .get_mut::<Health>(boss)
        .expect("boss health")
        .set(1.0);

    run(&mut app, 5);

    let world = app.world();
    assert!(recorded(&app).started.is_empty());
    assert_eq!(world.get::<AgentState>(boss), Some(&AgentState::Cooldown));
    let remaining = world.get::<ActionCooldown>(boss).map(|c| c.remaining).unwrap_or(0.0);
    assert!(remaining > 4.9, "cooldown {}", remaining);
}

#[test]
fn test_boss_chases_during_cooldown() {
    let mut app = arena_app(6);
    let target = spawn_target(&mut app, Vec3::ZERO);
    let boss = spawn_hostile_agent(app.world_mut(), boss(), Vec3::new(0.0, 0.0, 20.0), target)
        .expect("spawn boss");

    // 1s при 5 m/s
    run(&mut app, 50);

    let world = app.world();
    let z = world.get::<Transform>(boss).map(|t| t.translation.z).unwrap_or_default();
    assert!((z - 15.0).abs() < 0.05, "z = {}", z);
    assert_eq!(world.get::<AgentState>(boss), Some(&AgentState::Cooldown));
}
