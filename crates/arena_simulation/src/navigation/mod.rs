//! Headless navigation: прямолинейная замена NavMesh хоста
//!
//! Хост с настоящим pathfinding читает `NavigationRequest` сам и этот plugin
//! не подключает. Для тестов и headless demo агент едет по прямой в XZ,
//! высота сохраняется.

use bevy::prelude::*;

use crate::components::NavigationRequest;
use crate::math::planar_distance_direction;

/// Headless Navigation Plugin (FixedUpdate, сразу после chase)
pub struct HeadlessNavigationPlugin;

impl Plugin for HeadlessNavigationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<NavigationRequest>().add_systems(
            FixedUpdate,
            follow_navigation_requests
                .after(crate::ai::chase_target)
                .before(crate::ai::advance_attack_routines),
        );
    }
}

/// Система: сдвиг к destination на speed * dt, стоп на stopping_distance
pub fn follow_navigation_requests(
    mut agents: Query<(&NavigationRequest, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (request, mut transform) in agents.iter_mut() {
        if request.speed <= 0.0 || !request.speed.is_finite() {
            continue;
        }

        let (distance, direction) = planar_distance_direction(transform.translation, request.destination);
        let remaining = distance - request.stopping_distance.max(0.0);
        if remaining <= 0.0 {
            continue;
        }

        let step = (request.speed * delta).min(remaining);
        transform.translation += direction * step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(Time::<Fixed>::from_duration(Duration::from_millis(20)))
            .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(Duration::from_millis(20)))
            .add_systems(FixedUpdate, follow_navigation_requests);
        app
    }

    #[test]
    fn test_moves_toward_destination_and_stops() {
        let mut app = app();
        let agent = app
            .world_mut()
            .spawn((
                Transform::from_xyz(0.0, 1.0, 0.0),
                NavigationRequest {
                    destination: Vec3::new(10.0, 0.0, 0.0),
                    speed: 5.0,
                    stopping_distance: 3.0,
                },
            ))
            .id();

        for _ in 0..200 {
            app.update();
        }

        let transform = app.world().get::<Transform>(agent).expect("agent");
        assert!((transform.translation.x - 7.0).abs() < 1e-3, "x = {}", transform.translation.x);
        // Высота не меняется
        assert_eq!(transform.translation.y, 1.0);
    }

    #[test]
    fn test_zero_speed_stays() {
        let mut app = app();
        let agent = app
            .world_mut()
            .spawn((Transform::default(), NavigationRequest::default()))
            .id();
        app.world_mut()
            .get_mut::<NavigationRequest>(agent)
            .expect("request")
            .destination = Vec3::new(5.0, 0.0, 5.0);

        for _ in 0..20 {
            app.update();
        }

        let transform = app.world().get::<Transform>(agent).expect("agent");
        assert_eq!(transform.translation, Vec3::ZERO);
    }
}
