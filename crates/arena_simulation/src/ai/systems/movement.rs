//! Chase: движение к цели и плавный поворот (только в Cooldown)

use bevy::prelude::*;

use crate::ai::{AgentState, HostileAgent, TargetSense};
use crate::components::{MotionMode, MoveSpeed, NavigationRequest};
use crate::config::AgentProfile;
use crate::math::look_rotation_planar;

/// Система: chase цели в Cooldown
///
/// - поворот: slerp к цели с фактором (rotation_smoothing * dt).clamp(0, 1)
/// - Direct: двигаем Transform, останавливаемся на stopping_distance
/// - Navigation: пишем NavigationRequest (двигает хост или headless navigator)
///
/// Вне Cooldown navigation запрос гасится (speed = 0), routine двигает агента сама.
pub fn chase_target(
    mut agents: Query<
        (
            &AgentState,
            &AgentProfile,
            &TargetSense,
            &MoveSpeed,
            &mut Transform,
            Option<&mut NavigationRequest>,
        ),
        With<HostileAgent>,
    >,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (state, profile, sense, speed, mut transform, navigation) in agents.iter_mut() {
        if *state != AgentState::Cooldown || !sense.has_target {
            if let Some(mut navigation) = navigation {
                if navigation.speed != 0.0 {
                    navigation.stop();
                }
            }
            continue;
        }

        let dt = sense.scaled(delta);
        let movement = &profile.movement;

        if let Some(look) = look_rotation_planar(sense.direction) {
            let factor = (movement.rotation_smoothing * dt).clamp(0.0, 1.0);
            transform.rotation = transform.rotation.slerp(look, factor);
        }

        match (movement.mode, navigation) {
            (MotionMode::Navigation, Some(mut navigation)) => {
                navigation.destination = sense.target_position;
                // Хост двигает в реальном времени → скорость уже с time scale
                navigation.speed = speed.current * sense.time_scale;
                navigation.stopping_distance = movement.stopping_distance;
            }
            (MotionMode::Navigation, None) | (MotionMode::Direct, _) => {
                let remaining = sense.distance - movement.stopping_distance;
                if remaining <= 0.0 {
                    continue;
                }
                let step = (speed.current * dt).min(remaining);
                if step > 0.0 {
                    transform.translation += sense.direction * step;
                }
            }
        }
    }
}
