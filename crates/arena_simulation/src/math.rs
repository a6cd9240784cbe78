//! Математика движения/поворота (XZ плоскость, yaw в градусах)
//!
//! Соглашение Bevy: forward = -Z, yaw: поворот вокруг +Y.

use bevy::prelude::*;

/// Проекция на плоскость XZ (Y обнуляется)
pub fn planar(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Планарная дистанция и направление `from → to` (Y игнорируется)
///
/// Направление нормализовано; при совпадении позиций: `Vec3::ZERO`.
pub fn planar_distance_direction(from: Vec3, to: Vec3) -> (f32, Vec3) {
    let offset = planar(to) - planar(from);
    (offset.length(), offset.normalize_or_zero())
}

/// Сдвиг `current` к `target` не более чем на `max_delta`, без перелёта
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let offset = target - current;
    let distance = offset.length();
    if distance <= max_delta || distance <= f32::EPSILON {
        return target;
    }
    current + offset / distance * max_delta
}

/// Разница углов в (-180, 180] (градусы)
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Поворот угла к target по кратчайшей дуге, не более чем на `max_delta` градусов
///
/// Если остаток меньше шага: возвращается ровно `target` (без накопления ошибки).
pub fn move_towards_angle(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = delta_angle(current, target);
    if -max_delta < delta && delta < max_delta {
        return target;
    }
    current + delta.signum() * max_delta
}

/// Yaw (градусы) rotation'а, который смотрит вдоль forward
pub fn yaw_degrees(rotation: Quat) -> f32 {
    let forward = rotation * Vec3::NEG_Z;
    (-forward.x).atan2(-forward.z).to_degrees()
}

/// Rotation вокруг +Y на заданный yaw (градусы)
pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(yaw_degrees.to_radians())
}

/// Yaw-only rotation с forward вдоль планарной проекции `direction`
///
/// `None` если у направления нет горизонтальной составляющей.
pub fn look_rotation_planar(direction: Vec3) -> Option<Quat> {
    let flat = planar(direction);
    if flat.length_squared() <= f32::EPSILON {
        return None;
    }
    let yaw = (-flat.x).atan2(-flat.z);
    Some(Quat::from_rotation_y(yaw))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_planar_distance_ignores_height() {
        let (distance, direction) =
            planar_distance_direction(Vec3::new(0.0, 5.0, 0.0), Vec3::new(3.0, -2.0, 4.0));
        assert!((distance - 5.0).abs() < EPS);
        assert!((direction - Vec3::new(0.6, 0.0, 0.8)).length() < EPS);
    }

    #[test]
    fn test_planar_direction_zero_on_same_spot() {
        let (distance, direction) =
            planar_distance_direction(Vec3::new(1.0, 0.0, 1.0), Vec3::new(1.0, 9.0, 1.0));
        assert_eq!(distance, 0.0);
        assert_eq!(direction, Vec3::ZERO);
    }

    #[test]
    fn test_move_towards_no_overshoot() {
        let start = Vec3::ZERO;
        let target = Vec3::new(1.0, 0.0, 0.0);

        let step = move_towards(start, target, 0.25);
        assert!((step - Vec3::new(0.25, 0.0, 0.0)).length() < EPS);

        let arrived = move_towards(start, target, 10.0);
        assert_eq!(arrived, target);
    }

    #[test]
    fn test_delta_angle_shortest_path() {
        assert!((delta_angle(0.0, -90.0) - (-90.0)).abs() < EPS);
        assert!((delta_angle(350.0, 10.0) - 20.0).abs() < EPS);
        assert!((delta_angle(10.0, 350.0) - (-20.0)).abs() < EPS);
        assert!((delta_angle(0.0, 180.0) - 180.0).abs() < EPS);
    }

    #[test]
    fn test_move_towards_angle_snaps_to_target() {
        assert!((move_towards_angle(0.0, -90.0, 30.0) - (-30.0)).abs() < EPS);
        assert_eq!(move_towards_angle(-80.0, -90.0, 30.0), -90.0);
        // Кратчайшая дуга через 0/360
        assert!((move_towards_angle(350.0, 30.0, 15.0) - 365.0).abs() < EPS);
    }

    #[test]
    fn test_look_rotation_planar_matches_forward() {
        let direction = Vec3::new(1.0, 3.0, 0.0);
        let rotation = look_rotation_planar(direction).expect("has horizontal component");
        let forward = rotation * Vec3::NEG_Z;
        assert!((forward - Vec3::X).length() < EPS);
        assert!((yaw_degrees(rotation) - (-90.0)).abs() < EPS);
        assert!(look_rotation_planar(Vec3::Y).is_none());
    }

    #[test]
    fn test_yaw_roundtrip() {
        for yaw in [-135.0_f32, -90.0, 0.0, 45.0, 170.0] {
            assert!((yaw_degrees(yaw_rotation(yaw)) - yaw).abs() < EPS, "yaw {}", yaw);
        }
    }
}
