//! Tests for positional damage.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::combat::{classify_hit, hit_side, HitSide};
    use crate::config::presets::enemy;

    #[test]
    fn test_classify_front_back_side() {
        assert_eq!(classify_hit(1.0), HitSide::Front);
        assert_eq!(classify_hit(-1.0), HitSide::Back);
        assert_eq!(classify_hit(0.0), HitSide::Side);
    }

    #[test]
    fn test_classify_exact_boundaries_are_side() {
        // Строгие неравенства: ровно 0.5 и ровно −0.7 → side
        assert_eq!(classify_hit(0.5), HitSide::Side);
        assert_eq!(classify_hit(-0.7), HitSide::Side);

        assert_eq!(classify_hit(0.5001), HitSide::Front);
        assert_eq!(classify_hit(-0.7001), HitSide::Back);
    }

    #[test]
    fn test_enemy_multipliers() {
        let profile = enemy();
        assert_eq!(HitSide::Front.multiplier(&profile.damage), 1.0);
        assert_eq!(HitSide::Side.multiplier(&profile.damage), 1.1);
        assert_eq!(HitSide::Back.multiplier(&profile.damage), 1.5);
    }

    #[test]
    fn test_hit_side_from_positions() {
        // Агент смотрит в −Z (default forward)
        let forward = Vec3::NEG_Z;

        assert_eq!(hit_side(forward, Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0)), HitSide::Front);
        assert_eq!(hit_side(forward, Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0)), HitSide::Back);
        assert_eq!(hit_side(forward, Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)), HitSide::Side);
    }

    #[test]
    fn test_hit_side_uses_height() {
        // Цель сильно выше: 3D направление → dot мал → side
        let side = hit_side(Vec3::NEG_Z, Vec3::ZERO, Vec3::new(0.0, 10.0, -1.0));
        assert_eq!(side, HitSide::Side);
    }

    #[test]
    fn test_same_position_is_side() {
        assert_eq!(hit_side(Vec3::NEG_Z, Vec3::ONE, Vec3::ONE), HitSide::Side);
    }
}
