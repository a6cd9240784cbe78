//! Tests for FSM AI components.

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::super::fsm::*;
    use super::super::plan::{AttackPlan, FollowUp};
    use crate::config::presets::{boss, enemy};

    fn near(health_fraction: f32) -> DecisionInput {
        DecisionInput {
            distance_to_target: 2.0,
            health_fraction,
        }
    }

    fn far(health_fraction: f32) -> DecisionInput {
        DecisionInput {
            distance_to_target: 30.0,
            health_fraction,
        }
    }

    #[test]
    fn test_agent_state_default() {
        assert_eq!(AgentState::default(), AgentState::Cooldown);
        assert!(!AttackGuard::default().is_attacking);
    }

    #[test]
    fn test_cooldown_monotone_and_non_negative() {
        let mut cooldown = ActionCooldown::new(1.0);
        let mut previous = cooldown.remaining;

        for _ in 0..100 {
            cooldown.tick(0.03);
            assert!(cooldown.remaining <= previous);
            assert!(cooldown.remaining >= 0.0);
            previous = cooldown.remaining;
        }
        assert_eq!(cooldown.remaining, 0.0);

        // Отрицательный / NaN dt не двигает таймер
        let mut cooldown = ActionCooldown::new(1.0);
        assert!(!cooldown.tick(-5.0));
        assert!(!cooldown.tick(f32::NAN));
        assert_eq!(cooldown.remaining, 1.0);
    }

    #[test]
    fn test_cooldown_expires_into_deciding() {
        let profile = boss();
        let mut state = AgentState::Cooldown;
        let mut cooldown = ActionCooldown::new(0.05);
        let mut guard = AttackGuard::default();

        assert_eq!(state.step(&mut cooldown, &mut guard, far(1.0), &profile, 0.02), Transition::Stay);
        assert_eq!(state.step(&mut cooldown, &mut guard, far(1.0), &profile, 0.02), Transition::Stay);
        assert_eq!(
            state.step(&mut cooldown, &mut guard, far(1.0), &profile, 0.02),
            Transition::ReadyToDecide
        );
        assert_eq!(state, AgentState::Deciding);
    }

    #[test]
    fn test_deciding_launches_and_sets_guard() {
        let profile = boss();
        let mut state = AgentState::Deciding;
        let mut cooldown = ActionCooldown::new(0.0);
        let mut guard = AttackGuard::default();

        let transition = state.step(&mut cooldown, &mut guard, far(1.0), &profile, 0.02);

        assert_eq!(
            transition,
            Transition::Launch(AttackPlan::Teleport {
                follow_up: FollowUp::CloseRange
            })
        );
        assert_eq!(state, AgentState::Acting);
        assert!(guard.is_attacking);
    }

    #[test]
    fn test_deciding_while_attacking_is_dropped() {
        let profile = enemy();
        let mut state = AgentState::Deciding;
        let mut cooldown = ActionCooldown::new(0.0);
        let mut guard = AttackGuard { is_attacking: true };

        let transition = state.step(&mut cooldown, &mut guard, near(1.0), &profile, 0.02);

        assert_eq!(transition, Transition::Dropped);
        assert_eq!(state, AgentState::Acting);
        assert!(guard.is_attacking);
    }

    #[test]
    fn test_deciding_without_tier_holds() {
        let profile = boss();
        let mut state = AgentState::Deciding;
        let mut cooldown = ActionCooldown::new(0.0);
        let mut guard = AttackGuard::default();

        // Boss ниже 1/3 health: tier'а нет
        let transition = state.step(&mut cooldown, &mut guard, near(0.2), &profile, 0.02);

        assert_eq!(transition, Transition::Hold);
        assert!(!guard.is_attacking);
    }

    #[test]
    fn test_acting_does_not_tick_cooldown() {
        let profile = enemy();
        let mut state = AgentState::Acting;
        let mut cooldown = ActionCooldown::new(2.0);
        let mut guard = AttackGuard { is_attacking: true };

        for _ in 0..500 {
            assert_eq!(
                state.step(&mut cooldown, &mut guard, near(1.0), &profile, 0.02),
                Transition::Stay
            );
        }
        assert_eq!(cooldown.remaining, 2.0);
    }

    #[test]
    fn test_reset_random_within_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut cooldown = ActionCooldown::new(0.0);

        for _ in 0..200 {
            cooldown.reset_random(&mut rng, 5.0, 10.0);
            assert!((5.0..=10.0).contains(&cooldown.remaining));
        }

        // min == max → ровно min
        cooldown.reset_random(&mut rng, 2.0, 2.0);
        assert_eq!(cooldown.remaining, 2.0);
    }

    #[test]
    fn test_reset_action_cooldown_returns_to_cooldown() {
        let profile = enemy();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = AgentState::Acting;
        let mut cooldown = ActionCooldown::new(0.0);
        let mut guard = AttackGuard { is_attacking: true };

        reset_action_cooldown(&mut state, &mut cooldown, &mut guard, &profile, &mut rng);

        assert_eq!(state, AgentState::Cooldown);
        assert!(!guard.is_attacking);
        assert_eq!(cooldown.remaining, 2.0);
    }
}
