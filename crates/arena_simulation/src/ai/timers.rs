//! Timer queue для вспомогательных таймеров агента
//!
//! Заменяет delayed callbacks: записи отсортированы по remaining,
//! опрашиваются один раз за tick (`tick_movement_timers`).

use bevy::prelude::*;

use crate::ai::TargetSense;
use crate::components::MoveSpeed;

/// Что делать когда таймер истёк
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Вернуть MoveSpeed.current = base (конец charge wind-up)
    ResumeMovement,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTimer {
    pub remaining: f32,
    pub action: TimerAction,
}

/// Очередь таймеров одного агента
#[derive(Component, Debug, Clone, Default)]
pub struct MovementTimers {
    entries: Vec<ScheduledTimer>,
}

impl MovementTimers {
    /// Добавить таймер (очередь остаётся отсортированной по remaining)
    pub fn schedule(&mut self, duration: f32, action: TimerAction) {
        let remaining = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        let index = self
            .entries
            .partition_point(|entry| entry.remaining <= remaining);
        self.entries.insert(index, ScheduledTimer { remaining, action });
    }

    /// Продвинуть все таймеры; вернуть истёкшие (в порядке истечения)
    pub fn tick(&mut self, dt: f32) -> Vec<TimerAction> {
        if dt.is_finite() && dt > 0.0 {
            for entry in self.entries.iter_mut() {
                entry.remaining = (entry.remaining - dt).max(0.0);
            }
        }
        let expired = self.entries.partition_point(|entry| entry.remaining <= 0.0);
        self.entries.drain(..expired).map(|entry| entry.action).collect()
    }

    pub fn is_pending(&self, action: TimerAction) -> bool {
        self.entries.iter().any(|entry| entry.action == action)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Система: опрос timer queue и применение истёкших действий
pub fn tick_movement_timers(
    mut agents: Query<(Entity, &mut MovementTimers, &mut MoveSpeed, &TargetSense)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut timers, mut speed, sense) in agents.iter_mut() {
        if timers.is_empty() {
            continue;
        }

        for action in timers.tick(sense.scaled(delta)) {
            match action {
                TimerAction::ResumeMovement => {
                    // Перекрывающиеся остановки: двигаемся только после последней
                    if !timers.is_pending(TimerAction::ResumeMovement) {
                        speed.resume();
                        crate::log(&format!("AI: {:?} movement resumed ({} m/s)", entity, speed.current));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_after_duration() {
        let mut timers = MovementTimers::default();
        timers.schedule(1.0, TimerAction::ResumeMovement);

        assert!(timers.tick(0.5).is_empty());
        assert!(timers.is_pending(TimerAction::ResumeMovement));

        let fired = timers.tick(0.5);
        assert_eq!(fired, vec![TimerAction::ResumeMovement]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_timers_sorted_by_remaining() {
        let mut timers = MovementTimers::default();
        timers.schedule(2.0, TimerAction::ResumeMovement);
        timers.schedule(0.5, TimerAction::ResumeMovement);

        let fired = timers.tick(1.0);
        assert_eq!(fired.len(), 1);
        assert!(timers.is_pending(TimerAction::ResumeMovement));

        let fired = timers.tick(1.0);
        assert_eq!(fired.len(), 1);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_negative_and_nan_durations_fire_immediately() {
        let mut timers = MovementTimers::default();
        timers.schedule(-3.0, TimerAction::ResumeMovement);
        timers.schedule(f32::NAN, TimerAction::ResumeMovement);

        assert_eq!(timers.tick(0.0).len(), 2);
    }
}
