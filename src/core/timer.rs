//! Einmal-Timer für den Animationstakt.
//!
//! Es gibt keinen wiederkehrenden Timer: wer getaktet werden will,
//! plant sich nach jedem Tick selbst neu ein.

use std::time::{Duration, Instant};

/// "Ruf mich nach N ms zurück" – die einzige Scheduling-Primitive.
pub trait TickScheduler {
    /// Plant genau einen Rückruf nach `after` ein (ersetzt einen offenen).
    fn schedule_tick(&mut self, after: Duration);
}

/// Deadline-basierter Einmal-Timer, der von der Event-Loop abgefragt wird.
#[derive(Debug, Clone, Default)]
pub struct OneShotTimer {
    deadline: Option<Instant>,
}

impl OneShotTimer {
    /// Erstellt einen nicht gestellten Timer.
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Ob ein Rückruf aussteht.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Liefert `true` genau einmal, sobald die Deadline erreicht ist, und entschärft den Timer.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Verbleibende Zeit bis zur Deadline (`None` = nicht gestellt).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Entschärft den Timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl TickScheduler for OneShotTimer {
    fn schedule_tick(&mut self, after: Duration) {
        self.deadline = Some(Instant::now() + after);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_timer_never_fires() {
        let mut timer = OneShotTimer::new();
        assert!(!timer.take_due(Instant::now() + Duration::from_secs(60)));
        assert_eq!(timer.remaining(Instant::now()), None);
    }

    #[test]
    fn armed_timer_fires_once() {
        let mut timer = OneShotTimer::new();
        timer.schedule_tick(Duration::from_millis(10));
        let later = Instant::now() + Duration::from_secs(1);

        assert!(timer.take_due(later));
        assert!(!timer.take_due(later));
        assert!(!timer.is_armed());
    }

    #[test]
    fn timer_does_not_fire_early() {
        let mut timer = OneShotTimer::new();
        let before = Instant::now();
        timer.schedule_tick(Duration::from_secs(60));

        assert!(!timer.take_due(before));
        assert!(timer.remaining(before).is_some_and(|d| d > Duration::from_secs(59)));
    }
}
