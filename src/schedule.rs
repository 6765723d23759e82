//! Recurring refresh timer for the dashboard session.
//!
//! The schedule is polled from the UI loop, so every cycle runs on the UI
//! thread and two cycles never overlap. Cancelling it ends all future ticks.

use std::time::{Duration, Instant};

/// Default interval between scheduled refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(2 * 60 * 60);

/// A fixed-interval schedule whose first tick is due immediately.
#[derive(Debug, Clone)]
pub struct RefreshSchedule {
    interval: Duration,
    /// `None` once cancelled.
    next_due: Option<Instant>,
}

impl RefreshSchedule {
    /// Start a schedule with the first tick due at `now`.
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: Some(now),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a tick is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Consume a due tick, scheduling the next one an interval after `now`.
    ///
    /// Returns `false` if no tick was due or the schedule is cancelled.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.next_due = Some(now + self.interval);
        true
    }

    /// Time left until the next tick, `None` once cancelled.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Stop all future ticks.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.next_due.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_immediate() {
        let now = Instant::now();
        let mut schedule = RefreshSchedule::start(DEFAULT_REFRESH_INTERVAL, now);

        assert!(schedule.is_due(now));
        assert!(schedule.take_due(now));
        assert!(!schedule.is_due(now));
    }

    #[test]
    fn test_ticks_every_interval() {
        let start = Instant::now();
        let interval = Duration::from_secs(7_200);
        let mut schedule = RefreshSchedule::start(interval, start);
        assert!(schedule.take_due(start));

        assert!(!schedule.take_due(start + Duration::from_secs(7_199)));
        assert_eq!(
            schedule.remaining(start + Duration::from_secs(7_000)),
            Some(Duration::from_secs(200))
        );
        assert!(schedule.take_due(start + interval));
        assert!(!schedule.is_due(start + interval + Duration::from_secs(1)));
    }

    #[test]
    fn test_late_tick_reschedules_from_now() {
        let start = Instant::now();
        let interval = Duration::from_secs(60);
        let mut schedule = RefreshSchedule::start(interval, start);
        schedule.take_due(start);

        let late = start + Duration::from_secs(200);
        assert!(schedule.take_due(late));
        assert_eq!(schedule.remaining(late), Some(interval));
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let now = Instant::now();
        let mut schedule = RefreshSchedule::start(Duration::from_secs(1), now);
        schedule.cancel();

        assert!(schedule.is_cancelled());
        assert!(!schedule.take_due(now + Duration::from_secs(10)));
        assert!(schedule.remaining(now).is_none());
    }
}
