//! Host-side gravity timer.
//!
//! The engine never reads a clock; it only reports `TickIntervalChanged`. This
//! scheduler owns the single pending deadline and replaces it when the interval
//! changes, so two ticks are never pending at once.

use std::time::{Duration, Instant};

use crate::types::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickScheduler {
    interval: Duration,
    next_due: Instant,
}

impl TickScheduler {
    /// First tick fires one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Cancel the pending tick and install a new one at `interval` from `now`.
    pub fn reschedule(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_due = now + interval;
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Zero once due.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Arm the next tick after one has fired at `now`.
    ///
    /// Counts from the firing time rather than the old deadline, so a stalled
    /// frame never produces a burst of catch-up ticks.
    pub fn advance(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }

    /// React to an engine event. Returns true if the timer was replaced.
    pub fn handle_event(&mut self, event: &GameEvent, now: Instant) -> bool {
        match *event {
            GameEvent::TickIntervalChanged(interval) => {
                self.reschedule(interval, now);
                true
            }
            _ => false,
        }
    }
}
