// ServerLogs - core/schedule.rs
//
// Deterministic recurring timer driven by the caller's clock.
//
// The timer owns no thread and no OS handle: it only remembers when the next
// fire is due. Callers pass `now` into `fire_due`, which reports how many
// whole intervals have elapsed and advances the phase. Arming an armed timer
// keeps its phase, so repeated `arm` calls can never produce a second,
// overlapping schedule.

use std::time::{Duration, Instant};

/// Smallest accepted interval. A zero interval would fire unboundedly.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    /// `Some` while armed.
    next_due: Option<Instant>,
}

impl IntervalTimer {
    /// Create a disarmed timer.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Arm the timer so it first fires one interval after `now`.
    ///
    /// Returns `false` (and changes nothing) if it was already armed.
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now + self.interval);
        true
    }

    /// Cancel any pending fire. Returns `false` if it was not armed.
    pub fn disarm(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Time left until the next fire, zero if overdue, `None` when disarmed.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Number of fires due at `now`. Advances the phase past `now` by whole
    /// intervals, so the schedule does not drift when polled late.
    pub fn fire_due(&mut self, now: Instant) -> u64 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += self.interval;
        }
        self.next_due = Some(due);
        fired
    }
}
