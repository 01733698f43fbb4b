// ServerLogs - core/feed.rs
//
// Live log feed: a bounded, head-first buffer of entries that grows by one
// synthetic entry per interval while enabled.
//
// Invariants:
//   - At most MAX_ENTRIES entries. Index 0 is the newest; eviction always
//     removes from the back (oldest by insertion, not by timestamp).
//   - Ids come from a counter that only moves forward. It starts one past the
//     largest seed id and is never derived from the buffer length, so ids stay
//     unique after eviction. Seed ids above MAX_SEED_ID are dropped, so the
//     counter has 2^64 - 2^53 ids of headroom.
//   - `enabled` is exactly "the interval timer is armed"; there is no second
//     flag to drift out of sync.
//
// The feed never reads the wall clock on its own schedule. Callers drive it
// with `poll(now)` (the GUI once per frame) or with explicit `tick()` calls,
// which keeps every behaviour reproducible in tests.

use crate::core::model::{LogEntry, LogLevel};
use crate::core::schedule::IntervalTimer;
use crate::util::constants::{
    FEED_INTERVAL_SECS, MAX_ENTRIES, MAX_SEED_ID, SYNTHETIC_MESSAGES, TIMESTAMP_FORMAT,
};
use chrono::{DateTime, Local};
use rand::Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct LiveLogFeed {
    entries: VecDeque<LogEntry>,
    next_id: u64,
    timer: IntervalTimer,
}

impl LiveLogFeed {
    /// Create a stopped feed holding `seed`, in the order given (head first).
    ///
    /// Seeds longer than `MAX_ENTRIES` keep their first `MAX_ENTRIES` entries.
    /// Entries with an id above `MAX_SEED_ID` are dropped.
    pub fn new(seed: Vec<LogEntry>) -> Self {
        let mut entries: VecDeque<LogEntry> = seed.into();
        let before = entries.len();
        entries.retain(|e| e.id <= MAX_SEED_ID);
        if entries.len() < before {
            tracing::warn!(
                dropped = before - entries.len(),
                max_id = MAX_SEED_ID,
                "Seed entries with out-of-range ids dropped"
            );
        }
        let next_id = entries
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(1, |max| max + 1);
        if entries.len() > MAX_ENTRIES {
            tracing::debug!(
                seed = entries.len(),
                cap = MAX_ENTRIES,
                "Seed exceeds feed capacity; truncating"
            );
            entries.truncate(MAX_ENTRIES);
        }
        Self {
            entries,
            next_id,
            timer: IntervalTimer::new(Duration::from_secs(FEED_INTERVAL_SECS)),
        }
    }

    // -------------------------------------------------------------------------
    // Enable state
    // -------------------------------------------------------------------------

    pub fn is_enabled(&self) -> bool {
        self.timer.is_armed()
    }

    /// Begin periodic generation. No-op if already started.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        if self.timer.arm(now) {
            tracing::info!(
                interval_secs = self.timer.interval().as_secs(),
                "Live feed started"
            );
        }
    }

    /// Halt periodic generation and cancel the pending fire. Idempotent.
    pub fn stop(&mut self) {
        if self.timer.disarm() {
            tracing::info!(entries = self.entries.len(), "Live feed stopped");
        }
    }

    /// Flip the enabled state. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.toggle_at(Instant::now())
    }

    pub fn toggle_at(&mut self, now: Instant) -> bool {
        if self.is_enabled() {
            self.stop();
        } else {
            self.start_at(now);
        }
        self.is_enabled()
    }

    // -------------------------------------------------------------------------
    // Generation
    // -------------------------------------------------------------------------

    /// Synthesise one entry stamped with the current local time.
    pub fn tick(&mut self) -> &LogEntry {
        self.tick_with(&mut rand::rng(), Local::now())
    }

    /// Synthesise one entry with a caller-supplied random source and time.
    ///
    /// Level and message are each drawn uniformly from their fixed sets.
    pub fn tick_with<R: Rng>(&mut self, rng: &mut R, at: DateTime<Local>) -> &LogEntry {
        let levels = LogLevel::all();
        let level = levels[rng.random_range(0..levels.len())];
        let message = SYNTHETIC_MESSAGES[rng.random_range(0..SYNTHETIC_MESSAGES.len())];

        let id = self.next_id;
        // Never saturates: the counter starts at or below MAX_SEED_ID + 1.
        self.next_id = id.saturating_add(1);

        let entry = LogEntry::new(id, at.format(TIMESTAMP_FORMAT).to_string(), level, message);
        tracing::debug!(id, level = %level, msg = message, "Feed tick");

        self.entries.push_front(entry);
        self.entries.truncate(MAX_ENTRIES);
        &self.entries[0]
    }

    /// Run the ticks that have come due by `now`. Returns the number of
    /// entries generated; always zero while stopped.
    ///
    /// After a long stall (e.g. a minimised window) at most `MAX_ENTRIES`
    /// ticks run, since anything older would be evicted straight away. The
    /// skipped ticks consume no ids, so ids stay contiguous.
    pub fn poll(&mut self, now: Instant) -> u64 {
        self.poll_with(now, &mut rand::rng())
    }

    pub fn poll_with<R: Rng>(&mut self, now: Instant, rng: &mut R) -> u64 {
        let due = self.timer.fire_due(now);
        let run = due.min(MAX_ENTRIES as u64);
        if run < due {
            tracing::debug!(due, run, "Feed fell behind; skipping missed ticks");
        }
        let at = Local::now();
        for _ in 0..run {
            self.tick_with(rng, at);
        }
        run
    }

    /// Time until the next scheduled tick, `None` while stopped.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Current entries, newest first.
    pub fn snapshot(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The id the next generated entry will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
