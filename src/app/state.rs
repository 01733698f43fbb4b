// ServerLogs - app/state.rs
//
// Application state management. Owns the live feed plus the view settings.
// Owned by the eframe::App implementation; panels read it and issue
// commands through the methods here rather than mutating the feed directly.

use crate::core::feed::LiveLogFeed;
use crate::platform::config::AppConfig;
use crate::util::constants::FEED_INTERVAL_SECS;
use std::time::{Duration, Instant};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The server's log feed.
    pub feed: LiveLogFeed,

    /// Server the log panel belongs to.
    pub server_name: String,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings from startup (config, seed file).
    pub warnings: Vec<String>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether to show the startup warnings window.
    pub show_warnings: bool,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,
}

impl AppState {
    /// Create initial state around a seeded feed.
    ///
    /// The feed is started here when `config.auto_refresh` is set.
    pub fn new(mut feed: LiveLogFeed, config: &AppConfig, warnings: Vec<String>) -> Self {
        if config.auto_refresh {
            feed.start();
        }
        let status_message = auto_refresh_status(feed.is_enabled());
        Self {
            feed,
            server_name: config.server_name.clone(),
            status_message,
            show_warnings: !warnings.is_empty(),
            warnings,
            show_about: false,
            dark_mode: config.dark_mode,
        }
    }

    /// Whether the feed is generating entries.
    pub fn auto_refresh(&self) -> bool {
        self.feed.is_enabled()
    }

    /// Flip auto-refresh. Returns the new state.
    pub fn toggle_auto_refresh(&mut self, now: Instant) -> bool {
        let enabled = self.feed.toggle_at(now);
        self.status_message = auto_refresh_status(enabled);
        enabled
    }

    /// Advance the feed to `now`. Returns the number of new entries.
    pub fn poll_feed(&mut self, now: Instant) -> u64 {
        let added = self.feed.poll(now);
        if added > 0 {
            if let Some(latest) = self.feed.snapshot().front() {
                self.status_message = format!("Last entry #{} at {}", latest.id, latest.timestamp);
            }
        }
        added
    }

    /// How long the UI may sleep before the feed needs polling again.
    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        self.feed.time_until_next_tick(now)
    }
}

fn auto_refresh_status(enabled: bool) -> String {
    if enabled {
        format!("Auto-refresh on. New entry every {FEED_INTERVAL_SECS} s.")
    } else {
        "Auto-refresh paused.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::builtin_seed;

    fn state(auto_refresh: bool) -> AppState {
        let config = AppConfig {
            auto_refresh,
            ..AppConfig::default()
        };
        AppState::new(LiveLogFeed::new(builtin_seed()), &config, Vec::new())
    }

    #[test]
    fn test_auto_refresh_from_config() {
        assert!(state(true).auto_refresh());
        assert!(!state(false).auto_refresh());
        assert_eq!(state(false).status_message, "Auto-refresh paused.");
    }

    #[test]
    fn test_toggle_updates_status() {
        let mut s = state(false);
        let now = Instant::now();
        assert!(s.toggle_auto_refresh(now));
        assert!(s.status_message.starts_with("Auto-refresh on"));
        assert!(s.repaint_after(now).is_some());
        assert!(!s.toggle_auto_refresh(now));
        assert_eq!(s.repaint_after(now), None);
    }

    #[test]
    fn test_poll_reports_latest_entry() {
        let mut s = state(false);
        let t0 = Instant::now();
        s.toggle_auto_refresh(t0);
        let added = s.poll_feed(t0 + Duration::from_secs(FEED_INTERVAL_SECS));
        assert_eq!(added, 1);
        assert_eq!(s.feed.len(), 8);
        assert!(s.status_message.starts_with("Last entry #8"), "{}", s.status_message);
    }

    #[test]
    fn test_warnings_open_dialog() {
        let s = AppState::new(
            LiveLogFeed::new(Vec::new()),
            &AppConfig::default(),
            vec!["bad config".to_string()],
        );
        assert!(s.show_warnings);
    }
}
