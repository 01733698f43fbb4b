// ServerLogs - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ServerLogs";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ServerLogs";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Live feed
// =============================================================================

/// Maximum number of entries held by a feed. Once exceeded, the oldest
/// entries (the tail of the head-first buffer) are dropped.
pub const MAX_ENTRIES: usize = 100;

/// Fixed interval between synthetic entries while the feed is enabled (s).
pub const FEED_INTERVAL_SECS: u64 = 5;

/// Render format for entry timestamps. Applied once, at creation.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Candidate messages for synthetically generated entries.
pub const SYNTHETIC_MESSAGES: &[&str] = &[
    "Player activity detected",
    "Resource usage normal",
    "Backup process started",
    "Network latency increased",
    "Player disconnected unexpectedly",
    "Achievement unlocked by player",
];

/// Whether the feed is running when the viewer opens.
pub const DEFAULT_AUTO_REFRESH: bool = true;

/// Server the log panel is labelled with when none is configured.
pub const DEFAULT_SERVER_NAME: &str = "Minecraft Server";

/// Upper bound on the configured server name length (characters).
pub const MAX_SERVER_NAME_LEN: usize = 64;

/// Maximum size of a seed JSON file in bytes.
pub const MAX_SEED_FILE_SIZE: u64 = 1024 * 1024; // 1 MB

/// Largest entry id a seed may carry (2^53 - 1, the largest integer JSON
/// consumers can hold exactly). Leaves the id counter room to count forward.
pub const MAX_SEED_ID: u64 = (1 << 53) - 1;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
