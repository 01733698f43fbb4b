// ServerLogs - core/seed.rs
//
// Initial entries for a feed: the built-in sample set, or a JSON array
// supplied by the user. Parsing is pure; reading the file happens in
// app::seed_loader.

use crate::core::model::{LogEntry, LogLevel};
use crate::util::constants::MAX_SEED_ID;
use crate::util::error::SeedError;
use std::collections::HashSet;
use std::path::Path;

/// The sample log shown when no seed file is configured.
pub fn builtin_seed() -> Vec<LogEntry> {
    vec![
        LogEntry::new(1, "2025-07-23 14:30:15", LogLevel::Info, "Server started successfully"),
        LogEntry::new(2, "2025-07-23 14:31:22", LogLevel::Info, "Player 'gamer123' joined the server"),
        LogEntry::new(3, "2025-07-23 14:32:45", LogLevel::Warning, "High CPU usage detected (85%)"),
        LogEntry::new(4, "2025-07-23 14:33:10", LogLevel::Info, "Player 'pro_gamer' joined the server"),
        LogEntry::new(5, "2025-07-23 14:34:20", LogLevel::Error, "Failed to save world data"),
        LogEntry::new(6, "2025-07-23 14:35:05", LogLevel::Info, "Backup completed successfully"),
        LogEntry::new(7, "2025-07-23 14:36:30", LogLevel::Info, "Player 'gamer123' left the server"),
    ]
}

/// On-disk shape of one seed entry. `level` is kept as text so an
/// unrecognised value can be reported with its entry id.
#[derive(Debug, serde::Deserialize)]
struct RawSeedEntry {
    id: u64,
    timestamp: String,
    level: String,
    message: String,
}

/// Parse a JSON array of seed entries, keeping file order.
///
/// `path` is used only for error context.
pub fn parse_seed_json(content: &str, path: &Path) -> Result<Vec<LogEntry>, SeedError> {
    let raw: Vec<RawSeedEntry> =
        serde_json::from_str(content).map_err(|e| SeedError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut seen = HashSet::with_capacity(raw.len());
    raw.into_iter()
        .map(|r| {
            if r.id > MAX_SEED_ID {
                return Err(SeedError::IdOutOfRange {
                    id: r.id,
                    max: MAX_SEED_ID,
                });
            }
            if !seen.insert(r.id) {
                return Err(SeedError::DuplicateId { id: r.id });
            }
            let level = LogLevel::from_label(&r.level).ok_or(SeedError::UnknownLevel {
                id: r.id,
                level: r.level,
            })?;
            Ok(LogEntry::new(r.id, r.timestamp, level, r.message))
        })
        .collect()
}
