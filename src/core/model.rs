// ServerLogs - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.

use serde::{Deserialize, Serialize};

// =============================================================================
// Log Entry
// =============================================================================

/// A single logged event shown in the server log panel.
///
/// Entries are immutable once created: the timestamp is rendered to text at
/// creation time and never reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Monotonically increasing unique ID within one feed.
    pub id: u64,

    /// Creation time, already rendered for display.
    pub timestamp: String,

    /// Severity level.
    pub level: LogLevel,

    /// Message text.
    pub message: String,
}

impl LogEntry {
    pub fn new(
        id: u64,
        timestamp: impl Into<String>,
        level: LogLevel,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            level,
            message: message.into(),
        }
    }
}

// =============================================================================
// Log level
// =============================================================================

/// The fixed set of levels a server log entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// All variants, in the order synthetic generation draws from.
    pub fn all() -> &'static [LogLevel] {
        &[LogLevel::Info, LogLevel::Warning, LogLevel::Error]
    }

    /// Upper-case label as shown in the log panel.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// Parse an exact upper-case label. Matching is case-sensitive.
    pub fn from_label(label: &str) -> Option<LogLevel> {
        Self::all().iter().copied().find(|l| l.label() == label)
    }

    pub fn colour(&self) -> LevelColour {
        match self {
            LogLevel::Error => LevelColour::Red,
            LogLevel::Warning => LevelColour::Yellow,
            LogLevel::Info => LevelColour::Green,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Level colour
// =============================================================================

/// Display colour for a level, independent of any rendering toolkit.
/// The UI layer maps these to concrete RGB values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelColour {
    Red,
    Yellow,
    Green,
    Gray,
}

/// Colour for an arbitrary level label; anything that is not an exact
/// INFO / WARNING / ERROR label renders gray.
pub fn display_colour_for(label: &str) -> LevelColour {
    LogLevel::from_label(label)
        .map(|l| l.colour())
        .unwrap_or(LevelColour::Gray)
}
