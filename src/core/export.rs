// ServerLogs - core/export.rs
//
// CSV and JSON export of a feed snapshot.
// Core layer: writes to any Write trait object.

use crate::core::model::LogEntry;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export entries to CSV, in the order given.
///
/// Writes: id, timestamp, level, message
pub fn export_csv<'a, W, I>(entries: I, writer: W, export_path: &Path) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a LogEntry>,
{
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "timestamp", "level", "message"])
        .map_err(csv_err)?;

    let mut count = 0;
    for entry in entries {
        let id = entry.id.to_string();
        csv_writer
            .write_record([
                id.as_str(),
                entry.timestamp.as_str(),
                entry.level.label(),
                entry.message.as_str(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export entries to JSON (array of objects), in the order given.
pub fn export_json<'a, W, I>(entries: I, writer: W, export_path: &Path) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a LogEntry>,
{
    let entries: Vec<&LogEntry> = entries.into_iter().collect();
    serde_json::to_writer_pretty(writer, &entries).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::LogLevel;

    fn make_entry(id: u64, level: LogLevel, message: &str) -> LogEntry {
        LogEntry::new(id, "2025-07-23 14:30:15", level, message)
    }

    #[test]
    fn test_csv_export() {
        let entries = vec![
            make_entry(2, LogLevel::Error, "Failed to save world data"),
            make_entry(1, LogLevel::Info, "Server started, all good"),
        ];
        let mut buf = Vec::new();
        let count = export_csv(&entries, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "id,timestamp,level,message");
        assert_eq!(lines[1], "2,2025-07-23 14:30:15,ERROR,Failed to save world data");
        // Commas in messages are quoted.
        assert_eq!(lines[2], "1,2025-07-23 14:30:15,INFO,\"Server started, all good\"");
    }

    #[test]
    fn test_json_export() {
        let entries = vec![make_entry(1, LogLevel::Warning, "High CPU usage detected (85%)")];
        let mut buf = Vec::new();
        let count = export_json(&entries, &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 1);

        let parsed: Vec<LogEntry> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, entries);
    }
}
