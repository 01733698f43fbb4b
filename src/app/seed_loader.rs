// ServerLogs - app/seed_loader.rs
//
// Chooses the initial entries for the feed: a user-supplied JSON seed file
// when one is configured, otherwise the built-in sample log.
// A bad seed file is non-fatal: the error is reported and the built-in
// sample is used instead.

use crate::core::model::LogEntry;
use crate::core::seed;
use crate::util::constants;
use crate::util::error::SeedError;
use std::path::Path;

/// Resolve the seed for a new feed.
///
/// Returns the entries and the error that forced a fallback, if any.
pub fn load_seed(seed_file: Option<&Path>) -> (Vec<LogEntry>, Option<SeedError>) {
    let Some(path) = seed_file else {
        let entries = seed::builtin_seed();
        tracing::info!(count = entries.len(), "Using built-in sample log");
        return (entries, None);
    };

    match load_seed_file(path) {
        Ok(entries) => {
            tracing::info!(
                file = %path.display(),
                count = entries.len(),
                "Loaded seed file"
            );
            (entries, None)
        }
        Err(e) => {
            tracing::warn!(
                file = %path.display(),
                error = %e,
                "Seed file rejected; using built-in sample log"
            );
            (seed::builtin_seed(), Some(e))
        }
    }
}

/// Read and parse one seed file.
pub fn load_seed_file(path: &Path) -> Result<Vec<LogEntry>, SeedError> {
    let io_err = |e| SeedError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > constants::MAX_SEED_FILE_SIZE {
        return Err(SeedError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_SEED_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(io_err)?;
    seed::parse_seed_json(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::LogLevel;
    use std::fs;

    #[test]
    fn test_no_seed_file_uses_builtin() {
        let (entries, err) = load_seed(None);
        assert!(err.is_none());
        assert_eq!(entries, seed::builtin_seed());
    }

    #[test]
    fn test_seed_file_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(
            &path,
            r#"[{"id": 1, "timestamp": "2025-07-23 09:00:00", "level": "WARNING", "message": "Lag spike"}]"#,
        )
        .unwrap();

        let (entries, err) = load_seed(Some(&path));
        assert!(err.is_none(), "unexpected error: {err:?}");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Warning);
    }

    #[test]
    fn test_missing_seed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let (entries, err) = load_seed(Some(&path));
        assert!(matches!(err, Some(SeedError::Io { .. })), "got {err:?}");
        assert_eq!(entries, seed::builtin_seed());
    }

    #[test]
    fn test_oversized_seed_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.json");
        let body = " ".repeat(constants::MAX_SEED_FILE_SIZE as usize + 1);
        fs::write(&path, body).unwrap();
        let err = load_seed_file(&path).unwrap_err();
        assert!(matches!(err, SeedError::FileTooLarge { .. }), "got {err:?}");
    }
}
