// ServerLogs - tests/e2e_feed.rs
//
// End-to-end tests for the live feed pipeline: seed file on disk ->
// seed loader -> feed driven by a synthetic clock -> export.
//
// These use the real filesystem and the real serde/csv paths, no mocks.
// Time is supplied explicitly so every schedule check is deterministic.

use serverlogs::app::seed_loader;
use serverlogs::core::export;
use serverlogs::core::feed::LiveLogFeed;
use serverlogs::core::model::{LogEntry, LogLevel};
use serverlogs::util::constants::{FEED_INTERVAL_SECS, MAX_ENTRIES};
use serverlogs::util::error::SeedError;
use std::fs;
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_secs(FEED_INTERVAL_SECS);

fn ids(feed: &LiveLogFeed) -> Vec<u64> {
    feed.snapshot().iter().map(|e| e.id).collect()
}

/// A seed file on disk becomes the head-first initial buffer, and ticks
/// continue numbering past its largest id.
#[test]
fn e2e_seed_file_then_ticks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    fs::write(
        &path,
        r#"[
            {"id": 3, "timestamp": "2025-07-23 14:32:45", "level": "WARNING", "message": "High CPU usage detected (85%)"},
            {"id": 2, "timestamp": "2025-07-23 14:31:22", "level": "INFO", "message": "Player 'gamer123' joined the server"},
            {"id": 1, "timestamp": "2025-07-23 14:30:15", "level": "INFO", "message": "Server started successfully"}
        ]"#,
    )
    .unwrap();

    let (seed, err) = seed_loader::load_seed(Some(&path));
    assert!(err.is_none(), "unexpected seed error: {err:?}");

    let t0 = Instant::now();
    let mut feed = LiveLogFeed::new(seed);
    feed.start_at(t0);

    assert_eq!(feed.poll(t0 + INTERVAL * 2), 2);
    assert_eq!(ids(&feed), vec![5, 4, 3, 2, 1]);
}

/// Running for a long simulated period with pauses keeps every invariant:
/// bounded length, strictly increasing ids, nothing generated while paused.
#[test]
fn e2e_long_run_with_pauses() {
    let t0 = Instant::now();
    let mut feed = LiveLogFeed::new(serverlogs::core::seed::builtin_seed());
    feed.start_at(t0);

    let mut clock = t0;
    let mut highest = 7;
    for round in 0..40u32 {
        // Five intervals running ...
        for _ in 0..5 {
            clock += INTERVAL;
            assert_eq!(feed.poll(clock), 1);
            let head = feed.snapshot()[0].id;
            assert_eq!(head, highest + 1);
            highest = head;
            assert!(feed.len() <= MAX_ENTRIES);
        }
        // ... then paused for a while.
        feed.stop();
        let before = feed.len();
        clock += INTERVAL * (round % 4 + 1);
        assert_eq!(feed.poll(clock), 0);
        assert_eq!(feed.len(), before);
        feed.start_at(clock);
    }

    assert_eq!(feed.len(), MAX_ENTRIES);
    let snapshot = ids(&feed);
    assert!(snapshot.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(snapshot[0], 7 + 200);
}

/// The exported CSV lists exactly the snapshot, newest first.
#[test]
fn e2e_export_matches_snapshot_order() {
    let seed = vec![
        LogEntry::new(2, "2025-07-23 14:34:20", LogLevel::Error, "Failed to save world data"),
        LogEntry::new(1, "2025-07-23 14:30:15", LogLevel::Info, "Server started successfully"),
    ];
    let mut feed = LiveLogFeed::new(seed);
    feed.tick();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let file = fs::File::create(&path).unwrap();
    let n = export::export_csv(feed.snapshot(), file, &path).unwrap();
    assert_eq!(n, 3);

    let content = fs::read_to_string(&path).unwrap();
    let exported_ids: Vec<&str> = content
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(exported_ids, vec!["3", "2", "1"]);
}

/// A rejected seed file does not stop the feed from being built.
#[test]
fn e2e_bad_seed_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    fs::write(
        &path,
        r#"[{"id": 1, "timestamp": "t", "level": "FATAL", "message": "m"}]"#,
    )
    .unwrap();

    let (seed, err) = seed_loader::load_seed(Some(&path));
    assert!(err.is_some());
    let mut feed = LiveLogFeed::new(seed);
    assert_eq!(feed.len(), 7);
    assert_eq!(feed.tick().id, 8);
}

/// A seed file with an id at the top of the u64 range is rejected before it
/// can reach the id counter, so numbering continues from the built-in sample.
#[test]
fn e2e_seed_id_at_u64_max_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    fs::write(
        &path,
        r#"[{"id": 18446744073709551615, "timestamp": "2025-07-23 14:30:15", "level": "INFO", "message": "Server started successfully"}]"#,
    )
    .unwrap();

    let (seed, err) = seed_loader::load_seed(Some(&path));
    assert!(
        matches!(err, Some(SeedError::IdOutOfRange { id, .. }) if id == u64::MAX),
        "got {err:?}"
    );

    let t0 = Instant::now();
    let mut feed = LiveLogFeed::new(seed);
    feed.start_at(t0);
    assert_eq!(feed.poll(t0 + INTERVAL * 3), 3);
    assert_eq!(ids(&feed)[..3], [10, 9, 8]);
    assert_eq!(feed.len(), 10);
}
