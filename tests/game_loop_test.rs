//! Integration test: shared loop mechanics
//!
//! Frame clock, tick gate and record store behaviour as seen from outside
//! the crate.

use arcade::core::{FrameClock, NamedRecord, RecordStore, ScoreRecord, TickGate};
use arcade::utils::persistence::data_dir;
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arcade-loop-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

// =============================================================================
// Timing
// =============================================================================

#[test]
fn test_first_frame_has_no_elapsed_time() {
    let mut clock = FrameClock::new();
    let start = Instant::now() + Duration::from_secs(3600);
    assert_eq!(clock.delta_ms(start), 0);
    assert_eq!(clock.delta_ms(start + Duration::from_millis(17)), 17);
}

#[test]
fn test_gate_over_many_frames() {
    // 16ms frames against a 100ms delay: a move every 7th frame
    let mut gate = TickGate::new(100);
    let fired: Vec<usize> = (1..=21).filter(|_| gate.advance(16)).collect();
    assert_eq!(fired, vec![7, 14, 21]);
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn test_missing_record_is_default() {
    let dir = scratch_dir();
    let store: RecordStore<ScoreRecord> = RecordStore::open(&dir, "missing.json");
    assert_eq!(store.best().score, 0);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_only_strictly_higher_scores_overwrite() {
    let dir = scratch_dir();
    let mut store: RecordStore<ScoreRecord> = RecordStore::open(&dir, "r.json");

    assert!(store.submit(ScoreRecord { score: 5 }).unwrap());
    assert!(!store.submit(ScoreRecord { score: 5 }).unwrap());
    assert!(!store.submit(ScoreRecord { score: 2 }).unwrap());

    let fresh: RecordStore<ScoreRecord> = RecordStore::open(&dir, "r.json");
    assert_eq!(fresh.best().score, 5);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_named_record_missing_fields_use_defaults() {
    let dir = scratch_dir();
    std::fs::write(dir.join("named.json"), r#"{ "score": 4 }"#).unwrap();
    let store: RecordStore<NamedRecord> = RecordStore::open(&dir, "named.json");
    assert_eq!(store.best().name, "NONE");
    assert_eq!(store.best().score, 4);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_failed_write_keeps_playing() {
    let dir = scratch_dir();
    // A directory where the file should be makes the write fail
    std::fs::create_dir_all(dir.join("blocked.json")).unwrap();
    let mut store: RecordStore<ScoreRecord> = RecordStore::open(&dir, "blocked.json");
    assert!(store.submit(ScoreRecord { score: 3 }).is_err());
    assert_eq!(store.best().score, 3);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_data_dir_override_is_created() {
    let dir = std::env::temp_dir()
        .join(format!("arcade-data-{}", uuid::Uuid::new_v4()))
        .join("nested");
    let resolved = data_dir(Some(&dir)).unwrap();
    assert_eq!(resolved, dir);
    assert!(dir.is_dir());
    std::fs::remove_dir_all(dir.parent().unwrap()).ok();
}
