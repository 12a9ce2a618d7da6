use jiff::{SignedDuration, Timestamp};
use sri_core::models::demographics::Demographics;
use sri_core::models::progress::ProgressSnapshot;
use sri_core::models::response::{Response, ResponseStore};
use sri_core::models::session::AssessmentMode;
use sri_core::storage_keys;
use sri_storage::FlushOutcome;
use sri_storage::error::StorageError;
use sri_storage::memory::MemoryStore;
use sri_storage::progress::ProgressTracker;
use sri_storage::store::KeyValueStore;

/// Store whose writes and removals can be switched off.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: bool,
    fail_removes: bool,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.fail_removes {
            return Err(StorageError::Unavailable("read-only".to_string()));
        }
        self.inner.remove(key)
    }
}

fn t0() -> Timestamp {
    Timestamp::from_second(1_750_000_000).unwrap()
}

fn after(ms: i64) -> Timestamp {
    t0() + SignedDuration::from_millis(ms)
}

fn snapshot(mode: AssessmentMode, answers: &[(&str, i32)]) -> ProgressSnapshot {
    let mut responses = ResponseStore::new();
    for (id, value) in answers {
        responses.upsert(Response::at(*id, *value, t0()));
    }
    ProgressSnapshot {
        mode,
        demographics: Demographics::default(),
        responses,
        current_page: 0,
        timestamp: t0(),
    }
}

#[test]
fn poll_waits_for_debounce_window() {
    let mut tracker = ProgressTracker::new(MemoryStore::new(), 1000);
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_01", 3)]), t0());

    assert!(matches!(tracker.poll(after(999)), FlushOutcome::Idle));
    assert!(tracker.store().is_empty());

    assert!(tracker.poll(after(1000)).is_persisted());
    assert!(!tracker.has_pending());
    assert!(
        tracker
            .store()
            .get(storage_keys::ASSESSMENT_PROGRESS)
            .unwrap()
            .is_some()
    );
}

#[test]
fn rapid_saves_collapse_into_last_one() {
    let mut tracker = ProgressTracker::new(MemoryStore::new(), 1000);
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_01", 1)]), t0());
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_01", 2)]), after(500));
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_01", 5)]), after(900));

    // The window restarts at each save.
    assert!(matches!(tracker.poll(after(1500)), FlushOutcome::Idle));
    assert!(tracker.poll(after(1900)).is_persisted());

    let store = tracker.into_store();
    let tracker = ProgressTracker::new(store, 1000);
    let restored = tracker.restore(AssessmentMode::Quick).unwrap();
    assert_eq!(restored.responses.get("sos_01").unwrap().value, 5);
}

#[test]
fn flush_writes_immediately() {
    let mut tracker = ProgressTracker::new(MemoryStore::new(), 1000);
    assert!(matches!(tracker.flush(), FlushOutcome::Idle));

    tracker.save_at(snapshot(AssessmentMode::Full, &[("kiss9_01", 2)]), t0());
    assert!(tracker.flush().is_persisted());
    assert_eq!(tracker.store().len(), 1);
}

#[test]
fn cancel_drops_pending_write() {
    let mut tracker = ProgressTracker::new(MemoryStore::new(), 1000);
    tracker.save_at(snapshot(AssessmentMode::Quick, &[]), t0());
    assert!(tracker.cancel());
    assert!(!tracker.cancel());
    assert!(matches!(tracker.poll(after(5000)), FlushOutcome::Idle));
    assert!(tracker.store().is_empty());
}

#[test]
fn restore_sees_pending_snapshot() {
    let mut tracker = ProgressTracker::new(MemoryStore::new(), 1000);
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_02", 4)]), t0());
    let restored = tracker.restore(AssessmentMode::Quick).unwrap();
    assert_eq!(restored.responses.len(), 1);
}

#[test]
fn restore_ignores_other_mode() {
    let mut tracker = ProgressTracker::new(MemoryStore::new(), 1000);
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_02", 4)]), t0());
    tracker.flush();
    assert!(tracker.restore(AssessmentMode::Full).is_none());
    assert!(tracker.restore(AssessmentMode::Quick).is_some());
}

#[test]
fn corrupt_progress_is_absent() {
    let mut store = MemoryStore::new();
    store
        .set(storage_keys::ASSESSMENT_PROGRESS, "{not json")
        .unwrap();
    let tracker = ProgressTracker::new(store, 1000);
    assert!(tracker.restore(AssessmentMode::Quick).is_none());
}

#[test]
fn stored_layout_uses_type_and_current_page() {
    let mut tracker = ProgressTracker::new(MemoryStore::new(), 0);
    let mut snap = snapshot(AssessmentMode::Full, &[("sos_01", 6)]);
    snap.current_page = 2;
    tracker.save_at(snap, t0());
    tracker.poll(t0());

    let raw = tracker
        .store()
        .get(storage_keys::ASSESSMENT_PROGRESS)
        .unwrap()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["type"], "full");
    assert_eq!(json["currentPage"], 2);
    assert_eq!(json["responses"][0]["questionId"], "sos_01");
    assert!(json.get("demographics").is_some());
    assert!(json.get("timestamp").is_some());
}

#[test]
fn failed_write_falls_back_to_memory() {
    let store = FlakyStore {
        fail_writes: true,
        ..FlakyStore::default()
    };
    let mut tracker = ProgressTracker::new(store, 1000);
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_01", 3)]), t0());

    assert!(matches!(
        tracker.flush(),
        FlushOutcome::MemoryOnly(StorageError::Unavailable(_))
    ));
    let restored = tracker.restore(AssessmentMode::Quick).unwrap();
    assert_eq!(restored.responses.get("sos_01").unwrap().value, 3);
}

#[test]
fn clear_removes_everything() {
    let mut tracker = ProgressTracker::new(MemoryStore::new(), 1000);
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_01", 3)]), t0());
    tracker.flush();
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_01", 4)]), after(10));

    tracker.clear().unwrap();
    assert!(!tracker.has_pending());
    assert!(tracker.restore(AssessmentMode::Quick).is_none());
    assert!(tracker.store().is_empty());
}

#[test]
fn failed_clear_still_hides_stale_progress() {
    let store = FlakyStore {
        fail_removes: true,
        ..FlakyStore::default()
    };
    let mut tracker = ProgressTracker::new(store, 1000);
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_01", 3)]), t0());
    assert!(tracker.flush().is_persisted());

    assert!(matches!(tracker.clear(), Err(StorageError::Unavailable(_))));
    assert!(
        tracker
            .store()
            .get(storage_keys::ASSESSMENT_PROGRESS)
            .unwrap()
            .is_some()
    );
    assert!(tracker.restore(AssessmentMode::Quick).is_none());

    // A later successful write makes the store authoritative again.
    tracker.save_at(snapshot(AssessmentMode::Quick, &[("sos_01", 5)]), after(10));
    assert!(tracker.flush().is_persisted());
    assert!(!tracker.has_pending());
    let restored = tracker.restore(AssessmentMode::Quick).unwrap();
    assert_eq!(restored.responses.get("sos_01").unwrap().value, 5);
}
