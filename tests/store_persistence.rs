//! File-backed Record Store Tests
//!
//! Covers:
//! - Reload reproduces an equal collection (ids, fields, timestamps)
//! - Every mutation is on disk when the call returns
//! - Absent, empty and corrupt slot files start an empty store
//! - Snapshots written with the legacy field names still load

use std::fs;

use chrono::{Duration, TimeZone, Utc};
use stockroom::model::{RecordFields, RecordId, RecordPatch, Thresholds};
use stockroom::slot::FileSlotStore;
use stockroom::store::{decode_snapshot, ManualClock, RecordStore, SyncState};
use tempfile::TempDir;

const KEY: &str = "inventory_items";

// =============================================================================
// Test Utilities
// =============================================================================

fn create_temp_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2026, 6, 15, 8, 0, 0).unwrap())
}

fn open_store(temp_dir: &TempDir, clock: &ManualClock) -> RecordStore<FileSlotStore> {
    let slot = FileSlotStore::open(temp_dir.path()).unwrap();
    let mut store = RecordStore::new(slot, KEY, Thresholds::default())
        .unwrap()
        .with_clock(clock.clone());
    store.initialize();
    store
}

fn slot_file(temp_dir: &TempDir) -> std::path::PathBuf {
    temp_dir.path().join(format!("{}.json", KEY))
}

// =============================================================================
// Round trip
// =============================================================================

#[test]
fn test_reload_reproduces_equal_collection() {
    let temp_dir = create_temp_data_dir();
    let clock = clock();

    let before = {
        let mut store = open_store(&temp_dir, &clock);
        store.add(RecordFields::new("Sterile gauze", "clinical_supplies", 2.5, 40));
        clock.advance(Duration::seconds(30));
        let tape = store.add(RecordFields::new("Tape", "clinical_supplies", 1.25, 0)).unwrap();
        clock.advance(Duration::seconds(30));
        store.add(RecordFields::new("Sensory ball", "therapeutic_tools", 8.0, 12));
        clock.advance(Duration::minutes(5));
        store.update(tape.id(), RecordPatch::new().with_quantity(9));
        store.list_all()
    };

    let reloaded = open_store(&temp_dir, &clock);
    assert_eq!(reloaded.list_all(), before);
    assert_eq!(reloaded.sync_state(), SyncState::InSync);

    let tape = reloaded.get_by_id(RecordId::new(2)).unwrap();
    assert_eq!(tape.quantity_on_hand(), 9);
    assert!(tape.updated_at() > tape.created_at());
}

#[test]
fn test_mutations_are_on_disk_before_return() {
    let temp_dir = create_temp_data_dir();
    let clock = clock();
    let mut store = open_store(&temp_dir, &clock);

    let gauze = store.add(RecordFields::new("Gauze", "clinical_supplies", 2.5, 40)).unwrap();
    let on_disk = decode_snapshot(&fs::read_to_string(slot_file(&temp_dir)).unwrap()).unwrap();
    assert_eq!(on_disk, vec![gauze.clone()]);

    assert!(store.remove(gauze.id()));
    let on_disk = decode_snapshot(&fs::read_to_string(slot_file(&temp_dir)).unwrap()).unwrap();
    assert!(on_disk.is_empty());
}

#[test]
fn test_ids_stay_unique_across_reloads() {
    let temp_dir = create_temp_data_dir();
    let clock = clock();

    {
        let mut store = open_store(&temp_dir, &clock);
        store.add(RecordFields::new("A", "other", 1.0, 1));
        store.add(RecordFields::new("B", "other", 1.0, 1));
        store.add(RecordFields::new("C", "other", 1.0, 1));
        store.remove(RecordId::new(3));
    }

    let mut store = open_store(&temp_dir, &clock);
    let d = store.add(RecordFields::new("D", "other", 1.0, 1)).unwrap();
    assert!(store.list_all().iter().filter(|r| r.id() == d.id()).count() == 1);
    assert!(d.id() > RecordId::new(2));
}

#[test]
fn test_exhausted_ids_never_duplicate_across_restart() {
    let temp_dir = create_temp_data_dir();
    let seeded = r#"[{"id":18446744073709551615,"name":"Gauze","category":"other",
        "unitPrice":2.5,"quantityOnHand":4,
        "createdAt":"2026-01-05T09:30:00Z","updatedAt":"2026-01-05T09:30:00Z"}]"#;
    fs::write(slot_file(&temp_dir), seeded).unwrap();

    {
        let mut store = open_store(&temp_dir, &clock());
        assert!(store.add(RecordFields::new("Tape", "other", 1.0, 1)).is_none());
        assert_eq!(store.len(), 1);
    }

    let reopened = open_store(&temp_dir, &clock());
    assert_eq!(reopened.sync_state(), SyncState::InSync);
    assert_eq!(reopened.len(), 1);
    assert!(reopened.get_by_id(RecordId::new(u64::MAX)).is_some());
}

// =============================================================================
// Degraded slots
// =============================================================================

#[test]
fn test_absent_slot_starts_empty() {
    let temp_dir = create_temp_data_dir();
    let store = open_store(&temp_dir, &clock());

    assert!(store.is_empty());
    assert_eq!(store.sync_state(), SyncState::InSync);
    assert!(!slot_file(&temp_dir).exists());
}

#[test]
fn test_empty_slot_file_starts_empty() {
    let temp_dir = create_temp_data_dir();
    fs::write(slot_file(&temp_dir), "").unwrap();

    let store = open_store(&temp_dir, &clock());
    assert!(store.is_empty());
    assert_eq!(store.sync_state(), SyncState::InSync);
}

#[test]
fn test_corrupt_slot_starts_empty_and_is_replaced_on_write() {
    let temp_dir = create_temp_data_dir();
    fs::write(slot_file(&temp_dir), "[{\"id\": 1, \"name\": \"Gau").unwrap();

    let mut store = open_store(&temp_dir, &clock());
    assert!(store.is_empty());
    assert_eq!(store.sync_state(), SyncState::Diverged);
    assert_eq!(store.metrics().snapshot().corrupt_loads, 1);

    store.add(RecordFields::new("Gauze", "clinical_supplies", 2.5, 40));
    assert_eq!(store.sync_state(), SyncState::InSync);

    let on_disk = decode_snapshot(&fs::read_to_string(slot_file(&temp_dir)).unwrap()).unwrap();
    assert_eq!(on_disk.len(), 1);
}

#[test]
fn test_legacy_field_names_load() {
    let temp_dir = create_temp_data_dir();
    let legacy = r#"[{
        "id": 4,
        "name": "Weighted blanket",
        "category": "therapeutic_tools",
        "price": 45.5,
        "quantity": 3,
        "createdAt": "2025-11-02T10:00:00Z",
        "updatedAt": "2025-11-03T09:30:00Z"
    }]"#;
    fs::write(slot_file(&temp_dir), legacy).unwrap();

    let mut store = open_store(&temp_dir, &clock());
    let blanket = store.get_by_id(RecordId::new(4)).unwrap();
    assert_eq!(blanket.unit_price(), 45.5);
    assert_eq!(blanket.quantity_on_hand(), 3);

    // Next write uses the current field names
    store.update(blanket.id(), RecordPatch::new().with_quantity(2));
    let raw = fs::read_to_string(slot_file(&temp_dir)).unwrap();
    assert!(raw.contains("\"unitPrice\""));
    assert!(raw.contains("\"quantityOnHand\":2"));
}

#[test]
fn test_clear_deletes_slot_file() {
    let temp_dir = create_temp_data_dir();
    let mut store = open_store(&temp_dir, &clock());
    store.add(RecordFields::new("Gauze", "clinical_supplies", 2.5, 40));
    assert!(slot_file(&temp_dir).exists());

    assert_eq!(store.clear(), 1);
    assert!(!slot_file(&temp_dir).exists());

    let reopened = open_store(&temp_dir, &clock());
    assert!(reopened.is_empty());
}
