//! Tests specific to the SQLite backend.

use super::SqliteStore;
use crate::store::{NoteStore, SaveOutcome, StoreError, get_schema_version, SCHEMA_VERSION};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// ===========================================
// Opening
// ===========================================

#[test]
fn open_in_memory_starts_empty() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.list_all().unwrap().is_empty());
    assert_eq!(get_schema_version(store.conn()).unwrap(), SCHEMA_VERSION);
}

#[test]
fn open_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("store").join("notes.db");

    let _store = SqliteStore::open(&db_path).unwrap();

    assert!(db_path.exists());
}

#[test]
fn notes_survive_close_and_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("notes.db");

    let mut store = SqliteStore::open(&db_path).unwrap();
    store.save("Groceries", "milk, eggs").unwrap();
    store.save("Ideas", "").unwrap();
    Box::new(store).close().unwrap();

    let reopened = SqliteStore::open(&db_path).unwrap();
    assert_eq!(reopened.list_titles().unwrap(), vec!["Groceries", "Ideas"]);
    assert_eq!(reopened.get("Groceries").unwrap().content(), "milk, eggs");
}

// ===========================================
// Ordering
// ===========================================

#[test]
fn overwrite_keeps_position() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.save("First", "1").unwrap();
    store.save("Second", "2").unwrap();

    assert_eq!(store.save("first", "1b").unwrap(), SaveOutcome::Updated);

    assert_eq!(store.list_titles().unwrap(), vec!["first", "Second"]);
}

#[test]
fn resaved_note_goes_last_after_delete() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.save("A", "").unwrap();
    store.save("B", "").unwrap();

    store.delete("A").unwrap();
    store.save("A", "again").unwrap();

    assert_eq!(store.list_titles().unwrap(), vec!["B", "A"]);
}

// ===========================================
// Corrupt Data
// ===========================================

#[test]
fn invalid_timestamp_is_corrupt() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .conn()
        .execute(
            "INSERT INTO notes (key, title, content, created, modified)
             VALUES ('broken', 'Broken', '', 'yesterday', 'yesterday')",
            [],
        )
        .unwrap();

    let err = store.get("Broken").unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)));
}

#[test]
fn timestamps_round_trip() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.save("Stamp", "x").unwrap();
    let first = store.get("Stamp").unwrap();

    store.save("Stamp", "y").unwrap();
    let second = store.get("Stamp").unwrap();

    assert_eq!(second.created(), first.created());
    assert!(second.modified() >= first.modified());
}
