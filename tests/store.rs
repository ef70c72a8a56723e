use hacker_stories::store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
use tempfile::TempDir;

#[test]
fn test_memory_store_returns_last_write() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("search"), None);

    store.set("search", "react").unwrap();
    store.set("search", "rust").unwrap();

    assert_eq!(store.get("search"), Some("rust".to_string()));
}

#[test]
fn test_json_store_starts_empty_without_file() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("state.json")).unwrap();

    assert_eq!(store.get("search"), None);
}

#[test]
fn test_json_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("state.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set("search", "react").unwrap();
    store.set("other", "value").unwrap();
    store.set("search", "rust").unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("search"), Some("rust".to_string()));
    assert_eq!(reopened.get("other"), Some("value".to_string()));
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_json_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = JsonFileStore::open(&path);

    assert!(matches!(result, Err(StoreError::Parse(_))));
}

#[test]
fn test_json_store_treats_empty_file_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "").unwrap();

    let store = JsonFileStore::open(&path).unwrap();

    assert_eq!(store.get("search"), None);
}
