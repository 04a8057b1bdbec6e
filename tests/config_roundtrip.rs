//! Persistence of the drone configuration across execution contexts
//!
//! A page reload creates a fresh store over the same durable backend; the
//! stored value must survive the transition.

use std::sync::Arc;

use drone_dashboard::api::DroneConfig;
use drone_dashboard::store::{ConfigStore, MemoryStorage, StorageBackend, CONFIG_STORAGE_KEY};

fn test_config() -> DroneConfig {
    DroneConfig {
        drone_id: "drone-7".to_string(),
        drone_name: "Kestrel".to_string(),
        light: "off".to_string(),
        country: "NO".to_string(),
    }
}

#[test]
fn config_survives_a_fresh_store_over_the_same_backend() {
    let backend: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());

    let first = ConfigStore::new(Arc::clone(&backend));
    first.set(test_config());

    let second = ConfigStore::new(backend);
    assert_eq!(second.get(), Some(test_config()));
}

#[test]
fn fresh_store_over_an_empty_backend_has_no_config() {
    let store = ConfigStore::new(Arc::new(MemoryStorage::new()));
    assert_eq!(store.get(), None);
}

#[test]
fn corrupt_backend_entry_is_cleared_on_first_read() {
    let backend: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
    backend.write(CONFIG_STORAGE_KEY, "{truncated");

    let store = ConfigStore::new(Arc::clone(&backend));
    assert_eq!(store.get(), None);
    assert_eq!(backend.read(CONFIG_STORAGE_KEY), None);

    // a subsequent set starts the lifecycle over
    store.set(test_config());
    assert_eq!(store.get(), Some(test_config()));
}
