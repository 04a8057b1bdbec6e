//! Session cache for the active drone configuration
//!
//! `ConfigStore` is the single source of truth for the fetched `DroneConfig`.
//! It layers an in-memory cache over a pluggable `StorageBackend` so the value
//! survives page navigation and reloads. The backend is picked once at
//! startup; consumers receive the store through context instead of reaching
//! for ambient global state.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::api::DroneConfig;

/// Durable storage key for the serialized configuration
pub const CONFIG_STORAGE_KEY: &str = "drone_config";

/// Capability interface over durable key-value storage
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for non-browser execution contexts and tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Browser backend over `window.localStorage`
///
/// Holds no JS handles; the storage object is looked up on every call. When
/// localStorage is unavailable (blocked or absent), reads return nothing and
/// writes are dropped, leaving the in-memory cache as the only layer.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        match Self::local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!("Failed to persist '{}' to localStorage", key);
                }
            }
            None => tracing::debug!("localStorage unavailable, skipping write of '{}'", key),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            storage.remove_item(key).ok();
        }
    }
}

/// The storage backend the composition root wires in at startup
pub fn default_storage() -> Arc<dyn StorageBackend> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        Arc::new(BrowserStorage)
    }
    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        Arc::new(MemoryStorage::new())
    }
}

/// Session-scoped cache of the active drone configuration
#[derive(Clone)]
pub struct ConfigStore {
    cache: Arc<RwLock<Option<DroneConfig>>>,
    storage: Arc<dyn StorageBackend>,
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("cache", &self.cache)
            .finish()
    }
}

impl ConfigStore {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(None)),
            storage,
        }
    }

    /// Cache the configuration and persist it under `CONFIG_STORAGE_KEY`.
    /// The caller guarantees the shape; no validation happens here.
    pub fn set(&self, config: DroneConfig) {
        match serde_json::to_string(&config) {
            Ok(json) => self.storage.write(CONFIG_STORAGE_KEY, &json),
            Err(e) => tracing::warn!("Failed to serialize config for storage: {}", e),
        }
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Some(config);
    }

    /// Return the cached configuration, falling back to durable storage.
    ///
    /// A successful storage read populates the cache. Malformed stored
    /// content is treated as absent: the corrupt entry is removed and the
    /// call returns `None`.
    pub fn get(&self) -> Option<DroneConfig> {
        if let Some(config) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Some(config);
        }

        let raw = self.storage.read(CONFIG_STORAGE_KEY)?;
        match serde_json::from_str::<DroneConfig>(&raw) {
            Ok(config) => {
                *self.cache.write().unwrap_or_else(PoisonError::into_inner) =
                    Some(config.clone());
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Discarding malformed stored config: {}", e);
                self.storage.remove(CONFIG_STORAGE_KEY);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> DroneConfig {
        DroneConfig {
            drone_id: "drone-7".to_string(),
            drone_name: "Kestrel".to_string(),
            light: "on".to_string(),
            country: "NO".to_string(),
        }
    }

    #[test]
    fn set_then_get_returns_same_config() {
        let store = ConfigStore::new(Arc::new(MemoryStorage::new()));
        store.set(test_config());
        assert_eq!(store.get(), Some(test_config()));
    }

    #[test]
    fn get_without_set_returns_none() {
        let store = ConfigStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn get_reads_through_to_storage() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(
            CONFIG_STORAGE_KEY,
            &serde_json::to_string(&test_config()).unwrap(),
        );

        let store = ConfigStore::new(storage);
        assert_eq!(store.get(), Some(test_config()));
    }

    #[test]
    fn set_persists_to_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ConfigStore::new(Arc::clone(&storage) as Arc<dyn StorageBackend>);
        store.set(test_config());

        let raw = storage.read(CONFIG_STORAGE_KEY).unwrap();
        let stored: DroneConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, test_config());
    }

    #[test]
    fn malformed_storage_is_treated_as_absent() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(CONFIG_STORAGE_KEY, "not json");

        let store = ConfigStore::new(Arc::clone(&storage) as Arc<dyn StorageBackend>);
        assert_eq!(store.get(), None);
        // corrupt entry is cleared so later reads skip the parse
        assert_eq!(storage.read(CONFIG_STORAGE_KEY), None);
    }

    #[test]
    fn set_overwrites_previous_config() {
        let store = ConfigStore::new(Arc::new(MemoryStorage::new()));
        store.set(test_config());

        let mut updated = test_config();
        updated.light = "off".to_string();
        store.set(updated.clone());

        assert_eq!(store.get(), Some(updated));
    }

    #[test]
    fn memory_storage_remove_clears_entry() {
        let storage = MemoryStorage::new();
        storage.write("k", "v");
        assert_eq!(storage.read("k"), Some("v".to_string()));
        storage.remove("k");
        assert_eq!(storage.read("k"), None);
    }
}
