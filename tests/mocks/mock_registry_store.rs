use contact_registry::error::{StorageError, StorageResult};
use contact_registry::{Registry, RegistryStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock registry store for testing.
///
/// Keeps the "saved" registry in memory, can be told to fail, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRegistryStore {
    saved: Arc<Mutex<Option<Registry>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRegistryStore {
    /// Create a store with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `registry`.
    pub fn with_registry(registry: Registry) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(registry);
        store
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Let saves succeed again.
    pub fn allow_saves(&self) {
        *self.fail_saves.lock().unwrap() = false;
    }

    /// The last registry saved (or seeded).
    pub fn saved(&self) -> Option<Registry> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl RegistryStore for MockRegistryStore {
    fn load(&self) -> StorageResult<Registry> {
        self.track_call("load");
        self.saved
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StorageError::Operation {
                path: "mock".into(),
                reason: "file not found".to_string(),
            })
    }

    fn save(&self, registry: &Registry) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }
        *self.saved.lock().unwrap() = Some(registry.clone());
        Ok(())
    }
}
