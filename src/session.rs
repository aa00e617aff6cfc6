//! A registry together with the store it is persisted to.

use crate::commands::{AddContact, AddOutcome};
use crate::error::StorageResult;
use crate::models::Registry;
use crate::storage::RegistryStore;

/// Owns the live [`Registry`] and persists it after each successful change.
///
/// This is the only owner of registry state in a running application; callers
/// get shared access through [`Session::registry`].
pub struct Session<S: RegistryStore> {
    store: S,
    registry: Registry,
}

impl<S: RegistryStore> Session<S> {
    /// Load the registry from `store`.
    pub fn open(store: S) -> StorageResult<Self> {
        let registry = store.load()?;
        Ok(Self { store, registry })
    }

    /// Start from an empty registry without reading `store`.
    pub fn empty(store: S) -> Self {
        Self {
            store,
            registry: Registry::new(),
        }
    }

    /// Run `command` against the registry and save if a record was added.
    ///
    /// A duplicate leaves both the registry and the store untouched. If the
    /// save fails the record is taken back out, so memory matches the store.
    pub fn add(&mut self, command: &AddContact) -> StorageResult<AddOutcome> {
        let outcome = command.execute(&mut self.registry);
        if let Some(record) = outcome.record() {
            if let Err(e) = self.store.save(&self.registry) {
                // the record was inserted just above, so removal cannot miss
                let _ = self.registry.remove_record(record);
                tracing::warn!(error = %e, "Save failed, contact not kept");
                return Err(e);
            }
        }
        Ok(outcome)
    }

    /// Re-read the registry from the store, replacing the in-memory one.
    ///
    /// On failure the current registry is kept.
    pub fn reload(&mut self) -> StorageResult<()> {
        self.registry = self.store.load()?;
        Ok(())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
