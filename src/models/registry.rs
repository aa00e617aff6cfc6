//! The registry: the single owner of the live contact collection.

use super::collection::ContactCollection;
use super::contact::ContactRecord;
use crate::error::{DuplicateRecordError, RegistryResult};

/// Aggregate root holding exactly one [`ContactCollection`].
///
/// All mutation goes through the methods below; callers only ever see the
/// collection through a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    contacts: ContactCollection,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from records, applying the duplicate rule to each.
    ///
    /// Fails on the first record equivalent to an earlier one.
    pub fn from_records<I>(records: I) -> Result<Self, DuplicateRecordError>
    where
        I: IntoIterator<Item = ContactRecord>,
    {
        let mut registry = Self::new();
        for record in records {
            registry.add_record(record)?;
        }
        Ok(registry)
    }

    /// Insert a record, failing with `DuplicateRecordError` if an
    /// equivalent one is already present.
    pub fn add_record(&mut self, record: ContactRecord) -> Result<(), DuplicateRecordError> {
        self.contacts.insert(record)
    }

    pub fn contains_record(&self, record: &ContactRecord) -> bool {
        self.contacts.contains(record)
    }

    pub fn remove_record(&mut self, record: &ContactRecord) -> RegistryResult<ContactRecord> {
        self.contacts.remove(record)
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Read-only view of every record, in insertion order.
    pub fn all_records(&self) -> &ContactCollection {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
