//! Ordered, duplicate-free collection of contact records.

use super::contact::{ContactRecord, RecordKey};
use crate::error::{DuplicateRecordError, RegistryError, RegistryResult};
use std::collections::HashSet;
use std::slice;

/// Contact records in insertion order, with no two records describing the
/// same contact (see [`ContactRecord::is_same_contact`]).
///
/// Alongside the ordered records the collection keeps a hash index of record
/// identities, so duplicate checks do not scan the whole list.
#[derive(Debug, Clone, Default)]
pub struct ContactCollection {
    records: Vec<ContactRecord>,
    index: HashSet<RecordKey>,
}

impl ContactCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRecordError` if an equivalent record is
    /// already present. The collection is left unchanged in that case.
    pub fn insert(&mut self, record: ContactRecord) -> Result<(), DuplicateRecordError> {
        let key = record.identity_key();
        if self.index.contains(&key) {
            tracing::debug!(name = %record.name(), "Rejected duplicate contact");
            return Err(DuplicateRecordError(record.name().to_string()));
        }
        self.index.insert(key);
        self.records.push(record);
        Ok(())
    }

    /// True if a record equivalent to `record` is present.
    pub fn contains(&self, record: &ContactRecord) -> bool {
        self.index.contains(&record.identity_key())
    }

    /// Remove the record equivalent to `record`, returning the stored one.
    pub fn remove(&mut self, record: &ContactRecord) -> RegistryResult<ContactRecord> {
        let position = self
            .records
            .iter()
            .position(|existing| existing.is_same_contact(record))
            .ok_or_else(|| RegistryError::RecordNotFound(record.name().to_string()))?;

        self.index.remove(&record.identity_key());
        Ok(self.records.remove(position))
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }

    /// Read-only, order-preserving view of the records.
    pub fn as_slice(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, ContactRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Order-sensitive; the index is derived from the records and not compared.
impl PartialEq for ContactCollection {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for ContactCollection {}

impl<'a> IntoIterator for &'a ContactCollection {
    type Item = &'a ContactRecord;
    type IntoIter = slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
