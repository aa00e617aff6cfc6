//! On-disk document layout for a saved registry.
//!
//! ```text
//! {
//!   "contacts": [
//!     {
//!       "name":    { "value": "John Doe", "isPrivate": false },
//!       "phone":   { "value": "98765432", "isPrivate": false },
//!       "email":   { "value": "johnd@gmail.com", "isPrivate": false },
//!       "address": { "value": "John street, block 123, #01-01", "isPrivate": false },
//!       "tags": ["friends"]
//!     }
//!   ]
//! }
//! ```
//!
//! Every field is required and unknown keys are rejected, so a document with
//! the wrong shape fails to parse instead of loading partially.

use crate::domain::{Address, Email, Name, Phone, TagSet, ValidationError};
use crate::error::DuplicateRecordError;
use crate::models::{ContactRecord, Registry};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a well-formed document cannot become a [`Registry`].
#[derive(Error, Debug)]
pub(crate) enum DocumentError {
    #[error("contact {position} has an invalid field: {source}")]
    InvalidField {
        position: usize,
        #[source]
        source: ValidationError,
    },

    #[error("contact {position} is a duplicate: {source}")]
    Duplicate {
        position: usize,
        #[source]
        source: DuplicateRecordError,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StoredRegistry {
    contacts: Vec<StoredContact>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredContact {
    name: StoredField,
    phone: StoredField,
    email: StoredField,
    address: StoredField,
    tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct StoredField {
    value: String,
    is_private: bool,
}

impl StoredField {
    fn new(value: &str, is_private: bool) -> Self {
        Self {
            value: value.to_string(),
            is_private,
        }
    }
}

impl From<&ContactRecord> for StoredContact {
    fn from(record: &ContactRecord) -> Self {
        Self {
            name: StoredField::new(record.name().as_str(), record.name().is_private()),
            phone: StoredField::new(record.phone().as_str(), record.phone().is_private()),
            email: StoredField::new(record.email().as_str(), record.email().is_private()),
            address: StoredField::new(record.address().as_str(), record.address().is_private()),
            tags: record
                .tags()
                .iter()
                .map(|tag| tag.as_str().to_string())
                .collect(),
        }
    }
}

impl TryFrom<StoredContact> for ContactRecord {
    type Error = ValidationError;

    fn try_from(stored: StoredContact) -> Result<Self, Self::Error> {
        Ok(ContactRecord::new(
            Name::with_privacy(&stored.name.value, stored.name.is_private)?,
            Phone::new(&stored.phone.value, stored.phone.is_private)?,
            Email::new(&stored.email.value, stored.email.is_private)?,
            Address::new(&stored.address.value, stored.address.is_private)?,
            TagSet::from_labels(&stored.tags)?,
        ))
    }
}

impl From<&Registry> for StoredRegistry {
    fn from(registry: &Registry) -> Self {
        Self {
            contacts: registry.all_records().iter().map(StoredContact::from).collect(),
        }
    }
}

impl StoredRegistry {
    /// Validate every stored contact and rebuild the registry.
    ///
    /// Nothing is returned unless every contact converts and no two are
    /// equivalent.
    pub(crate) fn into_registry(self) -> Result<Registry, DocumentError> {
        let mut registry = Registry::new();
        for (offset, stored) in self.contacts.into_iter().enumerate() {
            let position = offset + 1;
            let record = ContactRecord::try_from(stored)
                .map_err(|source| DocumentError::InvalidField { position, source })?;
            registry
                .add_record(record)
                .map_err(|source| DocumentError::Duplicate { position, source })?;
        }
        Ok(registry)
    }
}
