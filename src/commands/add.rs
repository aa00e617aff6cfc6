//! Add a contact to a registry.

use crate::domain::{Address, Email, Name, Phone, TagSet, ValidationError};
use crate::error::DuplicateRecordError;
use crate::models::{ContactRecord, Registry};

/// Raw input for an [`AddContact`] built from user text.
#[derive(Debug, Clone, Default)]
pub struct AddContactParams {
    pub name: String,
    pub phone: String,
    pub is_phone_private: bool,
    pub email: String,
    pub is_email_private: bool,
    pub address: String,
    pub is_address_private: bool,
    pub tags: Vec<String>,
}

/// Result of executing an [`AddContact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The record was inserted.
    Added(ContactRecord),

    /// An equivalent record was already present; the registry is unchanged.
    Duplicate,
}

impl AddOutcome {
    pub const MESSAGE_DUPLICATE: &'static str = "This contact already exists in the registry";

    /// The record that was inserted, if any.
    pub fn record(&self) -> Option<&ContactRecord> {
        match self {
            Self::Added(record) => Some(record),
            Self::Duplicate => None,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    /// Message to show the user.
    pub fn feedback(&self) -> String {
        match self {
            Self::Added(record) => format!("New contact added: {}", record),
            Self::Duplicate => Self::MESSAGE_DUPLICATE.to_string(),
        }
    }
}

/// Adds one contact record to a target registry.
#[derive(Debug, Clone)]
pub struct AddContact {
    record: ContactRecord,
}

impl AddContact {
    /// Wrap an already-validated record.
    pub fn new(record: ContactRecord) -> Self {
        Self { record }
    }

    /// Validate raw input into a record.
    ///
    /// Every attribute is checked in order (name, phone, email, address,
    /// tags) and the first failure is returned.
    pub fn from_params(params: AddContactParams) -> Result<Self, ValidationError> {
        let record = ContactRecord::new(
            Name::new(&params.name)?,
            Phone::new(&params.phone, params.is_phone_private)?,
            Email::new(&params.email, params.is_email_private)?,
            Address::new(&params.address, params.is_address_private)?,
            TagSet::from_labels(&params.tags)?,
        );
        Ok(Self::new(record))
    }

    /// The record this command will insert.
    pub fn record(&self) -> &ContactRecord {
        &self.record
    }

    /// Insert the record into `registry`.
    ///
    /// Never fails: a duplicate is reported as [`AddOutcome::Duplicate`].
    pub fn execute(&self, registry: &mut Registry) -> AddOutcome {
        match registry.add_record(self.record.clone()) {
            Ok(()) => {
                tracing::info!(name = %self.record.name(), "Contact added");
                AddOutcome::Added(self.record.clone())
            }
            Err(DuplicateRecordError(name)) => {
                tracing::debug!(name = %name, "Contact not added: duplicate");
                AddOutcome::Duplicate
            }
        }
    }
}
