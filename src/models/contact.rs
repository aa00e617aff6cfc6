//! Contact record: the validated aggregate stored in the registry.

use crate::domain::{Address, Email, Name, Phone, TagSet};
use std::fmt;

/// Identity of a contact for duplicate detection: the four attribute values,
/// without privacy flags or tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RecordKey {
    name: String,
    phone: String,
    email: String,
    address: String,
}

/// A contact in the registry.
///
/// A record can only be built from already-validated attributes, so every
/// `ContactRecord` in existence is fully valid. Records are immutable once
/// built.
///
/// Equality (`==`) compares every attribute including privacy flags and
/// tags. Duplicate detection uses the narrower [`ContactRecord::is_same_contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: TagSet,
}

impl ContactRecord {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: TagSet) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// True when both records have the same name, phone, email and address
    /// values. Privacy flags and tags are ignored.
    pub fn is_same_contact(&self, other: &ContactRecord) -> bool {
        self.identity_key() == other.identity_key()
    }

    pub(crate) fn identity_key(&self) -> RecordKey {
        RecordKey {
            name: self.name.as_str().to_string(),
            phone: self.phone.as_str().to_string(),
            email: self.email.as_str().to_string(),
            address: self.address.as_str().to_string(),
        }
    }

    /// Every attribute, with private ones marked `(private)`.
    pub fn as_text_show_all(&self) -> String {
        fn private_marker(is_private: bool) -> &'static str {
            if is_private {
                "(private) "
            } else {
                ""
            }
        }

        format!(
            "{}{} Phone: {}{} Email: {}{} Address: {}{} Tags: {}",
            private_marker(self.name.is_private()),
            self.name,
            private_marker(self.phone.is_private()),
            self.phone,
            private_marker(self.email.is_private()),
            self.email,
            private_marker(self.address.is_private()),
            self.address,
            self.tags
        )
    }

    /// Only the public attributes. Tags are always shown.
    pub fn as_text_hide_private(&self) -> String {
        let mut parts = Vec::with_capacity(5);
        if !self.name.is_private() {
            parts.push(self.name.as_str().to_string());
        }
        if !self.phone.is_private() {
            parts.push(format!("Phone: {}", self.phone));
        }
        if !self.email.is_private() {
            parts.push(format!("Email: {}", self.email));
        }
        if !self.address.is_private() {
            parts.push(format!("Address: {}", self.address));
        }
        parts.push(format!("Tags: {}", self.tags));
        parts.join(" ")
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text_show_all())
    }
}
