//! Tag labels and the per-contact tag set.

use super::errors::{non_blank, AttributeKind, ValidationError};
use crate::error::{RegistryError, RegistryResult};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// A short alphanumeric label attached to a contact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub const EXAMPLE: &'static str = "friends";

    /// Create a new Tag. The trimmed label must be non-empty ASCII alphanumeric.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let name = non_blank(raw, AttributeKind::Tag)?;
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::Malformed {
                kind: AttributeKind::Tag,
                value: name,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// A duplicate-free collection of tags.
///
/// Iteration order is stable (sorted by label), and two sets are equal when
/// they hold the same labels regardless of the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagSet {
    tags: BTreeSet<Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw labels, validating each one.
    ///
    /// Repeated labels collapse into one tag. Fails on the first invalid label.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| Tag::new(label.as_ref()))
            .collect()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Add a tag that is not yet present.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateTag` if the label is already in the set.
    pub fn add(&mut self, tag: Tag) -> RegistryResult<()> {
        if self.tags.contains(&tag) {
            return Err(RegistryError::DuplicateTag(tag.0));
        }
        self.tags.insert(tag);
        Ok(())
    }

    /// Add every tag from `other` that is not already present.
    pub fn merge_from(&mut self, other: &TagSet) {
        self.tags.extend(other.iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<T: IntoIterator<Item = Tag>>(iter: T) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = btree_set::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
