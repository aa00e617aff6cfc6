//! Address value object.

use super::errors::{non_blank, AttributeKind, ValidationError};
use std::fmt;

/// A contact's postal address. Free-form, but never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
    is_private: bool,
}

impl Address {
    pub const EXAMPLE: &'static str = "John street, block 123, #01-01";

    pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        let value = non_blank(raw, AttributeKind::Address)?;
        Ok(Self { value, is_private })
    }

    pub fn is_valid(raw: &str) -> bool {
        !raw.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
