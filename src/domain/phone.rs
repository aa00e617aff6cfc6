//! Phone value object.

use super::errors::{non_blank, AttributeKind, ValidationError};
use std::fmt;

/// A contact's phone number.
///
/// Only digits are accepted: no spaces, hyphens, letters or a leading `+`.
///
/// # Example
///
/// ```
/// use contact_registry::domain::Phone;
///
/// let phone = Phone::new("98765432", true).unwrap();
/// assert_eq!(phone.as_str(), "98765432");
/// assert!(phone.is_private());
/// assert!(Phone::new("+6598765432", false).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    value: String,
    is_private: bool,
}

impl Phone {
    pub const EXAMPLE: &'static str = "98765432";

    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Blank` for empty input and
    /// `ValidationError::Malformed` if any character is not an ASCII digit.
    pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        let value = non_blank(raw, AttributeKind::Phone)?;
        if !Self::all_digits(&value) {
            return Err(ValidationError::Malformed {
                kind: AttributeKind::Phone,
                value,
            });
        }
        Ok(Self { value, is_private })
    }

    /// Returns true if `raw` would be accepted by [`Phone::new`].
    pub fn is_valid(raw: &str) -> bool {
        Self::all_digits(raw.trim())
    }

    fn all_digits(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
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

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
