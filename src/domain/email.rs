//! Email value object.

use super::errors::{non_blank, AttributeKind, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)+$")
        .expect("email pattern is a valid regex")
});

/// A contact's email address.
///
/// # Validation Rules
///
/// - Exactly one `@`, with a non-empty local part before it
/// - A domain of at least two non-empty `.`-separated labels
/// - No punctuation outside `_ . + -` in the local part and `-` in the domain
///
/// # Example
///
/// ```
/// use contact_registry::domain::Email;
///
/// let email = Email::new("johnd@gmail.com", false).unwrap();
/// assert_eq!(email.domain(), "gmail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
    is_private: bool,
}

impl Email {
    pub const EXAMPLE: &'static str = "johnd@gmail.com";

    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Blank` for empty input and
    /// `ValidationError::Malformed` if the address does not match the rules above.
    pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        let value = non_blank(raw, AttributeKind::Email)?;
        if !EMAIL_PATTERN.is_match(&value) {
            return Err(ValidationError::Malformed {
                kind: AttributeKind::Email,
                value,
            });
        }
        Ok(Self { value, is_private })
    }

    /// Returns true if `raw` would be accepted by [`Email::new`].
    pub fn is_valid(raw: &str) -> bool {
        EMAIL_PATTERN.is_match(raw.trim())
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

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.value.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.value.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
