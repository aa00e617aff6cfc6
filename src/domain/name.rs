//! Name value object.

use super::errors::{non_blank, AttributeKind, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 .,\-]*$").expect("name pattern is a valid regex")
});

/// A contact's full name.
///
/// Names are validated at construction time: after trimming they must be
/// non-empty and consist of ASCII letters, digits, spaces and the
/// punctuation `.`, `,` and `-`. Quotes, brackets and semicolons are rejected.
///
/// # Example
///
/// ```
/// use contact_registry::domain::Name;
///
/// let name = Name::new("  John Doe ").unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// assert!(!name.is_private());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    full_name: String,
    is_private: bool,
}

impl Name {
    pub const EXAMPLE: &'static str = "John Doe";

    /// Create a public Name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Blank` for empty input and
    /// `ValidationError::Malformed` when a forbidden character is present.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::with_privacy(raw, false)
    }

    /// Create a Name with an explicit privacy flag.
    pub fn with_privacy(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        let full_name = non_blank(raw, AttributeKind::Name)?;
        if !NAME_PATTERN.is_match(&full_name) {
            return Err(ValidationError::Malformed {
                kind: AttributeKind::Name,
                value: full_name,
            });
        }
        Ok(Self {
            full_name,
            is_private,
        })
    }

    /// Returns true if `raw` would be accepted by [`Name::new`].
    pub fn is_valid(raw: &str) -> bool {
        NAME_PATTERN.is_match(raw.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.full_name
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn into_inner(self) -> String {
        self.full_name
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}
