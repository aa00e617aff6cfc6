//! Domain validation errors.

use std::fmt;

/// The attribute a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Name,
    Phone,
    Email,
    Address,
    Tag,
    FileName,
}

impl AttributeKind {
    /// Human-readable description of the format rule for this attribute.
    pub fn constraints(&self) -> &'static str {
        match self {
            Self::Name => {
                "Contact names should contain letters, digits, spaces and the punctuation . , - only"
            }
            Self::Phone => "Contact phone numbers should only contain digits",
            Self::Email => {
                "Contact emails should be like local@domain.tld, with a non-empty local part and a dotted domain"
            }
            Self::Address => "Contact addresses can be in any format but cannot be blank",
            Self::Tag => "Tag names should be alphanumeric",
            Self::FileName => "Storage file names must end with an accepted suffix",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Tag => "tag",
            Self::FileName => "file name",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is empty or whitespace-only.
    Blank(AttributeKind),

    /// The value breaks the attribute's format rule.
    Malformed { kind: AttributeKind, value: String },

    /// The storage path does not end with an accepted suffix.
    UnsupportedFileSuffix { path: String, accepted: Vec<String> },
}

impl ValidationError {
    /// The attribute this error was raised for.
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Blank(kind) | Self::Malformed { kind, .. } => *kind,
            Self::UnsupportedFileSuffix { .. } => AttributeKind::FileName,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank(kind) => write!(f, "{} cannot be blank", kind),
            Self::Malformed { kind, value } => {
                write!(f, "Invalid {} '{}': {}", kind, value, kind.constraints())
            }
            Self::UnsupportedFileSuffix { path, accepted } => write!(
                f,
                "Storage file '{}' must end with one of: .{}",
                path,
                accepted.join(", .")
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trims `raw` and rejects the result if nothing is left.
pub(crate) fn non_blank(raw: &str, kind: AttributeKind) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank(kind));
    }
    Ok(trimmed.to_string())
}
