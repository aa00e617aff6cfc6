//! Domain value objects and types.
//!
//! Every contact attribute is wrapped in a type that validates its raw text
//! once, at construction, so an invalid value can never be represented.
//! Validators trim their input; the stored value is the trimmed text.

pub mod address;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::Address;
pub use email::Email;
pub use errors::{AttributeKind, ValidationError};
pub use name::Name;
pub use phone::Phone;
pub use tag::{Tag, TagSet};
