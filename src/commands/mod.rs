//! Commands that mutate the registry.

pub mod add;

pub use add::{AddContact, AddContactParams, AddOutcome};
