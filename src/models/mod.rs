//! Data model: contact records, the duplicate-free collection and the
//! registry that owns it.

pub mod collection;
pub mod contact;
pub mod registry;

pub use collection::ContactCollection;
pub use contact::ContactRecord;
pub use registry::Registry;
