//! Persistence for the registry.
//!
//! [`RegistryStore`] is the seam the rest of the crate depends on;
//! [`StorageFile`] is the flat-file implementation.

mod format;
mod storage_file;
mod traits;

pub use storage_file::{StorageFile, DEFAULT_SUFFIXES};
pub use traits::RegistryStore;
