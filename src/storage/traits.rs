use crate::error::StorageResult;
use crate::models::Registry;

/// Durable home for a [`Registry`].
///
/// Implementations hold no registry data between calls: every `load`
/// re-reads the backing store and every `save` replaces it in full.
pub trait RegistryStore {
    /// Read the stored registry.
    ///
    /// A failed load never yields a partially populated registry.
    fn load(&self) -> StorageResult<Registry>;

    /// Replace the stored registry with `registry`.
    fn save(&self, registry: &Registry) -> StorageResult<()>;
}
