pub mod mock_registry_store;

pub use mock_registry_store::MockRegistryStore;
