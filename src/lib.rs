//! Contact Registry - a personal contact list kept in a flat file.
//!
//! Raw text is validated into typed attributes, assembled into immutable
//! contact records, collected into a registry that refuses duplicates, and
//! saved to (or loaded from) a single file.
//!
//! # Architecture
//!
//! - **domain**: Validated attribute types (name, phone, email, address, tags)
//! - **models**: Contact records, the duplicate-free collection, the registry
//! - **storage**: The `RegistryStore` seam and the flat-file `StorageFile`
//! - **commands**: The add-contact command and its outcome
//! - **session**: Explicit owner of one registry plus its store
//! - **config**: Configuration from environment variables
//! - **error**: Error types for registry, storage and configuration failures

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

pub use commands::{AddContact, AddContactParams, AddOutcome};
pub use config::Config;
pub use domain::{Address, Email, Name, Phone, Tag, TagSet, ValidationError};
pub use error::{ConfigError, DuplicateRecordError, RegistryError, StorageError};
pub use models::{ContactCollection, ContactRecord, Registry};
pub use session::Session;
pub use storage::{RegistryStore, StorageFile};
