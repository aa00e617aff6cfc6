//! Contact Registry - main entry point
//!
//! Opens the configured registry file and lists its contacts, hiding
//! private attributes.

use anyhow::Result;
use contact_registry::{Config, Session, StorageFile};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // Logging goes to stderr so listings on stdout stay clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Using registry file {} (accepted suffixes: {})",
        config.registry_file.display(),
        config.accepted_suffixes.join(", ")
    );

    let store =
        StorageFile::with_suffixes(&config.registry_file, config.accepted_suffixes.as_slice())?;

    let session = if store.path().exists() {
        match Session::open(store) {
            Ok(session) => session,
            Err(e) => {
                error!("Failed to load registry: {}", e);
                return Err(e.into());
            }
        }
    } else {
        info!("Registry file not found, starting with an empty registry");
        Session::empty(store)
    };

    let registry = session.registry();
    for (position, record) in registry.all_records().iter().enumerate() {
        println!("{}. {}", position + 1, record.as_text_hide_private());
    }
    println!("{} contact(s) listed", registry.len());

    Ok(())
}

