//! # vault-storage
//!
//! Persistence adapters for FileVault. Supports two backends:
//!
//! - **memory**: process-local map using [dashmap](https://crates.io/crates/dashmap)
//! - **file**: one JSON document per key in a data directory
//!
//! The backend is selected at runtime based on configuration.

#[cfg(feature = "file")]
pub mod file;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;

pub use keys::VaultKeys;
pub use provider::PersistenceManager;
