//! Credential storage.

pub mod store;

pub use store::{CredentialStore, PersistedCredentialStore};
