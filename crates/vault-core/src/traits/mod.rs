//! Core traits defined in `vault-core` and implemented by other crates.

pub mod persistence;

pub use persistence::PersistenceAdapter;
