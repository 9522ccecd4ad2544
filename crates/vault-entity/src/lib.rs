//! # vault-entity
//!
//! Record models for FileVault. Every struct in this crate is a value
//! that the vault keeps in memory and persists as JSON through the
//! persistence adapter. All records derive `Debug`, `Clone`, `Serialize`
//! and `Deserialize`.

pub mod activity;
pub mod file;
pub mod user;
