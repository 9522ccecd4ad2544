//! # vault-auth
//!
//! Toy authentication for FileVault.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and policy enforcement
//! - `credential`: The credential store interface and its persisted implementation
//! - `service`: Registration, login, logout and the current-user record

pub mod credential;
pub mod password;
pub mod service;

pub use credential::{CredentialStore, PersistedCredentialStore};
pub use password::{PasswordHasher, PasswordValidator};
pub use service::AuthService;
