//! User and credential models.

pub mod model;
pub mod role;

pub use model::{StoredCredential, UserRecord};
pub use role::UserRole;
