//! # vault-service
//!
//! The vault state model: a flat record store whose hierarchy is derived
//! from path strings, read-only path queries over it, and a capped
//! activity feed.
//!
//! [`VaultService`] owns all mutable state and takes `&mut self` for every
//! mutation, so there is exactly one writer. Each mutation is committed in
//! memory first and then saved through the persistence adapter; a failed
//! save is returned to the caller with the in-memory state left mutated.

pub mod activity;
pub mod resolver;
pub mod stats;
pub mod upload;
pub mod vault;
pub mod view;

pub use activity::ActivityLog;
pub use resolver::PathResolver;
pub use stats::{VaultStats, format_relative, format_size};
pub use upload::{UploadTick, secure_flag};
pub use vault::VaultService;
pub use view::{Breadcrumb, Section, ViewMode, ViewState};
