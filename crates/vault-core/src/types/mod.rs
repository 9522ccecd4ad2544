//! Core type definitions used across the FileVault workspace.

pub mod id;

pub use id::*;
