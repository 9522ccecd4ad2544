//! JSON-file persistence backend.

pub mod store;

pub use store::FileStore;
