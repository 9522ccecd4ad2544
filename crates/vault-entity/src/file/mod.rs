//! File and folder record models.

pub mod category;
pub mod model;

pub use category::FileCategory;
pub use model::{FileKind, FileRecord, UploadFile};
