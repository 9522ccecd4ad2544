//! Activity feed models.

pub mod model;

pub use model::{ActivityKind, ActivityRecord, NewActivity};
