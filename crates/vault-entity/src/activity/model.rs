//! Activity log entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use vault_core::types::{ActivityId, FileId, UserId};

/// What kind of action an activity entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Files were uploaded.
    Upload,
    /// A file was downloaded.
    Download,
    /// A file was shared.
    Share,
    /// Records were moved to the trash.
    Delete,
    /// Records were restored from the trash.
    Restore,
    /// A folder was created.
    CreateFolder,
}

impl ActivityKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Download => "download",
            Self::Share => "share",
            Self::Delete => "delete",
            Self::Restore => "restore",
            Self::CreateFolder => "create_folder",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable activity feed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Unique entry identifier.
    pub id: ActivityId,
    /// The action performed.
    pub kind: ActivityKind,
    /// Human-readable summary, e.g. `Uploaded 3 files`.
    pub description: String,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
    /// The acting user.
    pub user_id: UserId,
    /// Related record, if any.
    pub file_id: Option<FileId>,
    /// Related record name, if any.
    pub file_name: Option<String>,
}

/// Data for a new activity entry; id and timestamp are assigned on append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    /// The action performed.
    pub kind: ActivityKind,
    /// Human-readable summary.
    pub description: String,
    /// The acting user.
    pub user_id: UserId,
    /// Related record, if any.
    pub file_id: Option<FileId>,
    /// Related record name, if any.
    pub file_name: Option<String>,
}

impl NewActivity {
    /// Create an entry with no related record.
    pub fn new(kind: ActivityKind, description: impl Into<String>, user_id: UserId) -> Self {
        Self {
            kind,
            description: description.into(),
            user_id,
            file_id: None,
            file_name: None,
        }
    }

    /// Attach the related record's name.
    pub fn with_file_name(mut self, file_name: Option<String>) -> Self {
        self.file_name = file_name;
        self
    }

    /// Attach the related record's id.
    pub fn with_file_id(mut self, file_id: Option<FileId>) -> Self {
        self.file_id = file_id;
        self
    }
}

impl ActivityRecord {
    /// Stamp a new entry with a fresh id and the current time.
    pub fn stamp(new: NewActivity) -> Self {
        Self {
            id: ActivityId::new(),
            kind: new.kind,
            description: new.description,
            timestamp: Utc::now(),
            user_id: new.user_id,
            file_id: new.file_id,
            file_name: new.file_name,
        }
    }
}
