//! File record model.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vault_core::types::{FileId, UserId};

use super::category::FileCategory;

/// Whether a record is a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A regular file.
    File,
    /// A folder.
    Folder,
}

/// A file or folder in the vault.
///
/// Records are kept in a flat list. Hierarchy lives in `path`, which is
/// always the slash-joined names from the root down to this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique, immutable record identifier.
    pub id: FileId,
    /// Display name (including extension for files).
    pub name: String,
    /// File or folder.
    pub kind: FileKind,
    /// Content category (files only).
    pub category: Option<FileCategory>,
    /// Size in bytes (files only).
    pub size: Option<u64>,
    /// Parent folder, `None` for root-level records.
    pub parent_id: Option<FileId>,
    /// Absolute slash-delimited path, e.g. `/Projects/a.txt`.
    pub path: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub modified_at: DateTime<Utc>,
    /// Cosmetic "secure" badge.
    pub is_secure: bool,
    /// Starred by the user.
    pub is_favorite: bool,
    /// In the trash.
    pub is_deleted: bool,
    /// When the record was moved to the trash.
    pub deleted_at: Option<DateTime<Utc>>,
    /// The user who created the record.
    pub owner_id: UserId,
    /// Raw content handle. Held in memory only, never persisted.
    #[serde(skip)]
    pub content: Option<Bytes>,
    /// Child identifiers (folders only).
    pub children: Option<Vec<FileId>>,
}

impl FileRecord {
    /// Check if this record is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == FileKind::Folder
    }

    /// Number of slashes in the path; 1 for a root-level record.
    pub fn depth(&self) -> usize {
        path_depth(&self.path)
    }
}

/// Number of `/` separators in a path.
pub fn path_depth(path: &str) -> usize {
    path.matches('/').count()
}

/// Join a parent path and a child name. The root `/` yields `/name`.
pub fn join_path(parent_path: &str, name: &str) -> String {
    if parent_path == "/" {
        format!("/{name}")
    } else {
        format!("{parent_path}/{name}")
    }
}

/// An incoming file to be recorded by an upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadFile {
    /// The file name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Optional in-memory content.
    #[serde(skip)]
    pub content: Option<Bytes>,
}

impl UploadFile {
    /// Describe a file by name and size only.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            content: None,
        }
    }

    /// Describe a file from its bytes.
    pub fn with_content(name: impl Into<String>, content: Bytes) -> Self {
        Self {
            name: name.into(),
            size: content.len() as u64,
            content: Some(content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/", "report.pdf"), "/report.pdf");
        assert_eq!(join_path("/Projects", "a.txt"), "/Projects/a.txt");
    }

    #[test]
    fn test_path_depth() {
        assert_eq!(path_depth("/a"), 1);
        assert_eq!(path_depth("/a/b/c"), 3);
    }

    #[test]
    fn test_content_not_serialized() {
        let upload = UploadFile::with_content("x.bin", Bytes::from_static(b"abc"));
        assert_eq!(upload.size, 3);
        let json = serde_json::to_value(&upload).expect("serialize");
        assert!(json.get("content").is_none());
    }
}
