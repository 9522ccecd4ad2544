//! Read-only queries over the flat record list.
//!
//! Every query is a single linear scan. Hierarchy comes from the path
//! string alone: a record is a child of `path` when its own path extends
//! `path` by exactly one segment. Parent pointers are not consulted except
//! at the root, so a record with a stale `parent_id` still lists correctly
//! as long as its path is well-formed.

use vault_core::types::FileId;
use vault_entity::file::FileRecord;
use vault_entity::file::model::path_depth;

/// Derived views over a slice of records.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    /// Records in store order.
    records: &'a [FileRecord],
}

/// A record with its non-deleted descendants, for tree display.
#[derive(Debug, Clone)]
pub struct TreeNode<'a> {
    /// The record at this node.
    pub record: &'a FileRecord,
    /// Direct children (empty for files).
    pub children: Vec<TreeNode<'a>>,
}

impl<'a> PathResolver<'a> {
    /// Creates a resolver over `records`.
    pub fn new(records: &'a [FileRecord]) -> Self {
        Self { records }
    }

    /// Finds a record by id, deleted or not.
    pub fn find(&self, id: FileId) -> Option<&'a FileRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Finds the non-deleted folder whose path is exactly `path`.
    pub fn find_folder(&self, path: &str) -> Option<&'a FileRecord> {
        self.records
            .iter()
            .find(|r| !r.is_deleted && r.is_folder() && r.path == path)
    }

    /// Non-deleted direct children of `path`, in store order.
    ///
    /// At the root a record qualifies if it has no parent or sits one
    /// level deep. Elsewhere its path must extend `path` by a `/` and
    /// exactly one more segment.
    pub fn list_by_path(&self, path: &str) -> Vec<&'a FileRecord> {
        if path == "/" {
            return self
                .records
                .iter()
                .filter(|r| !r.is_deleted && (r.parent_id.is_none() || r.depth() == 1))
                .collect();
        }

        let child_depth = path_depth(path) + 1;
        self.records
            .iter()
            .filter(|r| !r.is_deleted && is_under(path, &r.path) && r.depth() == child_depth)
            .collect()
    }

    /// Non-deleted favorites, in store order.
    pub fn list_favorites(&self) -> Vec<&'a FileRecord> {
        self.records
            .iter()
            .filter(|r| r.is_favorite && !r.is_deleted)
            .collect()
    }

    /// Non-deleted records, most recently modified first, at most `limit`.
    ///
    /// Equal timestamps are ordered by id so the result is deterministic.
    pub fn list_recent(&self, limit: usize) -> Vec<&'a FileRecord> {
        let mut recent: Vec<&FileRecord> = self.records.iter().filter(|r| !r.is_deleted).collect();
        recent.sort_by(|a, b| {
            b.modified_at
                .cmp(&a.modified_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        recent.truncate(limit);
        recent
    }

    /// Records in the trash, in store order.
    pub fn list_trash(&self) -> Vec<&'a FileRecord> {
        self.records.iter().filter(|r| r.is_deleted).collect()
    }

    /// Builds the non-deleted tree under `path`.
    pub fn tree(&self, path: &str) -> Vec<TreeNode<'a>> {
        self.list_by_path(path)
            .into_iter()
            .map(|record| TreeNode {
                record,
                children: if record.is_folder() {
                    self.tree(&record.path)
                } else {
                    Vec::new()
                },
            })
            .collect()
    }
}

/// Keeps records whose name contains `query`, ignoring case.
///
/// An empty or blank query keeps everything.
pub fn filter_by_name<'a>(records: Vec<&'a FileRecord>, query: &str) -> Vec<&'a FileRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Whether `candidate` lies strictly below `path`, segment-wise.
fn is_under(path: &str, candidate: &str) -> bool {
    candidate
        .strip_prefix(path)
        .is_some_and(|rest| rest.starts_with('/'))
}
