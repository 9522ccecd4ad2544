//! The vault record store.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use vault_core::config::VaultConfig;
use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_core::traits::persistence::PersistenceAdapter;
use vault_core::types::{FileId, UserId};
use vault_entity::activity::{ActivityKind, ActivityRecord, NewActivity};
use vault_entity::file::model::join_path;
use vault_entity::file::{FileCategory, FileKind, FileRecord, UploadFile};
use vault_storage::{PersistenceManager, VaultKeys};

use crate::activity::ActivityLog;
use crate::resolver::{PathResolver, TreeNode, filter_by_name};
use crate::stats::VaultStats;
use crate::upload::{UploadTick, secure_flag};
use crate::view::{Breadcrumb, Section, ViewMode, ViewState, breadcrumbs, normalize_path};

/// Owns the file records, the activity feed and the navigation state.
///
/// Mutations commit in memory, then save the affected collections in
/// full. A failed save is returned; the in-memory change is kept.
#[derive(Debug)]
pub struct VaultService {
    /// All records, in insertion order.
    records: Vec<FileRecord>,
    /// Recent activity, newest first.
    activity: ActivityLog,
    /// Navigation state (not persisted).
    view: ViewState,
    /// Who is credited with new records and activity entries.
    actor: UserId,
    /// Durable storage.
    persistence: Arc<PersistenceManager>,
    /// Storage keys.
    keys: VaultKeys,
    /// Behavior settings.
    config: VaultConfig,
}

impl VaultService {
    /// Load records and activity from persistence.
    ///
    /// Absent or malformed collections start empty.
    pub async fn load(
        persistence: Arc<PersistenceManager>,
        keys: VaultKeys,
        config: VaultConfig,
    ) -> AppResult<Self> {
        let (records, entries) = fetch(&persistence, &keys).await?;
        info!(
            records = records.len(),
            activities = entries.len(),
            "Vault loaded"
        );

        Ok(Self {
            records,
            activity: ActivityLog::from_entries(entries, config.activity_capacity),
            view: ViewState::default(),
            actor: UserId::anonymous(),
            persistence,
            keys,
            config,
        })
    }

    /// Re-read both collections from persistence.
    ///
    /// On failure the current in-memory state is left untouched.
    pub async fn reload(&mut self) -> AppResult<()> {
        let (records, entries) = fetch(&self.persistence, &self.keys).await?;
        self.records = records;
        self.activity = ActivityLog::from_entries(entries, self.config.activity_capacity);
        Ok(())
    }

    /// Credit subsequent changes to `user`.
    pub fn set_actor(&mut self, user: UserId) {
        self.actor = user;
    }

    /// The user credited with changes.
    pub fn actor(&self) -> UserId {
        self.actor
    }

    /// All records in store order, deleted ones included.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: FileId) -> AppResult<&FileRecord> {
        self.resolver()
            .find(id)
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }

    /// Read-only queries over the current records.
    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.records)
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Record uploaded files under `parent_id`.
    ///
    /// See [`Self::upload_with_progress`].
    pub async fn upload(
        &mut self,
        files: Vec<UploadFile>,
        parent_id: Option<FileId>,
    ) -> AppResult<Vec<FileRecord>> {
        self.upload_with_progress(files, parent_id, |_| {}).await
    }

    /// Record uploaded files under `parent_id`, reporting progress.
    ///
    /// Without a parent the files land in the folder being viewed. An
    /// empty batch changes nothing and logs no activity.
    pub async fn upload_with_progress<F>(
        &mut self,
        files: Vec<UploadFile>,
        parent_id: Option<FileId>,
        mut progress: F,
    ) -> AppResult<Vec<FileRecord>>
    where
        F: FnMut(UploadTick),
    {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let (parent_id, parent_path) = self.resolve_parent(parent_id);
        let total = files.len();
        let now = Utc::now();

        let mut created = Vec::with_capacity(total);
        for (i, file) in files.into_iter().enumerate() {
            created.push(FileRecord {
                id: FileId::new(),
                category: Some(FileCategory::from_name(&file.name)),
                size: Some(file.size),
                parent_id,
                path: join_path(&parent_path, &file.name),
                created_at: now,
                modified_at: now,
                is_secure: secure_flag(self.config.secure_policy),
                is_favorite: false,
                is_deleted: false,
                deleted_at: None,
                owner_id: self.actor,
                content: file.content,
                children: None,
                name: file.name,
                kind: FileKind::File,
            });
            progress(UploadTick::prepared(i + 1, total));
        }

        for record in &created {
            if let Some(pid) = parent_id {
                self.attach_child(pid, record.id);
            }
        }
        self.records.extend(created.iter().cloned());

        let single = (total == 1).then(|| &created[0]);
        self.activity.append(
            NewActivity::new(
                ActivityKind::Upload,
                format!("Uploaded {}", count_noun(total, "file")),
                self.actor,
            )
            .with_file_name(single.map(|r| r.name.clone()))
            .with_file_id(single.map(|r| r.id)),
        );
        progress(UploadTick::done(total));

        info!(count = total, path = %parent_path, "Files uploaded");
        self.persist_all().await?;
        Ok(created)
    }

    /// Create an empty folder under `parent_id`.
    ///
    /// Without a parent the folder lands in the folder being viewed.
    pub async fn create_folder(
        &mut self,
        name: &str,
        parent_id: Option<FileId>,
    ) -> AppResult<FileRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }
        if name.contains('/') {
            return Err(AppError::validation("Folder name cannot contain '/'"));
        }

        let (parent_id, parent_path) = self.resolve_parent(parent_id);
        let now = Utc::now();
        let folder = FileRecord {
            id: FileId::new(),
            name: name.to_string(),
            kind: FileKind::Folder,
            category: None,
            size: None,
            parent_id,
            path: join_path(&parent_path, name),
            created_at: now,
            modified_at: now,
            is_secure: false,
            is_favorite: false,
            is_deleted: false,
            deleted_at: None,
            owner_id: self.actor,
            content: None,
            children: Some(Vec::new()),
        };

        if let Some(pid) = parent_id {
            self.attach_child(pid, folder.id);
        }
        self.records.push(folder.clone());

        self.activity.append(
            NewActivity::new(
                ActivityKind::CreateFolder,
                format!("Created folder \"{name}\""),
                self.actor,
            )
            .with_file_name(Some(folder.name.clone()))
            .with_file_id(Some(folder.id)),
        );

        info!(folder_id = %folder.id, path = %folder.path, "Folder created");
        self.persist_all().await?;
        Ok(folder)
    }

    /// Move records to the trash and clear the selection.
    ///
    /// Unknown ids are skipped. Returns how many records were trashed.
    pub async fn soft_delete(&mut self, ids: &[FileId]) -> AppResult<usize> {
        self.view.selected.clear();

        let single_name = self.single_name(ids);
        let now = Utc::now();
        let mut count = 0;
        for record in self.records.iter_mut().filter(|r| ids.contains(&r.id)) {
            record.is_deleted = true;
            record.deleted_at = Some(now);
            count += 1;
        }
        if count == 0 {
            return Ok(0);
        }

        self.activity.append(
            NewActivity::new(
                ActivityKind::Delete,
                format!("Moved {} to trash", count_noun(count, "item")),
                self.actor,
            )
            .with_file_name(single_name)
            .with_file_id(single_id(ids, count)),
        );

        info!(count, "Records moved to trash");
        self.persist_all().await?;
        Ok(count)
    }

    /// Take records out of the trash.
    ///
    /// Unknown ids are skipped. Returns how many records matched.
    pub async fn restore(&mut self, ids: &[FileId]) -> AppResult<usize> {
        let single_name = self.single_name(ids);
        let mut count = 0;
        for record in self.records.iter_mut().filter(|r| ids.contains(&r.id)) {
            record.is_deleted = false;
            record.deleted_at = None;
            count += 1;
        }
        if count == 0 {
            return Ok(0);
        }

        self.activity.append(
            NewActivity::new(
                ActivityKind::Restore,
                format!("Restored {}", count_noun(count, "item")),
                self.actor,
            )
            .with_file_name(single_name)
            .with_file_id(single_id(ids, count)),
        );

        info!(count, "Records restored");
        self.persist_all().await?;
        Ok(count)
    }

    /// Remove records permanently. Logs no activity.
    ///
    /// Unknown ids are skipped. Returns how many records were removed.
    pub async fn hard_delete(&mut self, ids: &[FileId]) -> AppResult<usize> {
        let before = self.records.len();
        self.records.retain(|r| !ids.contains(&r.id));
        let removed = before - self.records.len();
        if removed == 0 {
            return Ok(0);
        }

        for folder in self.records.iter_mut() {
            if let Some(children) = folder.children.as_mut() {
                children.retain(|c| !ids.contains(c));
            }
        }
        self.view.selected.retain(|s| !ids.contains(s));

        info!(count = removed, "Records permanently deleted");
        self.persist_records().await?;
        Ok(removed)
    }

    /// Flip the favorite flag and return its new value. Logs no activity.
    pub async fn toggle_favorite(&mut self, id: FileId) -> AppResult<bool> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))?;
        record.is_favorite = !record.is_favorite;
        let favorite = record.is_favorite;

        debug!(file_id = %id, favorite, "Favorite toggled");
        self.persist_records().await?;
        Ok(favorite)
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Non-deleted direct children of `path`.
    pub fn list_by_path(&self, path: &str) -> Vec<&FileRecord> {
        self.resolver().list_by_path(path)
    }

    /// Non-deleted favorites.
    pub fn list_favorites(&self) -> Vec<&FileRecord> {
        self.resolver().list_favorites()
    }

    /// Most recently modified non-deleted records, at most `limit`.
    pub fn list_recent(&self, limit: usize) -> Vec<&FileRecord> {
        self.resolver().list_recent(limit)
    }

    /// Records in the trash.
    pub fn list_trash(&self) -> Vec<&FileRecord> {
        self.resolver().list_trash()
    }

    /// Non-deleted tree below `path`.
    pub fn tree(&self, path: &str) -> Vec<TreeNode<'_>> {
        self.resolver().tree(path)
    }

    /// The `n` newest activity entries.
    pub fn recent_activity(&self, n: usize) -> &[ActivityRecord] {
        self.activity.recent(n)
    }

    /// The activity feed.
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Dashboard totals.
    pub fn stats(&self) -> VaultStats {
        VaultStats::collect(&self.records)
    }

    // ── View state ───────────────────────────────────────────────────

    /// Current navigation state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Navigate to `path`.
    pub fn set_current_path(&mut self, path: &str) {
        self.view.current_path = normalize_path(path);
    }

    /// Set the name filter applied by [`Self::visible`].
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.view.search_query = query.into();
    }

    /// Switch between grid and list layout.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.view_mode = mode;
    }

    /// Replace the selection.
    pub fn set_selection(&mut self, ids: Vec<FileId>) {
        self.view.selected = ids;
    }

    /// Currently selected ids.
    pub fn selection(&self) -> &[FileId] {
        &self.view.selected
    }

    /// Records shown for `section`, filtered by the search query.
    pub fn visible(&self, section: Section) -> Vec<&FileRecord> {
        let resolver = self.resolver();
        let records = match section {
            Section::Folders => resolver.list_by_path(&self.view.current_path),
            Section::Favorites => resolver.list_favorites(),
            Section::Recent => resolver.list_recent(self.config.recent_limit),
            Section::Trash => resolver.list_trash(),
        };
        filter_by_name(records, &self.view.search_query)
    }

    /// Breadcrumb trail for the current path.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        breadcrumbs(&self.view.current_path)
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Pick the parent id and path for new records.
    ///
    /// An explicit parent must exist; otherwise the record goes to the
    /// root. Without one, the folder at the current path is used.
    fn resolve_parent(&self, parent_id: Option<FileId>) -> (Option<FileId>, String) {
        let resolver = self.resolver();
        match parent_id {
            Some(id) => match resolver.find(id) {
                Some(parent) => (Some(parent.id), parent.path.clone()),
                None => {
                    warn!(parent_id = %id, "Parent not found, using root");
                    (None, "/".to_string())
                }
            },
            None if self.view.current_path == "/" => (None, "/".to_string()),
            None => match resolver.find_folder(&self.view.current_path) {
                Some(folder) => (Some(folder.id), folder.path.clone()),
                None => (None, "/".to_string()),
            },
        }
    }

    fn attach_child(&mut self, parent_id: FileId, child_id: FileId) {
        if let Some(children) = self
            .records
            .iter_mut()
            .find(|r| r.id == parent_id)
            .and_then(|r| r.children.as_mut())
        {
            children.push(child_id);
        }
    }

    /// Name of the record when exactly one id is given, read before
    /// the mutation.
    fn single_name(&self, ids: &[FileId]) -> Option<String> {
        match ids {
            [id] => self.resolver().find(*id).map(|r| r.name.clone()),
            _ => None,
        }
    }

    async fn persist_records(&self) -> AppResult<()> {
        debug!(count = self.records.len(), "Saving records");
        self.persistence
            .save_json(&self.keys.files(), &self.records)
            .await
    }

    async fn persist_all(&self) -> AppResult<()> {
        self.persist_records().await?;
        self.persistence
            .save_json(&self.keys.activities(), self.activity.entries())
            .await
    }
}

async fn fetch(
    persistence: &PersistenceManager,
    keys: &VaultKeys,
) -> AppResult<(Vec<FileRecord>, Vec<ActivityRecord>)> {
    let records = persistence.load_json_or(&keys.files(), Vec::new()).await?;
    let entries = persistence
        .load_json_or(&keys.activities(), Vec::new())
        .await?;
    Ok((records, entries))
}

fn single_id(ids: &[FileId], count: usize) -> Option<FileId> {
    match ids {
        [id] if count == 1 => Some(*id),
        _ => None,
    }
}

fn count_noun(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
