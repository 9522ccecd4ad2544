//! JSON-file persistence backend.
//!
//! Each key is stored as `<data_dir>/<key>.json`. Writes go to a
//! temporary sibling first and are renamed into place, so a crash never
//! leaves a half-written document behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use vault_core::error::{AppError, ErrorKind};
use vault_core::result::AppResult;
use vault_core::traits::persistence::PersistenceAdapter;

const EXTENSION: &str = "json";

/// Directory-backed key-value store.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding the documents.
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root_path`, creating the directory if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to create data directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key to its document path.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(AppError::validation(format!("Invalid storage key: '{key}'")));
        }
        Ok(self.root.join(format!("{key}.{EXTENSION}")))
    }
}

#[async_trait]
impl PersistenceAdapter for FileStore {
    fn provider_type(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.resolve(key)?;
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to read key: {key}"),
                e,
            )),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));

        fs::write(&tmp, value.as_bytes()).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to write key: {key}"),
                e,
            )
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to commit key: {key}"),
                e,
            )
        })?;

        debug!(key, bytes = value.len(), "Wrote document");
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to delete key: {key}"),
                e,
            )),
        }
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let path = self.resolve(key)?;
        Ok(fs::try_exists(&path).await?)
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        let mut entries = fs::read_dir(&self.root).await?;
        let mut keys = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn make_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_str().unwrap()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let (_dir, store) = make_store().await;
        store.set("vault_files", "[]").await.unwrap();
        assert_eq!(store.get("vault_files").await.unwrap(), Some("[]".to_string()));
        assert!(store.exists("vault_files").await.unwrap());
        assert!(store.root().join("vault_files.json").exists());
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let (_dir, store) = make_store().await;
        assert_eq!(store.get("nothing").await.unwrap(), None);
        store.delete("nothing").await.unwrap();
    }

    #[tokio::test]
    async fn test_keys_skip_temp_files() {
        let (dir, store) = make_store().await;
        store.set("b", "1").await.unwrap();
        store.set("a", "2").await.unwrap();
        std::fs::write(dir.path().join("c.json.tmp"), "x").unwrap();
        assert_eq!(store.keys().await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let (_dir, store) = make_store().await;
        let err = store.set("../escape", "x").await.unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert!(store.get(".hidden").await.is_err());
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let (dir, store) = make_store().await;
        store.save_json("nums", &vec![4, 5]).await.unwrap();
        drop(store);

        let reopened = FileStore::new(dir.path().to_str().unwrap()).await.unwrap();
        let nums: Vec<i32> = reopened.load_json_or("nums", Vec::new()).await.unwrap();
        assert_eq!(nums, vec![4, 5]);
    }
}
