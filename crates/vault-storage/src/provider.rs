//! Persistence manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use vault_core::config::storage::StorageConfig;
use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_core::traits::persistence::PersistenceAdapter;

/// Persistence manager that wraps the configured backend.
///
/// The backend is selected at construction time based on configuration.
/// Because the manager itself is a sized [`PersistenceAdapter`], callers
/// get the typed `load_json_or`/`save_json` helpers through it.
#[derive(Debug, Clone)]
pub struct PersistenceManager {
    /// The inner backend.
    inner: Arc<dyn PersistenceAdapter>,
}

impl PersistenceManager {
    /// Create a new manager from configuration.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let inner: Arc<dyn PersistenceAdapter> = match config.provider.as_str() {
            #[cfg(feature = "file")]
            "file" => {
                info!(data_dir = %config.data_dir, "Initializing file persistence");
                Arc::new(crate::file::FileStore::new(&config.data_dir).await?)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory persistence");
                Arc::new(crate::memory::MemoryStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: '{other}'. Supported: memory, file"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a manager from an existing backend (for testing).
    pub fn from_adapter(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self { inner: adapter }
    }

    /// Get a reference to the inner backend.
    pub fn adapter(&self) -> &dyn PersistenceAdapter {
        self.inner.as_ref()
    }
}

#[async_trait]
impl PersistenceAdapter for PersistenceManager {
    fn provider_type(&self) -> &str {
        self.inner.provider_type()
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        self.inner.exists(key).await
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        self.inner.keys().await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vault_core::error::ErrorKind;

    #[tokio::test]
    async fn test_memory_provider_from_config() {
        let config = StorageConfig {
            provider: "memory".to_string(),
            ..StorageConfig::default()
        };
        let manager = PersistenceManager::new(&config).await.unwrap();
        assert_eq!(manager.provider_type(), "memory");
        manager.save_json("k", &"v").await.unwrap();
        let v: String = manager.load_json_or("k", String::new()).await.unwrap();
        assert_eq!(v, "v");
    }

    #[tokio::test]
    async fn test_file_provider_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            provider: "file".to_string(),
            data_dir: dir.path().join("vault").to_string_lossy().into_owned(),
            key_prefix: String::new(),
        };
        let manager = PersistenceManager::new(&config).await.unwrap();
        assert_eq!(manager.provider_type(), "file");
        assert!(manager.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_provider() {
        let config = StorageConfig {
            provider: "redis".to_string(),
            ..StorageConfig::default()
        };
        let err = PersistenceManager::new(&config).await.unwrap_err();
        assert!(err.is(ErrorKind::Configuration));
    }
}
