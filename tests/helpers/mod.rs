//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use vault_auth::{AuthService, PersistedCredentialStore};
use vault_core::config::{AuthConfig, SecurePolicy, StorageConfig, VaultConfig};
use vault_service::VaultService;
use vault_storage::{PersistenceManager, VaultKeys};

/// Persistence backed by the in-memory store.
pub async fn memory_persistence() -> Arc<PersistenceManager> {
    let config = StorageConfig {
        provider: "memory".to_string(),
        ..StorageConfig::default()
    };
    Arc::new(
        PersistenceManager::new(&config)
            .await
            .expect("Failed to init memory persistence"),
    )
}

/// Persistence backed by JSON files in `dir`.
pub async fn file_persistence(dir: &Path) -> Arc<PersistenceManager> {
    let config = StorageConfig {
        provider: "file".to_string(),
        data_dir: dir.to_string_lossy().into_owned(),
        key_prefix: String::new(),
    };
    Arc::new(
        PersistenceManager::new(&config)
            .await
            .expect("Failed to init file persistence"),
    )
}

/// Vault settings with a deterministic secure flag.
pub fn vault_config() -> VaultConfig {
    VaultConfig {
        secure_policy: SecurePolicy::Never,
        ..VaultConfig::default()
    }
}

/// Load a vault over `persistence` with default keys.
pub async fn open_vault(persistence: Arc<PersistenceManager>) -> VaultService {
    open_vault_with_keys(persistence, VaultKeys::default()).await
}

/// Load a vault over `persistence` with the given keys.
pub async fn open_vault_with_keys(
    persistence: Arc<PersistenceManager>,
    keys: VaultKeys,
) -> VaultService {
    VaultService::load(persistence, keys, vault_config())
        .await
        .expect("Failed to load vault")
}

/// Load the auth service over `persistence` with default keys.
pub async fn open_auth(persistence: Arc<PersistenceManager>) -> AuthService {
    let keys = VaultKeys::default();
    let credentials = Arc::new(PersistedCredentialStore::new(
        persistence.clone(),
        keys.users(),
    ));
    AuthService::load(
        credentials,
        persistence,
        keys.current_user(),
        &AuthConfig::default(),
    )
    .await
    .expect("Failed to load auth")
}
