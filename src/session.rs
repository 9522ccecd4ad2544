//! Wiring of persistence, auth and the vault for one CLI invocation.

use std::sync::Arc;

use tracing::debug;

use vault_auth::{AuthService, PersistedCredentialStore};
use vault_core::config::AppConfig;
use vault_core::result::AppResult;
use vault_storage::{PersistenceManager, VaultKeys};
use vault_service::VaultService;

/// Services sharing one persistence backend.
#[derive(Debug)]
pub struct Session {
    /// Login state.
    pub auth: AuthService,
    /// Records and activity.
    pub vault: VaultService,
}

impl Session {
    /// Open the configured backend and load the persisted state.
    ///
    /// Changes are credited to the logged-in user, if any.
    pub async fn open(config: &AppConfig) -> AppResult<Self> {
        let persistence = Arc::new(PersistenceManager::new(&config.storage).await?);
        let keys = VaultKeys::new(config.storage.key_prefix.clone());

        let credentials = Arc::new(PersistedCredentialStore::new(
            persistence.clone(),
            keys.users(),
        ));
        let auth = AuthService::load(
            credentials,
            persistence.clone(),
            keys.current_user(),
            &config.auth,
        )
        .await?;

        let mut vault = VaultService::load(persistence, keys, config.vault.clone()).await?;
        if let Some(user) = auth.current_user() {
            debug!(user_id = %user.id, "Acting as logged-in user");
            vault.set_actor(user.id);
        }

        Ok(Self { auth, vault })
    }
}
