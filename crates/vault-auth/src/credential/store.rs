//! Credential store interface and its persisted implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_core::traits::persistence::PersistenceAdapter;
use vault_entity::user::StoredCredential;
use vault_storage::PersistenceManager;

/// Lookup and registration of user credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a credential by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<StoredCredential>>;

    /// Add a credential. Fails with a conflict if the email is taken.
    async fn add(&self, credential: StoredCredential) -> AppResult<()>;

    /// All registered credentials, in registration order.
    async fn list(&self) -> AppResult<Vec<StoredCredential>>;
}

/// Credential list kept as a single document in the persistence adapter.
#[derive(Debug, Clone)]
pub struct PersistedCredentialStore {
    /// Backing persistence.
    persistence: Arc<PersistenceManager>,
    /// Key holding the credential list.
    key: String,
}

impl PersistedCredentialStore {
    /// Creates a store that reads and writes the list under `key`.
    pub fn new(persistence: Arc<PersistenceManager>, key: impl Into<String>) -> Self {
        Self {
            persistence,
            key: key.into(),
        }
    }
}

#[async_trait]
impl CredentialStore for PersistedCredentialStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<StoredCredential>> {
        let all = self.list().await?;
        Ok(all.into_iter().find(|c| c.matches_email(email)))
    }

    async fn add(&self, credential: StoredCredential) -> AppResult<()> {
        let mut all = self.list().await?;
        if all.iter().any(|c| c.matches_email(&credential.user.email)) {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                credential.user.email
            )));
        }

        debug!(user_id = %credential.user.id, "Adding credential");
        all.push(credential);
        self.persistence.save_json(&self.key, &all).await
    }

    async fn list(&self) -> AppResult<Vec<StoredCredential>> {
        self.persistence.load_json_or(&self.key, Vec::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vault_core::error::ErrorKind;
    use vault_entity::user::UserRecord;
    use vault_storage::memory::MemoryStore;

    fn make_store() -> PersistedCredentialStore {
        let manager = PersistenceManager::from_adapter(Arc::new(MemoryStore::new()));
        PersistedCredentialStore::new(Arc::new(manager), "vault_users")
    }

    fn credential(email: &str) -> StoredCredential {
        StoredCredential {
            user: UserRecord::new(email, "Someone"),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_is_case_insensitive() {
        let store = make_store();
        store.add(credential("a@x.com")).await.unwrap();
        let found = store.find_by_email("A@X.com").await.unwrap();
        assert_eq!(found.map(|c| c.user.email), Some("a@x.com".to_string()));
        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let store = make_store();
        store.add(credential("a@x.com")).await.unwrap();
        let err = store.add(credential("A@x.COM")).await.unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
