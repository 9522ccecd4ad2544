//! Registration, login and the persisted current-user record.

use std::sync::Arc;

use tracing::{info, warn};

use vault_core::config::AuthConfig;
use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_core::traits::persistence::PersistenceAdapter;
use vault_entity::user::{StoredCredential, UserRecord};
use vault_storage::PersistenceManager;

use crate::credential::CredentialStore;
use crate::password::{PasswordHasher, PasswordValidator};

/// Tracks who is logged in and handles credential checks.
///
/// The current user is persisted under its own key so that a new
/// process starts logged in as whoever was logged in last.
#[derive(Debug)]
pub struct AuthService {
    /// Registered credentials.
    credentials: Arc<dyn CredentialStore>,
    /// Persistence for the current-user record.
    persistence: Arc<PersistenceManager>,
    /// Key holding the current user.
    current_user_key: String,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Input policy.
    validator: PasswordValidator,
    /// The logged-in user, if any.
    current: Option<UserRecord>,
}

impl AuthService {
    /// Creates the service and restores the last logged-in user.
    pub async fn load(
        credentials: Arc<dyn CredentialStore>,
        persistence: Arc<PersistenceManager>,
        current_user_key: impl Into<String>,
        config: &AuthConfig,
    ) -> AppResult<Self> {
        let current_user_key = current_user_key.into();
        let current: Option<UserRecord> = persistence
            .load_json_or(&current_user_key, None)
            .await?;

        Ok(Self {
            credentials,
            persistence,
            current_user_key,
            hasher: PasswordHasher::new(),
            validator: PasswordValidator::new(config),
            current,
        })
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current.as_ref()
    }

    /// Registers a new user and logs them in.
    ///
    /// Fails with a conflict if the email is already registered; nothing
    /// is stored in that case.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> AppResult<UserRecord> {
        self.validator.validate_email(email)?;
        self.validator.validate(password)?;
        if name.trim().is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }

        if self.credentials.find_by_email(email).await?.is_some() {
            warn!("Registration rejected: email already registered");
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                email.trim().to_lowercase()
            )));
        }

        let user = UserRecord::new(email, name.trim());
        let credential = StoredCredential {
            user: user.clone(),
            password_hash: self.hasher.hash(password)?,
        };
        self.credentials.add(credential).await?;

        info!(user_id = %user.id, "User registered");
        self.set_current(Some(user.clone())).await?;
        Ok(user)
    }

    /// Logs in with an email and password.
    pub async fn login(&mut self, email: &str, password: &str) -> AppResult<UserRecord> {
        let credential = self
            .credentials
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        if !self.hasher.verify(password, &credential.password_hash)? {
            warn!(user_id = %credential.user.id, "Login failed: wrong password");
            return Err(AppError::authentication("Invalid email or password"));
        }

        info!(user_id = %credential.user.id, "User logged in");
        self.set_current(Some(credential.user.clone())).await?;
        Ok(credential.user)
    }

    /// Logs out the current user.
    pub async fn logout(&mut self) -> AppResult<()> {
        if let Some(user) = &self.current {
            info!(user_id = %user.id, "User logged out");
        }
        self.set_current(None).await
    }

    /// Commits the current user in memory, then persists it.
    async fn set_current(&mut self, user: Option<UserRecord>) -> AppResult<()> {
        self.current = user;
        self.persistence
            .save_json(&self.current_user_key, &self.current)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::PersistedCredentialStore;
    use vault_core::error::ErrorKind;
    use vault_storage::memory::MemoryStore;

    async fn make_service(store: MemoryStore) -> AuthService {
        let persistence = Arc::new(PersistenceManager::from_adapter(Arc::new(store)));
        let credentials = Arc::new(PersistedCredentialStore::new(
            persistence.clone(),
            "vault_users",
        ));
        AuthService::load(credentials, persistence, "vault_user", &AuthConfig::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_logs_in() {
        let mut auth = make_service(MemoryStore::new()).await;
        let user = auth.register("New@X.com", "secret1", "New").await.unwrap();
        assert_eq!(user.email, "new@x.com");
        assert_eq!(auth.current_user(), Some(&user));
    }

    #[tokio::test]
    async fn test_duplicate_registration_fails() {
        let mut auth = make_service(MemoryStore::new()).await;
        auth.register("a@x.com", "secret1", "A").await.unwrap();
        let err = auth.register("a@x.com", "other12", "B").await.unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
    }

    #[tokio::test]
    async fn test_login_checks_password() {
        let mut auth = make_service(MemoryStore::new()).await;
        auth.register("a@x.com", "secret1", "A").await.unwrap();
        auth.logout().await.unwrap();
        assert!(auth.current_user().is_none());

        let err = auth.login("a@x.com", "wrong-pass").await.unwrap_err();
        assert!(err.is(ErrorKind::Authentication));
        assert!(auth.current_user().is_none());

        let user = auth.login("A@X.COM", "secret1").await.unwrap();
        assert_eq!(auth.current_user().map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_unknown_email_is_authentication_error() {
        let mut auth = make_service(MemoryStore::new()).await;
        let err = auth.login("ghost@x.com", "whatever").await.unwrap_err();
        assert!(err.is(ErrorKind::Authentication));
    }

    #[tokio::test]
    async fn test_current_user_survives_reload() {
        let store = MemoryStore::new();
        let mut auth = make_service(store.clone()).await;
        let user = auth.register("a@x.com", "secret1", "A").await.unwrap();

        let reloaded = make_service(store).await;
        assert_eq!(reloaded.current_user(), Some(&user));
    }

    #[tokio::test]
    async fn test_invalid_input_rejected() {
        let mut auth = make_service(MemoryStore::new()).await;
        assert!(auth.register("bad", "secret1", "A").await.is_err());
        assert!(auth.register("a@x.com", "short", "A").await.is_err());
        assert!(auth.register("a@x.com", "secret1", "  ").await.is_err());
    }
}
