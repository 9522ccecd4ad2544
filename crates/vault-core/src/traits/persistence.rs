//! Persistence adapter trait for pluggable key-value backends.

use async_trait::async_trait;
use tracing::warn;

use crate::result::AppResult;

/// Trait for the durable key-value store behind the vault.
///
/// Values are opaque strings (JSON documents). Each `set` replaces the
/// previous value under the key in full; there are no partial updates.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g., `"memory"`, `"file"`).
    fn provider_type(&self) -> &str;

    /// Get the raw value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any prior value.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether a value is stored under `key`.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// List all stored keys in lexicographic order.
    async fn keys(&self) -> AppResult<Vec<String>>;

    /// Check that the backend is usable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Load a typed value, falling back to `default` when the key is
    /// absent or the stored document cannot be decoded.
    ///
    /// Backend I/O failures are still returned as errors.
    async fn load_json_or<T>(&self, key: &str, default: T) -> AppResult<T>
    where
        Self: Sized,
        T: serde::de::DeserializeOwned + Send,
    {
        match self.get(key).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    warn!(key, error = %e, "Malformed stored value, using default");
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }

    /// Serialize `value` to JSON and store it under `key`.
    async fn save_json<T>(&self, key: &str, value: &T) -> AppResult<()>
    where
        Self: Sized,
        T: serde::Serialize + Send + Sync + ?Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set(key, &json).await
    }
}
