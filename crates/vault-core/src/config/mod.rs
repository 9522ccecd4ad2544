//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML via the `config`
//! crate. Each sub-module represents a logical configuration section, and
//! every field has a default so an absent file yields a usable config.

pub mod auth;
pub mod logging;
pub mod storage;
pub mod vault;

use serde::{Deserialize, Serialize};

pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;
pub use self::vault::{SecurePolicy, VaultConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Persistence backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Record store and activity log settings.
    #[serde(default)]
    pub vault: VaultConfig,
    /// Credential settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Environment variables prefixed with `VAULT__`
    /// override file values (e.g. `VAULT__STORAGE__PROVIDER=memory`).
    pub fn load(config_path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("VAULT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load("does/not/exist.toml").expect("defaults");
        assert_eq!(config.vault.activity_capacity, 50);
        assert_eq!(config.vault.recent_limit, 20);
        assert_eq!(config.vault.activity_preview, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let raw = r#"
            [storage]
            provider = "memory"

            [vault]
            secure_policy = "never"
        "#;
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("parse");
        assert_eq!(config.storage.provider, "memory");
        assert_eq!(config.vault.secure_policy, SecurePolicy::Never);
        assert_eq!(config.vault.activity_capacity, 50);
        assert_eq!(config.auth.password_min_length, 6);
    }
}
