//! Persistence backend configuration.

use serde::{Deserialize, Serialize};

/// Key-value persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend type: `"memory"` or `"file"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Directory holding one JSON document per key (file backend).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Prefix prepended to every vault key.
    #[serde(default)]
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            data_dir: default_data_dir(),
            key_prefix: String::new(),
        }
    }
}

fn default_provider() -> String {
    "file".to_string()
}

fn default_data_dir() -> String {
    "data/vault".to_string()
}
