//! Record store and activity log configuration.

use serde::{Deserialize, Serialize};

/// How the cosmetic `is_secure` flag is assigned to uploaded files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurePolicy {
    /// Coin flip per file.
    #[default]
    Random,
    /// Every upload is marked secure.
    Always,
    /// No upload is marked secure.
    Never,
}

/// Vault behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Maximum number of activity entries retained (oldest evicted first).
    #[serde(default = "default_activity_capacity")]
    pub activity_capacity: usize,
    /// Default size of the recent-files listing.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Default number of activity entries shown in previews.
    #[serde(default = "default_activity_preview")]
    pub activity_preview: usize,
    /// Policy for the secure flag on uploads.
    #[serde(default)]
    pub secure_policy: SecurePolicy,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            activity_capacity: default_activity_capacity(),
            recent_limit: default_recent_limit(),
            activity_preview: default_activity_preview(),
            secure_policy: SecurePolicy::default(),
        }
    }
}

fn default_activity_capacity() -> usize {
    50
}

fn default_recent_limit() -> usize {
    20
}

fn default_activity_preview() -> usize {
    5
}
