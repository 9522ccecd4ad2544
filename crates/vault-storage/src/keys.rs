//! Key builders for every document the vault persists.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// The set of keys the vault reads and writes, with an optional prefix.
#[derive(Debug, Clone, Default)]
pub struct VaultKeys {
    prefix: String,
}

impl VaultKeys {
    /// Create key builders with the given prefix (may be empty).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Key for the file record collection.
    pub fn files(&self) -> String {
        format!("{}vault_files", self.prefix)
    }

    /// Key for the activity record collection.
    pub fn activities(&self) -> String {
        format!("{}vault_activities", self.prefix)
    }

    /// Key for the logged-in user.
    pub fn current_user(&self) -> String {
        format!("{}vault_user", self.prefix)
    }

    /// Key for the registered credential list.
    pub fn users(&self) -> String {
        format!("{}vault_users", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = VaultKeys::default();
        assert_eq!(keys.files(), "vault_files");
        assert_eq!(keys.activities(), "vault_activities");
        assert_eq!(keys.current_user(), "vault_user");
        assert_eq!(keys.users(), "vault_users");
    }

    #[test]
    fn test_prefixed_keys() {
        let keys = VaultKeys::new("demo_");
        assert_eq!(keys.files(), "demo_vault_files");
    }
}
