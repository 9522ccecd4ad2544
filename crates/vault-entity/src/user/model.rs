//! User and stored credential models.

use serde::{Deserialize, Serialize};

use vault_core::types::UserId;

use super::role::UserRole;

/// A registered vault user, without secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user identifier.
    pub id: UserId,
    /// Lowercased email address; the unique login key.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserRecord {
    /// Create a regular user with a normalized email.
    pub fn new(email: &str, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email: normalize_email(email),
            name: name.into(),
            role: UserRole::User,
            avatar: None,
        }
    }
}

/// A user together with their password hash, as kept by the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCredential {
    /// The user profile.
    #[serde(flatten)]
    pub user: UserRecord,
    /// Argon2id password hash.
    pub password_hash: String,
}

impl StoredCredential {
    /// Check whether this credential belongs to `email` (case-insensitive).
    pub fn matches_email(&self, email: &str) -> bool {
        self.user.email == normalize_email(email)
    }
}

/// Trim and lowercase an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_normalized() {
        let user = UserRecord::new("  Alice@Example.COM ", "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn test_credential_flattens_user() {
        let cred = StoredCredential {
            user: UserRecord::new("a@x.com", "A"),
            password_hash: "hash".to_string(),
        };
        let json = serde_json::to_value(&cred).expect("serialize");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["password_hash"], "hash");
        assert!(cred.matches_email("A@X.COM"));
    }
}
