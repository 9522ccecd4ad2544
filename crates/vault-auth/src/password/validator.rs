//! Registration input checks.

use validator::ValidateEmail;

use vault_core::config::AuthConfig;
use vault_core::error::AppError;

/// Validates registration input against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length, in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Rejects passwords shorter than the configured minimum.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }

    /// Rejects malformed email addresses.
    pub fn validate_email(&self, email: &str) -> Result<(), AppError> {
        let email = email.trim().to_string();
        if !email.validate_email() {
            return Err(AppError::validation(format!(
                "Invalid email address: '{email}'"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_min_length() {
        assert!(validator().validate("12345").is_err());
        assert!(validator().validate("123456").is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(validator().validate_email("a@x.com").is_ok());
        assert!(validator().validate_email(" Bob@Example.org ").is_ok());
        assert!(validator().validate_email("not-an-email").is_err());
        assert!(validator().validate_email("").is_err());
    }
}
