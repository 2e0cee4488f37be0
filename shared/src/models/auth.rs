use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Credentials submitted on sign-up or sign-in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthCredentials {
    /// User's email address
    #[validate(email)]
    pub email: String,

    /// User's password
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// Nickname, only used on sign-up
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
}

impl AuthCredentials {
    pub fn sign_in(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            name: None,
        }
    }

    pub fn sign_up(email: &str, password: &str, name: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            name: Some(name.to_string()),
        }
    }

    /// Validates the credentials
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }
}

/// Request for a password reset email
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email)]
    pub email: String,
}

/// Authenticated account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// User's email address
    pub email: String,

    /// Profile nickname
    pub nickname: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_validation() {
        assert!(AuthCredentials::sign_in("ana@example.com", "secret1")
            .validate_fields()
            .is_ok());
        assert!(AuthCredentials::sign_in("not-an-email", "secret1")
            .validate_fields()
            .is_err());
        assert!(AuthCredentials::sign_in("ana@example.com", "123")
            .validate_fields()
            .is_err());
        assert!(AuthCredentials::sign_up("ana@example.com", "secret1", "")
            .validate_fields()
            .is_err());
    }
}
