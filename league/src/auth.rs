use async_trait::async_trait;
use shared::{AuthCredentials, PasswordResetRequest, User};

use crate::error::Result;

/// Hosted authentication service
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, credentials: &AuthCredentials) -> Result<User>;

    async fn sign_in(&self, credentials: &AuthCredentials) -> Result<User>;

    async fn sign_out(&self, user: &User) -> Result<()>;

    /// Sends a password reset email
    async fn reset_password(&self, request: &PasswordResetRequest) -> Result<()>;
}
