use shared::{AuthCredentials, Group, Member, PasswordResetRequest, User};
use validator::Validate;

use crate::auth::AuthProvider;
use crate::error::{LeagueError, Result};

/// The signed-in user, if any. Passed explicitly to whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The signed-in user's seat in a group
    pub fn membership<'a>(&self, group: &'a Group) -> Option<&'a Member> {
        let user_id = self.user.as_ref()?.id.to_string();
        group
            .members
            .iter()
            .find(|m| m.user_id.as_deref() == Some(user_id.as_str()))
    }

    pub async fn sign_up<P: AuthProvider + ?Sized>(
        &mut self,
        provider: &P,
        credentials: &AuthCredentials,
    ) -> Result<&User> {
        credentials.validate_fields()?;
        if credentials.name.is_none() {
            return Err(shared::SharedError::MissingField("name".to_string()).into());
        }
        let user = provider.sign_up(credentials).await?;
        log::info!("Signed up {}", user.email);
        Ok(&*self.user.insert(user))
    }

    pub async fn sign_in<P: AuthProvider + ?Sized>(
        &mut self,
        provider: &P,
        credentials: &AuthCredentials,
    ) -> Result<&User> {
        credentials.validate_fields()?;
        let user = provider.sign_in(credentials).await.map_err(|e| {
            log::warn!("Sign-in failed for {}: {}", credentials.email, e);
            e
        })?;
        log::info!("Signed in {}", user.email);
        Ok(&*self.user.insert(user))
    }

    /// Ends the session; the local user is kept if the provider call fails
    pub async fn sign_out<P: AuthProvider + ?Sized>(&mut self, provider: &P) -> Result<()> {
        let user = self.user.as_ref().ok_or(LeagueError::NotSignedIn)?;
        provider.sign_out(user).await?;
        log::info!("Signed out {}", user.email);
        self.user = None;
        Ok(())
    }

    pub async fn reset_password<P: AuthProvider + ?Sized>(provider: &P, email: &str) -> Result<()> {
        let request = PasswordResetRequest {
            email: email.to_string(),
        };
        request.validate()?;
        provider.reset_password(&request).await
    }
}
