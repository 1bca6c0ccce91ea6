//! Credential lifecycle service: signup, login, and account updates.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use ct_shared::utils::validation::{is_valid_email, is_valid_password, MIN_PASSWORD_LENGTH};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// bcrypt work factor for password hashing
const BCRYPT_COST: u32 = 10;

/// Service for account registration and authentication.
///
/// Generic over the user repository so tests can run against the
/// in-memory mock without a database.
pub struct AuthService<U: UserRepository> {
    users: U,
    tokens: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new auth service
    pub fn new(users: U, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// * `Ok(User)` - The created account
    /// * `Err(DomainError::Validation)` - Malformed email or password
    /// * `Err(AuthError::EmailAlreadyRegistered)` - Email already taken
    pub async fn signup(&self, email: &str, password: &str) -> Result<User, DomainError> {
        if !is_valid_email(email) {
            return Err(DomainError::validation("A valid email is required"));
        }
        if !is_valid_password(password) {
            return Err(DomainError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let hash =
            bcrypt::hash(password, BCRYPT_COST).map_err(|_| AuthError::HashingFailed)?;

        let user = self.users.create(User::new(email, hash)).await?;
        info!(user_id = %user.id, "account created");
        Ok(user)
    }

    /// Authenticates an account and issues a token pair.
    ///
    /// Fails with `AuthError::InvalidCredentials` for both an unknown email
    /// and a wrong password; callers cannot distinguish the two.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, DomainError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("login attempt for unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let verified = bcrypt::verify(password, &user.password_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;
        if !verified {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access = self.tokens.issue_access_token(user.id, &user.email)?;
        let refresh = self.tokens.issue_refresh_token(user.id, &user.email)?;
        info!(user_id = %user.id, "login successful");

        Ok(TokenPair::new(access, refresh))
    }

    /// Updates the email of an authenticated account.
    ///
    /// Re-checks uniqueness before writing; the store's unique index
    /// backstops the check under races.
    pub async fn update_email(&self, user_id: Uuid, new_email: &str) -> Result<User, DomainError> {
        if !is_valid_email(new_email) {
            return Err(DomainError::validation("A valid email is required"));
        }

        if let Some(existing) = self.users.find_by_email(new_email).await? {
            if existing.id != user_id {
                return Err(AuthError::EmailAlreadyRegistered.into());
            }
        }

        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.email = new_email.to_string();
        self.users.update(user).await
    }

    /// Updates the password of an authenticated account
    pub async fn update_password(
        &self,
        user_id: Uuid,
        new_password: &str,
    ) -> Result<(), DomainError> {
        if !is_valid_password(new_password) {
            return Err(DomainError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.password_hash =
            bcrypt::hash(new_password, BCRYPT_COST).map_err(|_| AuthError::HashingFailed)?;
        self.users.update(user).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;
    use ct_shared::config::JwtConfig;

    fn service() -> AuthService<MockUserRepository> {
        let tokens = Arc::new(TokenService::new(&JwtConfig::new("a-secret", "r-secret")));
        AuthService::new(MockUserRepository::new(), tokens)
    }

    #[tokio::test]
    async fn test_signup_succeeds_exactly_once_per_email() {
        let svc = service();

        svc.signup("student@campus.edu", "hunter2hunter2")
            .await
            .unwrap();

        let err = svc
            .signup("student@campus.edu", "anotherpassword")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::EmailAlreadyRegistered)
        ));
    }

    #[tokio::test]
    async fn test_signup_rejects_malformed_input() {
        let svc = service();

        assert!(matches!(
            svc.signup("not-an-email", "longenoughpw").await.unwrap_err(),
            DomainError::Validation { .. }
        ));
        assert!(matches!(
            svc.signup("ok@campus.edu", "short").await.unwrap_err(),
            DomainError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_login_verifies_stored_hash() {
        let svc = service();
        let user = svc.signup("student@campus.edu", "hunter2hunter2").await.unwrap();

        let pair = svc.login("student@campus.edu", "hunter2hunter2").await.unwrap();

        // The access token's claims decode to the identity that logged in
        let claims = svc.tokens.verify_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user.id);
        assert_eq!(claims.email, "student@campus.edu");

        let err = svc
            .login("student@campus.edu", "wrong-password")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_invalid_credentials() {
        let svc = service();
        let err = svc.login("ghost@campus.edu", "whatever123").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_update_email_rechecks_uniqueness() {
        let svc = service();
        let a = svc.signup("a@campus.edu", "passwordpassword").await.unwrap();
        svc.signup("b@campus.edu", "passwordpassword").await.unwrap();

        let err = svc.update_email(a.id, "b@campus.edu").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::EmailAlreadyRegistered)
        ));

        let updated = svc.update_email(a.id, "a2@campus.edu").await.unwrap();
        assert_eq!(updated.email, "a2@campus.edu");
    }

    #[tokio::test]
    async fn test_update_password_invalidates_old_one() {
        let svc = service();
        let user = svc.signup("a@campus.edu", "originalpassword").await.unwrap();

        svc.update_password(user.id, "replacementpassword")
            .await
            .unwrap();

        assert!(svc.login("a@campus.edu", "originalpassword").await.is_err());
        assert!(svc
            .login("a@campus.edu", "replacementpassword")
            .await
            .is_ok());
    }
}
