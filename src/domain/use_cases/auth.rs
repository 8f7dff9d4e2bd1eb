use once_cell::sync::Lazy;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::entities::user::{ChangePasswordRequest, CurrentUser, LoginResponse, LoginUser, User};
use crate::errors::{AppError, AuthError};
use crate::interfaces::repositories::user::UserRepository;
use crate::password::validate_new_password;
use crate::repositories::token::TokenServiceRepository;

/// Verified against when the email is unknown, so both rejections cost one argon2 run.
static DECOY_HASH: Lazy<Option<String>> = Lazy::new(|| hash_password("decoy-password").ok());

fn verify_decoy(password: &str) {
    match DECOY_HASH.as_deref() {
        Some(hash) => {
            let _ = verify_password(password, hash);
        }
        None => tracing::error!("Decoy password hash unavailable"),
    }
}

/// Development shortcut: a fixed bearer token resolving to one account by email.
#[derive(Debug, Clone)]
pub struct DevLogin {
    pub token: String,
    pub email: String,
}

pub struct AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub user_repo: R,
    pub token_service: T,
    pub dev_login: Option<DevLogin>,
}

impl<R, T> AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub fn new(user_repo: R, token_service: T) -> Self {
        AuthHandler {
            user_repo,
            token_service,
            dev_login: None,
        }
    }

    pub fn with_dev_login(mut self, dev_login: Option<DevLogin>) -> Self {
        self.dev_login = dev_login;
        self
    }

    /// Checks credentials and issues a token. Unknown email and wrong password are indistinguishable.
    pub async fn login(&self, request: LoginUser) -> Result<LoginResponse, AuthError> {
        request.validate()?;

        let (Some(email), Some(password)) = (request.email, request.password) else {
            return Err(AuthError::MissingCredentials);
        };

        let user = self.user_repo.get_user_by_email(&email)
            .await
            .map_err(|e| {
                tracing::error!("User lookup failed during login: {}", e);
                AuthError::Storage
            })?;

        let Some(user) = user else {
            verify_decoy(&password);
            tracing::warn!("Login rejected: unknown email");
            return Err(AuthError::WrongCredentials);
        };

        let is_password_valid = verify_password(&password, &user.password_hash)
            .map_err(|e| {
                tracing::error!("Stored hash for user {} is unusable: {}", user.id, e);
                AuthError::WrongCredentials
            })?;
        if !is_password_valid {
            tracing::warn!("Login rejected: wrong password for user {}", user.id);
            return Err(AuthError::WrongCredentials);
        }

        let token = self.token_service.create_jwt(user.id)?;

        tracing::info!("User {} logged in", user.id);
        Ok(LoginResponse {
            token,
            user: CurrentUser::from(user),
        })
    }

    /// Resolves a bearer token into an identity. Any failure leaves the caller anonymous.
    pub async fn authenticate(&self, token: Option<&str>) -> Option<CurrentUser> {
        let token = token?;

        let user = match &self.dev_login {
            Some(dev) if dev.token == token => self.dev_user(&dev.email).await,
            _ => self.token_user(token).await,
        };

        user.map(CurrentUser::from)
    }

    async fn dev_user(&self, email: &str) -> Option<User> {
        match self.user_repo.get_user_by_email(email).await {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                tracing::warn!("Development token used but account {} does not exist", email);
                None
            }
            Err(e) => {
                tracing::warn!("Development token lookup failed: {}", e);
                None
            }
        }
    }

    async fn token_user(&self, token: &str) -> Option<User> {
        let claims = match self.token_service.decode_jwt(token) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!("Ignoring bearer token: {}", e);
                return None;
            }
        };

        let Some(user_id) = claims.user_id() else {
            tracing::debug!("Ignoring bearer token with malformed subject");
            return None;
        };

        match self.user_repo.get_user_by_id(user_id).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("User lookup for bearer token failed: {}", e);
                None
            }
        }
    }

    /// Replaces the password of `user_id` after checking the current one.
    pub async fn change_password(&self, user_id: i64, request: ChangePasswordRequest) -> Result<(), AppError> {
        let missing = || AppError::BadRequest("Current password and new password are required".to_string());

        request.validate().map_err(|_| missing())?;
        let (Some(current), Some(new)) = (request.current_password, request.new_password) else {
            return Err(missing());
        };

        validate_new_password(&new)?;

        let user = self.user_repo.get_user_by_id(user_id)
            .await
            .map_err(|e| internal_password_failure(&e))?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let matches = verify_password(&current, &user.password_hash)
            .map_err(|e| internal_password_failure(&e))?;
        if !matches {
            tracing::warn!("Password change rejected for user {}: current password mismatch", user.id);
            return Err(AppError::Unauthorized("Current password is incorrect".to_string()));
        }

        let new_hash = hash_password(&new).map_err(|e| internal_password_failure(&e))?;

        let updated = self.user_repo.update_password(user.id, &new_hash)
            .await
            .map_err(|e| internal_password_failure(&e))?;
        if !updated {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Password changed for user {}", user.id);
        Ok(())
    }
}

fn internal_password_failure(e: &dyn std::fmt::Display) -> AppError {
    tracing::error!("Password change failed: {}", e);
    AppError::InternalError("Failed to change password".to_string())
}
