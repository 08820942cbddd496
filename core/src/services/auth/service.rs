//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use kk_shared::validation::validators;

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{AuthResponse, Principal};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::password::PasswordHasher;

/// Registration input
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Self-service profile changes; only the display name is editable
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
}

/// Authentication service for registration, login and identity management
pub struct AuthService {
    /// User repository for database operations
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    /// Token service for JWT management
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new, unverified user and issue a token for it
    ///
    /// # Errors
    ///
    /// * `ValidationErr` - malformed email, empty password or name
    /// * `Auth(EmailAlreadyRegistered)` - email taken, by the pre-check or the store's unique index
    pub async fn register(&self, input: RegisterUser) -> DomainResult<AuthResponse> {
        let email = input.email.trim().to_string();
        let name = input.name.trim().to_string();

        if !validators::is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if input.password.is_empty() {
            return Err(ValidationError::required("password").into());
        }
        if !validators::not_empty(&name) {
            return Err(ValidationError::required("name").into());
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.hash_password(input.password).await?;
        let user = self
            .users
            .create(User::new(email, name, input.role, password_hash))
            .await?;
        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = %user.id, role = %user.role, "user registered");
        Ok(AuthResponse::new(user, token))
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .users
            .find_by_email(email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?
        {
            tracing::debug!(user_id = %user.id, "password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user)?;
        Ok(AuthResponse::new(user, token))
    }

    // bcrypt is CPU-bound; keep it off the async workers
    async fn hash_password(&self, password: String) -> DomainResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("password hashing task failed: {e}")))?
    }

    async fn verify_password(&self, password: String, hash: String) -> DomainResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("password check task failed: {e}")))?
    }

    /// Current state of the caller's identity, read from the store
    pub async fn profile(&self, user_id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    pub async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> DomainResult<User> {
        let name = update
            .name
            .map(|n| n.trim().to_string())
            .ok_or(ValidationError::NoUpdatableFields)?;
        if name.is_empty() {
            return Err(ValidationError::required("name").into());
        }

        let mut user = self.profile(user_id).await?;
        user.rename(name);
        self.users.update(user).await
    }

    /// Mark `target` as verified by `reviewer`
    ///
    /// The reviewer is re-read from the store so `verified_by` always points at
    /// an existing municipal worker, whatever the token claims.
    pub async fn verify_user(&self, reviewer: &Principal, target: Uuid) -> DomainResult<User> {
        let reviewer_record = self.users.find_by_id(reviewer.user_id).await?;
        if !reviewer_record.map_or(false, |r| r.is_municipal_worker()) {
            return Err(AuthError::ReviewerNotPermitted.into());
        }

        let mut user = self
            .users
            .find_by_id(target)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.verify(reviewer.user_id);
        let user = self.users.update(user).await?;

        tracing::info!(user_id = %user.id, reviewer = %reviewer.user_id, "user verified");
        Ok(user)
    }
}
