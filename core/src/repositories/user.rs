//! User repository trait defining the interface for identity persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations must enforce email uniqueness themselves (a unique index,
/// or an atomic check-and-insert) and report a duplicate as `Conflict`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict)` - Email already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Overwrite an existing user
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No user with this id
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
