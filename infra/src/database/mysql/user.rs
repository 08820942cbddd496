//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use kk_core::domain::entities::User;
use kk_core::errors::{AuthError, DomainError};
use kk_core::repositories::UserRepository;

use crate::database::error::{
    column, enum_column, is_unique_violation, optional_uuid_column, query_failed, uuid_column,
};

const USER_COLUMNS: &str = "id, email, password, name, role, verified, verified_by, verified_at, created_at, updated_at";

/// MySQL implementation of UserRepository
///
/// Email lookups rely on the column's case-insensitive collation.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    pub(crate) fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: uuid_column(row, "id")?,
            email: column(row, "email")?,
            name: column(row, "name")?,
            role: enum_column(row, "role")?,
            password_hash: column(row, "password")?,
            verified: column(row, "verified")?,
            verified_by: optional_uuid_column(row, "verified_by")?,
            verified_at: column(row, "verified_at")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    async fn fetch_one_where(&self, predicate: &str, value: String) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE {} = ? LIMIT 1", USER_COLUMNS, predicate);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.fetch_one_where("id", id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.fetch_one_where("email", email.to_string()).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, password, name, role, verified,
                verified_by, verified_at, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.name)
            .bind(user.role.as_str())
            .bind(user.verified)
            .bind(user.verified_by.map(|id| id.to_string()))
            .bind(user.verified_at)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AuthError::EmailAlreadyRegistered.into()
                } else {
                    query_failed(e)
                }
            })?;

        tracing::debug!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                name = ?,
                role = ?,
                verified = ?,
                verified_by = ?,
                verified_at = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.name)
            .bind(user.role.as_str())
            .bind(user.verified)
            .bind(user.verified_by.map(|id| id.to_string()))
            .bind(user.verified_at)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        // MySQL reports zero affected rows for no-op updates too
        if result.rows_affected() == 0 && self.find_by_id(user.id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }

        Ok(user)
    }
}
