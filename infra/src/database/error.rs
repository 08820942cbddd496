//! Translation of SQLx failures and raw column values into domain errors.

use std::str::FromStr;

use kk_core::DomainError;
use sqlx::mysql::{MySql, MySqlRow};
use sqlx::Row;
use uuid::Uuid;

/// Maps a SQLx error into a [`DomainError`]
///
/// A unique-index violation becomes `Conflict` carrying `conflict_message`;
/// everything else is `Internal` with `context` prefixed.
pub fn map_sqlx_error(error: sqlx::Error, context: &str, conflict_message: &str) -> DomainError {
    if is_unique_violation(&error) {
        tracing::debug!("{}: unique violation: {}", context, error);
        DomainError::conflict(conflict_message)
    } else {
        tracing::error!("{}: {}", context, error);
        DomainError::internal(format!("{}: {}", context, error))
    }
}

pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

/// Maps a SQLx error that cannot be a constraint violation
pub(crate) fn query_failed(error: sqlx::Error) -> DomainError {
    tracing::error!("Database query failed: {}", error);
    DomainError::internal(format!("Database query failed: {}", error))
}

/// Reads a column, reporting decode failures as `Internal`
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get::<T, _>(name)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", name, e)))
}

/// Reads a VARCHAR(36) id column
pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", name, e)))
}

pub(crate) fn optional_uuid_column(row: &MySqlRow, name: &str) -> Result<Option<Uuid>, DomainError> {
    let raw: Option<String> = column(row, name)?;
    raw.map(|s| {
        Uuid::parse_str(&s)
            .map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", name, e)))
    })
    .transpose()
}

/// Reads a string column holding one of the enum's textual values
pub(crate) fn enum_column<T: FromStr>(row: &MySqlRow, name: &str) -> Result<T, DomainError> {
    let raw: String = column(row, name)?;
    raw.parse()
        .map_err(|_| DomainError::internal(format!("Unexpected {} value: {}", name, raw)))
}
