//! Error types for authentication, token handling and input validation

use thiserror::Error;

use super::ErrorKind;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    EmailAlreadyRegistered,

    #[error("No token provided. Access denied.")]
    MissingToken,

    #[error("Access denied. Required role: {required}")]
    InsufficientRole { required: String },

    #[error("Only municipal workers can verify users")]
    ReviewerNotPermitted,
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::EmailAlreadyRegistered => ErrorKind::Conflict,
            AuthError::InsufficientRole { .. } | AuthError::ReviewerNotPermitted => {
                ErrorKind::Forbidden
            }
        }
    }
}

/// Token-related errors
///
/// All variants surface to clients as a single authentication failure;
/// the distinction exists for logging.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Value out of range for field: {field}")]
    OutOfRange { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid role: {value}")]
    InvalidRole { value: String },

    #[error("Invalid status: {value}")]
    InvalidStatus { value: String },

    #[error("No valid fields to update")]
    NoUpdatableFields,
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
        }
    }
}
