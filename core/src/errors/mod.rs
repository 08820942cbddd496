//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

/// Client-visible error category, one per HTTP status family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Collapse the error into the category the transport layer maps to a status code
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::ValidationErr(_) => ErrorKind::Validation,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Token(TokenError::TokenGenerationFailed) => ErrorKind::Internal,
            DomainError::Token(_) => ErrorKind::Unauthorized,
            DomainError::Forbidden { .. } => ErrorKind::Forbidden,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(err) => err.kind(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
