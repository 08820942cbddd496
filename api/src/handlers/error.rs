//! Mapping from domain failures to HTTP responses.
//!
//! Every error body is a [`kk_shared::ErrorResponse`]. Internal failures are
//! logged in full and reported with a generic message; the underlying detail
//! is attached under `details.debug` only when enabled at startup.

use std::collections::HashMap;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use kk_core::errors::{AuthError, DomainError, ErrorKind};
use kk_shared::{error_codes, ErrorResponse};
use once_cell::sync::OnceCell;
use validator::ValidationErrors;

static EXPOSE_INTERNAL_DETAILS: OnceCell<bool> = OnceCell::new();

/// Enables `details.debug` on internal error bodies. Only the first call takes effect.
pub fn expose_internal_details(enabled: bool) {
    let _ = EXPOSE_INTERNAL_DETAILS.set(enabled);
}

fn internal_details_exposed() -> bool {
    EXPOSE_INTERNAL_DETAILS.get().copied().unwrap_or(false)
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";
const TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Error type returned by handlers and middleware
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body failed `validator` rules
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationErrors),

    /// Body, query or path could not be parsed
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(error) => domain_body(error),
            ApiError::Validation(errors) => {
                let fields: HashMap<String, serde_json::Value> = errors
                    .field_errors()
                    .into_iter()
                    .map(|(field, errs)| {
                        let messages: Vec<String> = errs
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            })
                            .collect();
                        (field.to_string(), serde_json::json!(messages))
                    })
                    .collect();
                let message = first_message(&fields).unwrap_or_else(|| "Invalid request".to_string());
                ErrorResponse::with_details(error_codes::VALIDATION_ERROR, message, fields)
            }
            ApiError::BadRequest(message) => ErrorResponse::new(error_codes::BAD_REQUEST, message),
            ApiError::NotFound(message) => ErrorResponse::new(error_codes::NOT_FOUND, message),
        }
    }
}

/// First message of the alphabetically first field, for a stable summary
fn first_message(fields: &HashMap<String, serde_json::Value>) -> Option<String> {
    let mut names: Vec<&String> = fields.keys().collect();
    names.sort();
    names
        .first()
        .and_then(|name| fields[*name].get(0))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

fn domain_body(error: &DomainError) -> ErrorResponse {
    match error.kind() {
        ErrorKind::Validation => ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string()),
        ErrorKind::NotFound => ErrorResponse::new(error_codes::NOT_FOUND, error.to_string()),
        ErrorKind::Forbidden => ErrorResponse::new(error_codes::FORBIDDEN, error.to_string()),
        ErrorKind::Conflict => ErrorResponse::new(error_codes::CONFLICT, error.to_string()),
        ErrorKind::Unauthorized => match error {
            DomainError::Auth(AuthError::MissingToken) => {
                ErrorResponse::new(error_codes::MISSING_TOKEN, error.to_string())
            }
            DomainError::Token(_) => ErrorResponse::new(error_codes::TOKEN_INVALID, TOKEN_MESSAGE),
            _ => ErrorResponse::new(error_codes::UNAUTHORIZED, error.to_string()),
        },
        ErrorKind::Internal => {
            let response = ErrorResponse::new(error_codes::INTERNAL_ERROR, INTERNAL_MESSAGE);
            if internal_details_exposed() {
                response.add_detail("debug", error.to_string())
            } else {
                response
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => match error.kind() {
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
                ErrorKind::Forbidden => StatusCode::FORBIDDEN,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Conflict => StatusCode::CONFLICT,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {:?}", self);
        } else {
            log::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        HttpResponse::build(status).json(self.body())
    }
}

/// Handler result alias
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use kk_core::errors::{TokenError, ValidationError};

    async fn body_of(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_kinds_map_to_statuses() {
        let cases: Vec<(DomainError, StatusCode)> = vec![
            (DomainError::not_found("Job"), StatusCode::NOT_FOUND),
            (DomainError::forbidden("You do not own this job"), StatusCode::FORBIDDEN),
            (AuthError::MissingToken.into(), StatusCode::UNAUTHORIZED),
            (DomainError::conflict("dup"), StatusCode::CONFLICT),
            (ValidationError::NoUpdatableFields.into(), StatusCode::BAD_REQUEST),
            (DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status_code(), expected);
        }
    }

    #[actix_web::test]
    async fn test_token_failures_share_one_message() {
        let (status, expired) = body_of(DomainError::from(TokenError::TokenExpired).into()).await;
        let (_, bad_sig) = body_of(DomainError::from(TokenError::InvalidSignature).into()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(expired["error"], "TOKEN_INVALID");
        assert_eq!(expired["message"], bad_sig["message"]);
    }

    #[actix_web::test]
    async fn test_internal_message_is_generic() {
        let (status, body) = body_of(DomainError::internal("pool exhausted").into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert_eq!(body["message"], INTERNAL_MESSAGE);
    }

    #[actix_web::test]
    async fn test_not_found_names_the_resource() {
        let (_, body) = body_of(DomainError::not_found("Job").into()).await;
        assert_eq!(body["message"], "Job not found");
    }
}
