//! Authentication response value object for API responses.

use serde::Serialize;

use crate::domain::entities::User;

/// Result of a successful registration or login: the identity and a fresh token
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: User, token: String) -> Self {
        Self { user, token }
    }
}
