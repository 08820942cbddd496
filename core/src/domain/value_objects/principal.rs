//! The authenticated identity attached to a request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Claims, Role};
use crate::errors::TokenError;

/// Who is acting: the verified subject of a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl Principal {
    pub fn new(user_id: Uuid, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }
}

impl TryFrom<Claims> for Principal {
    type Error = TokenError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: claims.user_id()?,
            email: claims.email,
            role: claims.role,
        })
    }
}
