//! Claims carried inside signed identity tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

use super::user::{Role, User};

/// JWT issuer
pub const JWT_ISSUER: &str = "kasi-konnect";

/// JWT audience
pub const JWT_AUDIENCE: &str = "kasi-konnect-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    pub email: String,

    pub role: Role,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Builds claims for `user`, valid from `now` for `lifetime`
    ///
    /// Fails with `TokenGenerationFailed` when `now + lifetime` is not a representable instant
    pub fn for_user(
        user: &User,
        now: DateTime<Utc>,
        lifetime: Duration,
        issuer: &str,
        audience: &str,
    ) -> Result<Self, TokenError> {
        let expires_at = now
            .checked_add_signed(lifetime)
            .ok_or(TokenError::TokenGenerationFailed)?;

        Ok(Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
        })
    }

    /// Parses the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidClaims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(
            "zanele@example.co.za".to_string(),
            "Zanele".to_string(),
            Role::MunicipalWorker,
            "hash".to_string(),
        )
    }

    #[test]
    fn test_claims_for_user() {
        let user = user();
        let now = Utc::now();
        let claims =
            Claims::for_user(&user, now, Duration::days(7), JWT_ISSUER, JWT_AUDIENCE).unwrap();

        assert_eq!(claims.user_id().unwrap(), user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, Role::MunicipalWorker);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
        assert!(claims.exp > now.timestamp());
    }

    #[test]
    fn test_malformed_subject() {
        let mut claims = Claims::for_user(
            &user(),
            Utc::now(),
            Duration::hours(1),
            JWT_ISSUER,
            JWT_AUDIENCE,
        )
        .unwrap();
        claims.sub = "not-a-uuid".to_string();
        assert!(matches!(claims.user_id(), Err(TokenError::InvalidClaims)));
    }

    #[test]
    fn test_unrepresentable_expiry_fails() {
        let result = Claims::for_user(
            &user(),
            Utc::now(),
            Duration::days(365 * 300_000),
            JWT_ISSUER,
            JWT_AUDIENCE,
        );
        assert!(matches!(result, Err(TokenError::TokenGenerationFailed)));
    }
}
