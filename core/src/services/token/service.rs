//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use kk_shared::MAX_TOKEN_EXPIRY_SECONDS;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and verifies signed identity tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Returns
    ///
    /// `DomainError::Internal` when the secret is empty or the lifetime is outside
    /// `1..=MAX_TOKEN_EXPIRY_SECONDS`
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::internal("JWT secret must not be empty"));
        }
        if config.lifetime <= Duration::zero() {
            return Err(DomainError::internal("JWT lifetime must be positive"));
        }
        if config.lifetime > Duration::seconds(MAX_TOKEN_EXPIRY_SECONDS) {
            return Err(DomainError::internal("JWT lifetime is too long"));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a token for `user`, valid from now
    pub fn issue(&self, user: &User) -> Result<String, DomainError> {
        self.issue_at(user, Utc::now())
    }

    /// Issues a token for `user` as if the clock read `now`
    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> Result<String, DomainError> {
        let claims = Claims::for_user(
            user,
            now,
            self.config.lifetime,
            &self.config.issuer,
            &self.config.audience,
        )?;
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is tampered, expired, malformed, or issued for another audience
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let error = match e.kind() {
                    JwtErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    JwtErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
                    JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    JwtErrorKind::InvalidIssuer
                    | JwtErrorKind::InvalidAudience
                    | JwtErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
                    _ => TokenError::InvalidTokenFormat,
                };
                tracing::debug!(reason = %error, "token rejected");
                DomainError::Token(error)
            })?;

        // sub must be a user id
        token_data.claims.user_id()?;

        Ok(token_data.claims)
    }
}
