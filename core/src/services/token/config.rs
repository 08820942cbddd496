//! Configuration for the token service

use chrono::Duration;
use kk_shared::{JwtConfig, MAX_TOKEN_EXPIRY_SECONDS};

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token lifetime
    pub lifetime: Duration,
    pub issuer: String,
    pub audience: String,
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            lifetime: Duration::days(7),
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            // clamped so `Duration::seconds` cannot panic; out-of-range values stay out of range
            lifetime: Duration::seconds(
                config.token_expiry.clamp(0, MAX_TOKEN_EXPIRY_SECONDS + 1),
            ),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }
}
