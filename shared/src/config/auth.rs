//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// Default token lifetime (7 days)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Longest accepted token lifetime (10 years)
pub const MAX_TOKEN_EXPIRY_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// JWT configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used to sign and verify tokens
    pub secret: String,

    /// Token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// JWT audience claim
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            token_expiry: default_token_expiry(),
            issuer: default_issuer(),
            audience: default_audience(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in seconds
    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.token_expiry = seconds;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let token_expiry = std::env::var("JWT_EXPIRES_IN")
            .ok()
            .and_then(|value| parse_duration_seconds(&value))
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECONDS);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_bcrypt_cost);

        Self {
            jwt: JwtConfig {
                secret,
                token_expiry,
                ..Default::default()
            },
            bcrypt_cost,
        }
    }
}

/// Parse a lifetime such as `604800`, `7d`, `12h`, `30m` or `45s` into seconds
pub fn parse_duration_seconds(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let (number, multiplier) = match value.chars().last()? {
        'd' => (&value[..value.len() - 1], 86_400),
        'h' => (&value[..value.len() - 1], 3_600),
        'm' => (&value[..value.len() - 1], 60),
        's' => (&value[..value.len() - 1], 1),
        _ => (value, 1),
    };

    number
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .and_then(|n| n.checked_mul(multiplier))
}

fn default_token_expiry() -> i64 {
    DEFAULT_TOKEN_EXPIRY_SECONDS
}

fn default_issuer() -> String {
    String::from("kasi-konnect")
}

fn default_audience() -> String {
    String::from("kasi-konnect-api")
}

fn default_bcrypt_cost() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.token_expiry, 604800);
        assert_eq!(config.issuer, "kasi-konnect");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_expiry_seconds(3600);
        assert_eq!(config.token_expiry, 3600);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_parse_duration_seconds() {
        assert_eq!(parse_duration_seconds("7d"), Some(604800));
        assert_eq!(parse_duration_seconds("12h"), Some(43200));
        assert_eq!(parse_duration_seconds("30m"), Some(1800));
        assert_eq!(parse_duration_seconds("45s"), Some(45));
        assert_eq!(parse_duration_seconds("900"), Some(900));
        assert_eq!(parse_duration_seconds("0"), None);
        assert_eq!(parse_duration_seconds("soon"), None);
        assert_eq!(parse_duration_seconds(""), None);
    }

    #[test]
    fn test_parse_duration_seconds_overflow() {
        assert_eq!(parse_duration_seconds("9223372036854775807d"), None);
        assert_eq!(parse_duration_seconds("153722867280912931m"), None);
        assert_eq!(
            parse_duration_seconds("9223372036854775807"),
            Some(i64::MAX)
        );
    }
}
