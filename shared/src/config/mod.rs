//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, MAX_TOKEN_EXPIRY_SECONDS};
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("RUST_LOG") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(environment),
            logging,
        }
    }

    /// Configuration problems that must stop the server from starting
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.jwt.secret.is_empty() {
            return Err("JWT secret must not be empty".to_string());
        }
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be set in production".to_string());
        }
        if self.auth.jwt.token_expiry <= 0 {
            return Err("JWT token expiry must be positive".to_string());
        }
        if self.auth.jwt.token_expiry > MAX_TOKEN_EXPIRY_SECONDS {
            return Err(format!(
                "JWT token expiry must not exceed {MAX_TOKEN_EXPIRY_SECONDS} seconds"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth.jwt.token_expiry, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_production_refuses_default_secret() {
        let config = AppConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let mut config = AppConfig::default();
        config.auth.jwt.secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_token_expiry_is_bounded() {
        let mut config = AppConfig::default();
        config.auth.jwt.token_expiry = MAX_TOKEN_EXPIRY_SECONDS;
        assert!(config.validate().is_ok());

        config.auth.jwt.token_expiry = MAX_TOKEN_EXPIRY_SECONDS + 1;
        assert!(config.validate().is_err());

        config.auth.jwt.token_expiry = i64::MAX;
        assert!(config.validate().is_err());
    }
}
