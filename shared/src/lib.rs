//! Shared utilities and common types for the Kasi Konnect server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response envelope and error codes
//! - Utility functions (email validation, etc.)
//! - Health check response types

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig, MAX_TOKEN_EXPIRY_SECONDS,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus};
pub use utils::validation;
