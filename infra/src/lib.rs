//! # Infrastructure Layer
//!
//! Concrete adapters for the Kasi Konnect core:
//! - **Database**: MySQL repositories using SQLx, plus pool management and
//!   schema bootstrap
//! - **Security**: bcrypt password hashing

pub mod database;
pub mod security;

pub use database::{
    connection::{DatabasePool, PoolStatistics},
    mysql::{
        MySqlBusinessRepository, MySqlFreelancerRepository, MySqlFundingRepository,
        MySqlJobApplicationRepository, MySqlJobRepository, MySqlUserRepository,
    },
    schema::ensure_schema,
};
pub use security::BcryptPasswordHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
