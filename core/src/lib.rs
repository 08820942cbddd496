//! # Kasi Konnect Core
//!
//! Domain layer for the Kasi Konnect backend: entities, the error taxonomy,
//! the token service, the role policy and ownership guard, repository
//! interfaces with an in-memory implementation, and the business services.

pub mod authz;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use authz::{AccessPolicy, Operation, Owned};
pub use domain::entities::{Claims, Role, User};
pub use domain::value_objects::{AuthResponse, Principal};
pub use errors::{DomainError, DomainResult, ErrorKind};
pub use repositories::InMemoryStore;
pub use services::{
    AuthService, FundingService, JobService, PasswordHasher, ProfileService, TokenService,
    TokenServiceConfig,
};
