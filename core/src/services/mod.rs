//! Business services containing domain logic and use cases.

pub mod auth;
pub mod funding;
pub mod job;
pub mod profile;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, PasswordHasher, ProfileUpdate, RegisterUser};
pub use funding::FundingService;
pub use job::JobService;
pub use profile::{ProfileService, Saved};
pub use token::{TokenService, TokenServiceConfig};
