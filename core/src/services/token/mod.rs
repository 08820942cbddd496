//! Token service module for JWT management
//!
//! Issues and verifies HS256-signed identity tokens. Tokens are stateless:
//! nothing is stored and nothing is revoked, so claims stay as issued until
//! they expire.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
