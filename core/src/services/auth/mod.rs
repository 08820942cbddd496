//! Authentication service module
//!
//! Registration, login, profile access and municipal verification of users.

mod password;
mod service;


pub use password::PasswordHasher;
pub use service::{AuthService, ProfileUpdate, RegisterUser};
