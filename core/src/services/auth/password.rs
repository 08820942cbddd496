//! Password hashing seam; the bcrypt implementation lives in the infrastructure crate.

use crate::errors::DomainError;

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
