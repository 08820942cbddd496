//! bcrypt-backed [`PasswordHasher`].

use bcrypt::{hash, verify, DEFAULT_COST};

use kk_core::services::PasswordHasher;
use kk_core::DomainError;

/// Salted bcrypt hashing with a configurable work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Lowest and highest work factors bcrypt accepts
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;

    /// Clamps `cost` into the range bcrypt accepts
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(Self::MIN_COST, Self::MAX_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        hash(password, self.cost).map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            DomainError::internal("Failed to hash password")
        })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        verify(password, hash).map_err(|e| {
            tracing::warn!("Stored password hash is unreadable: {}", e);
            DomainError::internal("Failed to verify password")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(BcryptPasswordHasher::MIN_COST)
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = hasher();
        let hashed = hasher.hash("s3cret-pass").unwrap();

        assert_ne!(hashed, "s3cret-pass");
        assert!(hasher.verify("s3cret-pass", &hashed).unwrap());
        assert!(!hasher.verify("wrong-pass", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = hasher();
        let first = hasher.hash("same").unwrap();
        let second = hasher.hash("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_unreadable_hash_is_an_error() {
        assert!(hasher().verify("anything", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn test_cost_is_clamped() {
        assert_eq!(BcryptPasswordHasher::new(1).cost(), 4);
        assert_eq!(BcryptPasswordHasher::new(99).cost(), 31);
        assert_eq!(BcryptPasswordHasher::default().cost(), DEFAULT_COST);
    }
}
