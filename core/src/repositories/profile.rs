//! Business and freelancer profile persistence. Each user has at most one of each.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Business, BusinessListing, Freelancer, FreelancerListing};
use crate::errors::DomainError;

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Business>, DomainError>;

    /// # Returns
    /// * `Err(DomainError::Conflict)` - The user already has a business profile
    async fn create(&self, business: Business) -> Result<Business, DomainError>;

    async fn update(&self, business: Business) -> Result<Business, DomainError>;

    /// All profiles with owner details, newest first
    async fn list(&self) -> Result<Vec<BusinessListing>, DomainError>;
}

#[async_trait]
pub trait FreelancerRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Freelancer>, DomainError>;

    /// # Returns
    /// * `Err(DomainError::Conflict)` - The user already has a freelancer profile
    async fn create(&self, freelancer: Freelancer) -> Result<Freelancer, DomainError>;

    async fn update(&self, freelancer: Freelancer) -> Result<Freelancer, DomainError>;

    /// All profiles with owner details, newest first
    async fn list(&self) -> Result<Vec<FreelancerListing>, DomainError>;
}
