//! Funding application persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{FundingApplication, FundingListing, FundingStatus};
use crate::errors::DomainError;

#[async_trait]
pub trait FundingRepository: Send + Sync {
    async fn create(
        &self,
        application: FundingApplication,
    ) -> Result<FundingApplication, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FundingApplication>, DomainError>;

    /// Application joined with its applicant
    async fn find_listing(&self, id: Uuid) -> Result<Option<FundingListing>, DomainError>;

    /// All applications, optionally filtered by status, newest first
    async fn list(&self, status: Option<FundingStatus>)
        -> Result<Vec<FundingListing>, DomainError>;

    /// Applications submitted by `user_id`, newest first
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<FundingApplication>, DomainError>;

    async fn update(
        &self,
        application: FundingApplication,
    ) -> Result<FundingApplication, DomainError>;
}
