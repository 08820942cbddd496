//! Job posting persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Job, JobFilter, JobListing};
use crate::errors::DomainError;

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: Job) -> Result<Job, DomainError>;

    /// Raw job row, used for ownership checks
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError>;

    /// Job joined with its poster
    async fn find_listing(&self, id: Uuid) -> Result<Option<JobListing>, DomainError>;

    /// Jobs matching `filter`, newest first
    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobListing>, DomainError>;

    async fn update(&self, job: Job) -> Result<Job, DomainError>;
}
