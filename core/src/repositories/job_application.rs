//! Job application persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{ApplicantView, JobApplication, UserApplicationView};
use crate::errors::DomainError;

#[async_trait]
pub trait JobApplicationRepository: Send + Sync {
    /// Prior application by `user_id` to `job_id`, if any
    async fn find_by_job_and_user(
        &self,
        job_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<JobApplication>, DomainError>;

    /// Persist a new application
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - The user already applied to this job
    async fn create(&self, application: JobApplication) -> Result<JobApplication, DomainError>;

    /// Applications to a job with applicant details, newest first
    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<ApplicantView>, DomainError>;

    /// A user's applications with job details, newest first
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserApplicationView>, DomainError>;
}
