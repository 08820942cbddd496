//! Job service: posting, updating and applying to jobs

use std::sync::Arc;
use uuid::Uuid;

use kk_shared::validation::validators;

use crate::authz::{ensure_first_submission, ensure_owner};
use crate::domain::entities::{
    ApplicantView, Job, JobApplication, JobFilter, JobListing, JobUpdate, NewJob,
    NewJobApplication, UserApplicationView,
};
use crate::domain::value_objects::Principal;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{JobApplicationRepository, JobRepository};

pub struct JobService {
    jobs: Arc<dyn JobRepository>,
    applications: Arc<dyn JobApplicationRepository>,
}

impl JobService {
    pub fn new(
        jobs: Arc<dyn JobRepository>,
        applications: Arc<dyn JobApplicationRepository>,
    ) -> Self {
        Self { jobs, applications }
    }

    /// Post a job owned by `actor`. Role gating happens before this call.
    pub async fn create(&self, actor: &Principal, input: NewJob) -> DomainResult<JobListing> {
        if !validators::not_empty(&input.title) {
            return Err(ValidationError::required("title").into());
        }
        if !validators::not_empty(&input.description) {
            return Err(ValidationError::required("description").into());
        }
        validate_budget(input.budget)?;

        let job = self.jobs.create(Job::new(actor.user_id, input)).await?;
        tracing::info!(job_id = %job.id, owner = %actor.user_id, "job created");
        self.get(job.id).await
    }

    pub async fn list(&self, filter: &JobFilter) -> DomainResult<Vec<JobListing>> {
        self.jobs.list(filter).await
    }

    pub async fn get(&self, job_id: Uuid) -> DomainResult<JobListing> {
        self.jobs
            .find_listing(job_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job"))
    }

    /// Owner-only partial update
    pub async fn update(
        &self,
        actor: &Principal,
        job_id: Uuid,
        update: JobUpdate,
    ) -> DomainResult<JobListing> {
        if update.is_empty() {
            return Err(ValidationError::NoUpdatableFields.into());
        }
        if let Some(title) = &update.title {
            if !validators::not_empty(title) {
                return Err(ValidationError::required("title").into());
            }
        }
        if let Some(description) = &update.description {
            if !validators::not_empty(description) {
                return Err(ValidationError::required("description").into());
            }
        }
        validate_budget(update.budget)?;

        let mut job = ensure_owner(self.jobs.find_by_id(job_id).await?, actor.user_id)?;
        update.apply_to(&mut job);
        self.jobs.update(job).await?;
        self.get(job_id).await
    }

    /// Apply to a job, at most once per user
    ///
    /// # Errors
    ///
    /// * `NotFound` - the job does not exist
    /// * `Conflict` - the user already applied, by the pre-check or the store's unique index
    pub async fn apply(
        &self,
        actor: &Principal,
        job_id: Uuid,
        input: NewJobApplication,
    ) -> DomainResult<JobApplication> {
        validate_budget(input.proposed_budget)?;

        if self.jobs.find_by_id(job_id).await?.is_none() {
            return Err(DomainError::not_found("Job"));
        }

        let prior = self
            .applications
            .find_by_job_and_user(job_id, actor.user_id)
            .await?;
        ensure_first_submission(prior.as_ref())?;

        let application = self
            .applications
            .create(JobApplication::new(job_id, actor.user_id, input))
            .await?;
        tracing::info!(application_id = %application.id, %job_id, "job application submitted");
        Ok(application)
    }

    /// Applications to a job, visible to the job's owner only
    pub async fn applications_for_job(
        &self,
        actor: &Principal,
        job_id: Uuid,
    ) -> DomainResult<Vec<ApplicantView>> {
        let job = ensure_owner(self.jobs.find_by_id(job_id).await?, actor.user_id)?;
        self.applications.list_for_job(job.id).await
    }

    pub async fn applications_for_user(
        &self,
        actor: &Principal,
    ) -> DomainResult<Vec<UserApplicationView>> {
        self.applications.list_for_user(actor.user_id).await
    }
}

fn validate_budget(budget: Option<f64>) -> DomainResult<()> {
    match budget {
        Some(value) if !value.is_finite() || value < 0.0 => Err(ValidationError::OutOfRange {
            field: "budget".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}
