use chrono::NaiveDate;
use kk_core::domain::entities::{
    JobFilter, JobStatus, JobType, JobUpdate, NewJob, NewJobApplication,
};
use kk_core::errors::ValidationError;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 255, message = "Title and description are required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Title and description are required"))]
    pub description: String,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    /// `YYYY-MM-DD`
    pub deadline: Option<NaiveDate>,
}

impl From<CreateJobRequest> for NewJob {
    fn from(request: CreateJobRequest) -> Self {
        NewJob {
            title: request.title,
            description: request.description,
            category: request.category,
            budget: request.budget,
            location: request.location,
            job_type: request.job_type,
            deadline: request.deadline,
        }
    }
}

/// Partial update; fields outside this set are ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
    pub deadline: Option<NaiveDate>,
}

impl From<UpdateJobRequest> for JobUpdate {
    fn from(request: UpdateJobRequest) -> Self {
        JobUpdate {
            title: request.title,
            description: request.description,
            category: request.category,
            budget: request.budget,
            location: request.location,
            job_type: request.job_type,
            status: request.status,
            deadline: request.deadline,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ApplyToJobRequest {
    pub cover_letter: Option<String>,
    pub proposal: Option<String>,
    #[validate(range(min = 0.0, message = "Proposed budget must not be negative"))]
    pub proposed_budget: Option<f64>,
}

impl From<ApplyToJobRequest> for NewJobApplication {
    fn from(request: ApplyToJobRequest) -> Self {
        NewJobApplication {
            cover_letter: request.cover_letter,
            proposal: request.proposal,
            proposed_budget: request.proposed_budget,
        }
    }
}

/// `GET /api/jobs` filters. Kept as raw strings so a bad status is a 400
/// with a domain message rather than a query parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobQuery {
    pub status: Option<String>,
    pub category: Option<String>,
}

impl JobQuery {
    pub fn into_filter(self) -> Result<JobFilter, ValidationError> {
        let status = self
            .status
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<JobStatus>())
            .transpose()?;

        Ok(JobFilter {
            status,
            category: self.category.filter(|c| !c.is_empty()),
        })
    }
}
