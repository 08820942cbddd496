//! Job postings created by clients and municipal workers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ValidationError;

use super::user::Role;

/// Engagement type of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    #[default]
    Gig,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Gig => "gig",
        }
    }
}

impl FromStr for JobType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "gig" => Ok(JobType::Gig),
            _ => Err(ValidationError::InvalidFormat {
                field: "job_type".to_string(),
            }),
        }
    }
}

/// Lifecycle status of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
    InProgress,
    Completed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
        }
    }
}

impl FromStr for JobStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(JobStatus::Open),
            "closed" => Ok(JobStatus::Closed),
            "in_progress" => Ok(JobStatus::InProgress),
            "completed" => Ok(JobStatus::Completed),
            _ => Err(ValidationError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// A job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    /// Owner of the posting
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub job_type: JobType,
    pub status: JobStatus,
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when posting a job
#[derive(Debug, Clone, Default)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub deadline: Option<NaiveDate>,
}

impl Job {
    /// Creates an open job owned by `owner`
    pub fn new(owner: Uuid, input: NewJob) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: owner,
            title: input.title,
            description: input.description,
            category: input.category,
            budget: input.budget,
            location: input.location,
            job_type: input.job_type.unwrap_or_default(),
            status: JobStatus::Open,
            deadline: input.deadline,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a job; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
    pub deadline: Option<NaiveDate>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self == &JobUpdate::default()
    }

    pub fn apply_to(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if self.category.is_some() {
            job.category = self.category;
        }
        if self.budget.is_some() {
            job.budget = self.budget;
        }
        if self.location.is_some() {
            job.location = self.location;
        }
        if let Some(job_type) = self.job_type {
            job.job_type = job_type;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if self.deadline.is_some() {
            job.deadline = self.deadline;
        }
        job.updated_at = Utc::now();
    }
}

/// Listing filters; all optional
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub category: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        self.status.map_or(true, |status| job.status == status)
            && self
                .category
                .as_deref()
                .map_or(true, |category| job.category.as_deref() == Some(category))
    }
}

/// Job joined with its poster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobListing {
    #[serde(flatten)]
    pub job: Job,
    pub poster_name: String,
    pub poster_role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> Job {
        Job::new(
            Uuid::new_v4(),
            NewJob {
                title: "Paint spaza shop".to_string(),
                description: "Exterior walls".to_string(),
                category: Some("painting".to_string()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_new_job_defaults() {
        let job = job();
        assert_eq!(job.status, JobStatus::Open);
        assert_eq!(job.job_type, JobType::Gig);
    }

    #[test]
    fn test_empty_update() {
        assert!(JobUpdate::default().is_empty());
        let update = JobUpdate {
            budget: Some(1500.0),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_apply_update_only_touches_given_fields() {
        let mut job = job();
        JobUpdate {
            status: Some(JobStatus::InProgress),
            ..Default::default()
        }
        .apply_to(&mut job);

        assert_eq!(job.status, JobStatus::InProgress);
        assert_eq!(job.title, "Paint spaza shop");
        assert_eq!(job.category.as_deref(), Some("painting"));
    }

    #[test]
    fn test_filter() {
        let job = job();
        assert!(JobFilter::default().matches(&job));
        assert!(JobFilter {
            status: Some(JobStatus::Open),
            category: Some("painting".to_string()),
        }
        .matches(&job));
        assert!(!JobFilter {
            status: Some(JobStatus::Closed),
            category: None,
        }
        .matches(&job));
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_value(JobType::FullTime).unwrap(), "full-time");
        assert_eq!(serde_json::to_value(JobStatus::InProgress).unwrap(), "in_progress");
        assert_eq!("in_progress".parse::<JobStatus>().unwrap(), JobStatus::InProgress);
        assert!("archived".parse::<JobStatus>().is_err());
    }
}
