//! Applications submitted by users against job postings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(ValidationError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// An application to a job; at most one per (job, applicant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub job_id: Uuid,
    /// Applicant
    pub user_id: Uuid,
    pub cover_letter: Option<String>,
    pub proposal: Option<String>,
    pub proposed_budget: Option<f64>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewJobApplication {
    pub cover_letter: Option<String>,
    pub proposal: Option<String>,
    pub proposed_budget: Option<f64>,
}

impl JobApplication {
    pub fn new(job_id: Uuid, applicant: Uuid, input: NewJobApplication) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            job_id,
            user_id: applicant,
            cover_letter: input.cover_letter,
            proposal: input.proposal,
            proposed_budget: input.proposed_budget,
            status: ApplicationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Application joined with the applicant, as seen by the job owner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantView {
    #[serde(flatten)]
    pub application: JobApplication,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_verified: bool,
}

/// Application joined with its job, as seen by the applicant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserApplicationView {
    #[serde(flatten)]
    pub application: JobApplication,
    pub job_title: String,
    pub job_category: Option<String>,
}
