//! Municipal funding applications submitted by business owners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    UnderReview,
}

impl FundingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundingStatus::Pending => "pending",
            FundingStatus::Approved => "approved",
            FundingStatus::Rejected => "rejected",
            FundingStatus::UnderReview => "under_review",
        }
    }

    /// Statuses a reviewer may set; `pending` is only ever the initial state
    pub fn is_review_outcome(&self) -> bool {
        !matches!(self, FundingStatus::Pending)
    }
}

impl FromStr for FundingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FundingStatus::Pending),
            "approved" => Ok(FundingStatus::Approved),
            "rejected" => Ok(FundingStatus::Rejected),
            "under_review" => Ok(FundingStatus::UnderReview),
            _ => Err(ValidationError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingApplication {
    pub id: Uuid,
    /// Applicant (business owner)
    pub user_id: Uuid,
    pub business_name: String,
    pub amount: f64,
    pub purpose: String,
    pub business_plan: Option<String>,
    pub financial_statements: Option<String>,
    pub status: FundingStatus,
    pub reviewed_by: Option<Uuid>,
    pub review_notes: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewFundingApplication {
    pub business_name: String,
    pub amount: f64,
    pub purpose: String,
    pub business_plan: Option<String>,
    pub financial_statements: Option<String>,
}

/// A reviewer's decision
#[derive(Debug, Clone)]
pub struct FundingReview {
    pub status: FundingStatus,
    pub notes: Option<String>,
}

impl FundingApplication {
    pub fn new(applicant: Uuid, input: NewFundingApplication) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: applicant,
            business_name: input.business_name,
            amount: input.amount,
            purpose: input.purpose,
            business_plan: input.business_plan,
            financial_statements: input.financial_statements,
            status: FundingStatus::Pending,
            reviewed_by: None,
            review_notes: None,
            reviewed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn record_review(&mut self, reviewer: Uuid, review: FundingReview) {
        let now = Utc::now();
        self.status = review.status;
        self.review_notes = review.notes;
        self.reviewed_by = Some(reviewer);
        self.reviewed_at = Some(now);
        self.updated_at = now;
    }
}

/// Funding application joined with its applicant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingListing {
    #[serde(flatten)]
    pub application: FundingApplication,
    pub applicant_name: String,
    pub applicant_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_outcomes() {
        assert!(!FundingStatus::Pending.is_review_outcome());
        assert!(FundingStatus::Approved.is_review_outcome());
        assert!(FundingStatus::Rejected.is_review_outcome());
        assert!(FundingStatus::UnderReview.is_review_outcome());
    }

    #[test]
    fn test_record_review() {
        let mut application = FundingApplication::new(
            Uuid::new_v4(),
            NewFundingApplication {
                business_name: "Mama's Kitchen".to_string(),
                amount: 25_000.0,
                purpose: "Equipment".to_string(),
                ..Default::default()
            },
        );
        let reviewer = Uuid::new_v4();

        application.record_review(
            reviewer,
            FundingReview {
                status: FundingStatus::Approved,
                notes: Some("Strong plan".to_string()),
            },
        );

        assert_eq!(application.status, FundingStatus::Approved);
        assert_eq!(application.reviewed_by, Some(reviewer));
        assert!(application.reviewed_at.is_some());
    }
}
