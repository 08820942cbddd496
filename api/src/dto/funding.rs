use kk_core::domain::entities::{FundingReview, FundingStatus, NewFundingApplication};
use kk_core::errors::ValidationError;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FundingApplicationRequest {
    #[validate(length(min = 1, max = 255, message = "Business name, amount, and purpose are required"))]
    pub business_name: String,
    #[validate(required(message = "Business name, amount, and purpose are required"))]
    pub amount: Option<f64>,
    #[validate(length(min = 1, message = "Business name, amount, and purpose are required"))]
    pub purpose: String,
    pub business_plan: Option<String>,
    pub financial_statements: Option<String>,
}

impl From<FundingApplicationRequest> for NewFundingApplication {
    /// A missing amount becomes zero, which the service rejects as out of range
    fn from(request: FundingApplicationRequest) -> Self {
        NewFundingApplication {
            business_name: request.business_name,
            amount: request.amount.unwrap_or_default(),
            purpose: request.purpose,
            business_plan: request.business_plan,
            financial_statements: request.financial_statements,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FundingQuery {
    pub status: Option<String>,
}

impl FundingQuery {
    pub fn into_status(self) -> Result<Option<FundingStatus>, ValidationError> {
        self.status
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<FundingStatus>())
            .transpose()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReviewFundingRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    pub review_notes: Option<String>,
}

impl ReviewFundingRequest {
    /// Only `approved`, `rejected` and `under_review` are review outcomes;
    /// `pending` parses here and is refused by the service
    pub fn into_review(self) -> Result<FundingReview, ValidationError> {
        Ok(FundingReview {
            status: self.status.parse::<FundingStatus>()?,
            notes: self.review_notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_amount_fails_validation() {
        let request: FundingApplicationRequest =
            serde_json::from_str(r#"{"business_name": "Spaza", "purpose": "Stock"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("amount"));
    }

    #[test]
    fn test_review_parses_outcome() {
        let request = ReviewFundingRequest {
            status: "under_review".into(),
            review_notes: Some("Need bank statements".into()),
        };
        let review = request.into_review().unwrap();
        assert_eq!(review.status, FundingStatus::UnderReview);
        assert_eq!(review.notes.as_deref(), Some("Need bank statements"));
    }

    #[test]
    fn test_review_rejects_unknown_status() {
        let request = ReviewFundingRequest {
            status: "maybe".into(),
            review_notes: None,
        };
        assert!(request.into_review().is_err());
    }
}
