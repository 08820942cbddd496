//! Funding service: submission by business owners, review by municipal workers

use std::sync::Arc;
use uuid::Uuid;

use kk_shared::validation::validators;

use crate::domain::entities::{
    FundingApplication, FundingListing, FundingReview, FundingStatus, NewFundingApplication,
};
use crate::domain::value_objects::Principal;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::FundingRepository;

pub struct FundingService {
    funding: Arc<dyn FundingRepository>,
}

impl FundingService {
    pub fn new(funding: Arc<dyn FundingRepository>) -> Self {
        Self { funding }
    }

    pub async fn apply(
        &self,
        actor: &Principal,
        input: NewFundingApplication,
    ) -> DomainResult<FundingListing> {
        if !validators::not_empty(&input.business_name) {
            return Err(ValidationError::required("business_name").into());
        }
        if !validators::not_empty(&input.purpose) {
            return Err(ValidationError::required("purpose").into());
        }
        if !input.amount.is_finite() || input.amount <= 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "amount".to_string(),
            }
            .into());
        }

        let application = self
            .funding
            .create(FundingApplication::new(actor.user_id, input))
            .await?;
        tracing::info!(application_id = %application.id, applicant = %actor.user_id, "funding application submitted");
        self.get(application.id).await
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<FundingListing> {
        self.funding
            .find_listing(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Funding application"))
    }

    pub async fn my_applications(&self, actor: &Principal) -> DomainResult<Vec<FundingApplication>> {
        self.funding.list_for_user(actor.user_id).await
    }

    pub async fn list(&self, status: Option<FundingStatus>) -> DomainResult<Vec<FundingListing>> {
        self.funding.list(status).await
    }

    /// Record a reviewer's decision. Role gating happens before this call.
    pub async fn review(
        &self,
        reviewer: &Principal,
        id: Uuid,
        review: FundingReview,
    ) -> DomainResult<FundingListing> {
        if !review.status.is_review_outcome() {
            return Err(ValidationError::InvalidStatus {
                value: review.status.as_str().to_string(),
            }
            .into());
        }

        let mut application = self
            .funding
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Funding application"))?;
        application.record_review(reviewer.user_id, review);
        self.funding.update(application).await?;

        tracing::info!(application_id = %id, reviewer = %reviewer.user_id, "funding application reviewed");
        self.get(id).await
    }
}
