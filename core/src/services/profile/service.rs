//! Profile service: one business and one freelancer profile per user, create-or-update

use std::sync::Arc;

use kk_shared::validation::validators;

use crate::authz::ensure_owner;
use crate::domain::entities::{
    Business, BusinessListing, BusinessProfileInput, Freelancer, FreelancerListing,
    FreelancerProfileInput,
};
use crate::domain::value_objects::Principal;
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::{BusinessRepository, FreelancerRepository};

/// Outcome of a create-or-update
#[derive(Debug, Clone, PartialEq)]
pub enum Saved<T> {
    Created(T),
    Updated(T),
}

impl<T> Saved<T> {
    pub fn was_created(&self) -> bool {
        matches!(self, Saved::Created(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Saved::Created(value) | Saved::Updated(value) => value,
        }
    }
}

pub struct ProfileService {
    businesses: Arc<dyn BusinessRepository>,
    freelancers: Arc<dyn FreelancerRepository>,
}

impl ProfileService {
    pub fn new(
        businesses: Arc<dyn BusinessRepository>,
        freelancers: Arc<dyn FreelancerRepository>,
    ) -> Self {
        Self {
            businesses,
            freelancers,
        }
    }

    /// Create the caller's business profile, or replace its contents
    pub async fn save_business(
        &self,
        actor: &Principal,
        input: BusinessProfileInput,
    ) -> DomainResult<Saved<Business>> {
        if !validators::not_empty(&input.business_name) {
            return Err(ValidationError::required("business_name").into());
        }

        match self.businesses.find_by_user(actor.user_id).await? {
            Some(existing) => {
                let mut business = ensure_owner(Some(existing), actor.user_id)?;
                business.replace_details(input);
                Ok(Saved::Updated(self.businesses.update(business).await?))
            }
            None => {
                let business = self
                    .businesses
                    .create(Business::new(actor.user_id, input))
                    .await?;
                tracing::info!(business_id = %business.id, owner = %actor.user_id, "business profile created");
                Ok(Saved::Created(business))
            }
        }
    }

    pub async fn business_for(&self, actor: &Principal) -> DomainResult<Option<Business>> {
        self.businesses.find_by_user(actor.user_id).await
    }

    pub async fn list_businesses(&self) -> DomainResult<Vec<BusinessListing>> {
        self.businesses.list().await
    }

    /// Create the caller's freelancer profile, or replace its contents
    pub async fn save_freelancer(
        &self,
        actor: &Principal,
        input: FreelancerProfileInput,
    ) -> DomainResult<Saved<Freelancer>> {
        if input.experience_years.map_or(false, |years| years < 0) {
            return Err(ValidationError::OutOfRange {
                field: "experience_years".to_string(),
            }
            .into());
        }
        if input
            .hourly_rate
            .map_or(false, |rate| !rate.is_finite() || rate < 0.0)
        {
            return Err(ValidationError::OutOfRange {
                field: "hourly_rate".to_string(),
            }
            .into());
        }

        match self.freelancers.find_by_user(actor.user_id).await? {
            Some(existing) => {
                let mut freelancer = ensure_owner(Some(existing), actor.user_id)?;
                freelancer.replace_details(input);
                Ok(Saved::Updated(self.freelancers.update(freelancer).await?))
            }
            None => {
                let freelancer = self
                    .freelancers
                    .create(Freelancer::new(actor.user_id, input))
                    .await?;
                tracing::info!(freelancer_id = %freelancer.id, owner = %actor.user_id, "freelancer profile created");
                Ok(Saved::Created(freelancer))
            }
        }
    }

    pub async fn freelancer_for(&self, actor: &Principal) -> DomainResult<Option<Freelancer>> {
        self.freelancers.find_by_user(actor.user_id).await
    }

    pub async fn list_freelancers(&self) -> DomainResult<Vec<FreelancerListing>> {
        self.freelancers.list().await
    }
}
