use kk_core::domain::entities::{BusinessProfileInput, FreelancerProfileInput};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BusinessProfileRequest {
    #[validate(length(min = 1, max = 255, message = "Business name is required"))]
    pub business_name: String,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub services: Option<String>,
    pub location: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 100))]
    pub registration_number: Option<String>,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
}

impl From<BusinessProfileRequest> for BusinessProfileInput {
    fn from(request: BusinessProfileRequest) -> Self {
        BusinessProfileInput {
            business_name: request.business_name,
            description: request.description,
            category: request.category,
            services: request.services,
            location: request.location,
            phone: request.phone,
            registration_number: request.registration_number,
            website: request.website,
        }
    }
}

/// Every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FreelancerProfileRequest {
    pub title: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    #[validate(range(min = 0, message = "Experience must not be negative"))]
    pub experience_years: Option<i32>,
    #[validate(range(min = 0.0, message = "Hourly rate must not be negative"))]
    pub hourly_rate: Option<f64>,
    #[validate(url(message = "Portfolio URL must be a valid URL"))]
    pub portfolio_url: Option<String>,
    pub location: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
}

impl From<FreelancerProfileRequest> for FreelancerProfileInput {
    fn from(request: FreelancerProfileRequest) -> Self {
        FreelancerProfileInput {
            title: request.title,
            bio: request.bio,
            skills: request.skills,
            experience_years: request.experience_years,
            hourly_rate: request.hourly_rate,
            portfolio_url: request.portfolio_url,
            location: request.location,
            phone: request.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_name_is_required() {
        let request = BusinessProfileRequest::default();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_freelancer_profile_is_valid() {
        assert!(FreelancerProfileRequest::default().validate().is_ok());
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let request = FreelancerProfileRequest {
            hourly_rate: Some(-1.0),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
