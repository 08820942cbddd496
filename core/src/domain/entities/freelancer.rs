//! Freelancer profiles, one per freelancer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freelancer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub experience_years: Option<i32>,
    pub hourly_rate: Option<f64>,
    pub portfolio_url: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile contents; saving replaces every field
#[derive(Debug, Clone, Default)]
pub struct FreelancerProfileInput {
    pub title: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub experience_years: Option<i32>,
    pub hourly_rate: Option<f64>,
    pub portfolio_url: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
}

impl Freelancer {
    pub fn new(owner: Uuid, input: FreelancerProfileInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: owner,
            title: input.title,
            bio: input.bio,
            skills: input.skills,
            experience_years: input.experience_years,
            hourly_rate: input.hourly_rate,
            portfolio_url: input.portfolio_url,
            location: input.location,
            phone: input.phone,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn replace_details(&mut self, input: FreelancerProfileInput) {
        self.title = input.title;
        self.bio = input.bio;
        self.skills = input.skills;
        self.experience_years = input.experience_years;
        self.hourly_rate = input.hourly_rate;
        self.portfolio_url = input.portfolio_url;
        self.location = input.location;
        self.phone = input.phone;
        self.updated_at = Utc::now();
    }
}

/// Freelancer joined with its owner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreelancerListing {
    #[serde(flatten)]
    pub freelancer: Freelancer,
    pub owner_name: String,
    pub owner_verified: bool,
}
