//! Business profiles, one per business owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub services: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub registration_number: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile contents; saving replaces every field
#[derive(Debug, Clone, Default)]
pub struct BusinessProfileInput {
    pub business_name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub services: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub registration_number: Option<String>,
    pub website: Option<String>,
}

impl Business {
    pub fn new(owner: Uuid, input: BusinessProfileInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: owner,
            business_name: input.business_name,
            description: input.description,
            category: input.category,
            services: input.services,
            location: input.location,
            phone: input.phone,
            registration_number: input.registration_number,
            website: input.website,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn replace_details(&mut self, input: BusinessProfileInput) {
        self.business_name = input.business_name;
        self.description = input.description;
        self.category = input.category;
        self.services = input.services;
        self.location = input.location;
        self.phone = input.phone;
        self.registration_number = input.registration_number;
        self.website = input.website;
        self.updated_at = Utc::now();
    }
}

/// Business joined with its owner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessListing {
    #[serde(flatten)]
    pub business: Business,
    pub owner_name: String,
    pub owner_verified: bool,
}
