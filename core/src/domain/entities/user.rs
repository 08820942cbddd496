//! User entity representing a registered identity in the Kasi Konnect marketplace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ValidationError;

/// The role a user registered with; drives route-level access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Runs a township business and may apply for municipal funding
    BusinessOwner,
    /// Offers services and applies to jobs
    Freelancer,
    /// Posts jobs
    Client,
    /// Municipal staff: verifies users and reviews funding
    MunicipalWorker,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::BusinessOwner,
        Role::Freelancer,
        Role::Client,
        Role::MunicipalWorker,
    ];

    /// Wire and storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::BusinessOwner => "business_owner",
            Role::Freelancer => "freelancer",
            Role::Client => "client",
            Role::MunicipalWorker => "municipal_worker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidRole {
                value: s.to_string(),
            })
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,

    /// Unique login identifier
    pub email: String,

    pub name: String,

    pub role: Role,

    /// bcrypt hash; never leaves the server
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Whether a municipal worker has verified this user
    pub verified: bool,

    /// Municipal worker who performed the verification
    pub verified_by: Option<Uuid>,

    pub verified_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unverified user
    pub fn new(email: String, name: String, role: Role, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            role,
            password_hash,
            verified: false,
            verified_by: None,
            verified_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the user as verified by the given reviewer
    pub fn verify(&mut self, reviewer: Uuid) {
        let now = Utc::now();
        self.verified = true;
        self.verified_by = Some(reviewer);
        self.verified_at = Some(now);
        self.updated_at = now;
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn is_municipal_worker(&self) -> bool {
        self.role == Role::MunicipalWorker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_unverified() {
        let user = User::new(
            "thandi@example.co.za".to_string(),
            "Thandi".to_string(),
            Role::Client,
            "hash".to_string(),
        );

        assert!(!user.verified);
        assert!(user.verified_by.is_none());
        assert!(user.verified_at.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_verify_records_reviewer() {
        let mut user = User::new(
            "sipho@example.co.za".to_string(),
            "Sipho".to_string(),
            Role::Freelancer,
            "hash".to_string(),
        );
        let reviewer = Uuid::new_v4();

        user.verify(reviewer);

        assert!(user.verified);
        assert_eq!(user.verified_by, Some(reviewer));
        assert!(user.verified_at.is_some());
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new(
            "lerato@example.co.za".to_string(),
            "Lerato".to_string(),
            Role::BusinessOwner,
            "$2b$10$secret".to_string(),
        );

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "business_owner");
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("admin".parse::<Role>().is_err());
    }
}
