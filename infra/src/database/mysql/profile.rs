//! MySQL implementations of the business and freelancer profile repositories.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use kk_core::domain::entities::{Business, BusinessListing, Freelancer, FreelancerListing};
use kk_core::errors::DomainError;
use kk_core::repositories::{BusinessRepository, FreelancerRepository};

use crate::database::error::{column, map_sqlx_error, query_failed, uuid_column};

const BUSINESS_COLUMNS: &str = r#"
    b.id, b.user_id, b.business_name, b.description, b.category, b.services,
    b.location, b.phone, b.registration_number, b.website, b.created_at, b.updated_at
"#;

const FREELANCER_COLUMNS: &str = r#"
    f.id, f.user_id, f.title, f.bio, f.skills, f.experience_years, f.hourly_rate,
    f.portfolio_url, f.location, f.phone, f.created_at, f.updated_at
"#;

pub struct MySqlBusinessRepository {
    pool: MySqlPool,
}

impl MySqlBusinessRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_business(row: &MySqlRow) -> Result<Business, DomainError> {
        Ok(Business {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            business_name: column(row, "business_name")?,
            description: column(row, "description")?,
            category: column(row, "category")?,
            services: column(row, "services")?,
            location: column(row, "location")?,
            phone: column(row, "phone")?,
            registration_number: column(row, "registration_number")?,
            website: column(row, "website")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl BusinessRepository for MySqlBusinessRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Business>, DomainError> {
        let query = format!(
            "SELECT {} FROM businesses b WHERE b.user_id = ? LIMIT 1",
            BUSINESS_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_business).transpose()
    }

    async fn create(&self, business: Business) -> Result<Business, DomainError> {
        let query = r#"
            INSERT INTO businesses (
                id, user_id, business_name, description, category, services,
                location, phone, registration_number, website, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(business.id.to_string())
            .bind(business.user_id.to_string())
            .bind(&business.business_name)
            .bind(&business.description)
            .bind(&business.category)
            .bind(&business.services)
            .bind(&business.location)
            .bind(&business.phone)
            .bind(&business.registration_number)
            .bind(&business.website)
            .bind(business.created_at)
            .bind(business.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_sqlx_error(
                    e,
                    "Failed to create business profile",
                    "Business profile already exists",
                )
            })?;

        Ok(business)
    }

    async fn update(&self, business: Business) -> Result<Business, DomainError> {
        let query = r#"
            UPDATE businesses SET
                business_name = ?, description = ?, category = ?, services = ?,
                location = ?, phone = ?, registration_number = ?, website = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&business.business_name)
            .bind(&business.description)
            .bind(&business.category)
            .bind(&business.services)
            .bind(&business.location)
            .bind(&business.phone)
            .bind(&business.registration_number)
            .bind(&business.website)
            .bind(business.updated_at)
            .bind(business.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        if result.rows_affected() == 0 && self.find_by_user(business.user_id).await?.is_none() {
            return Err(DomainError::not_found("Business profile"));
        }

        Ok(business)
    }

    async fn list(&self) -> Result<Vec<BusinessListing>, DomainError> {
        let query = format!(
            "SELECT {}, u.name AS owner_name, u.verified AS owner_verified \
             FROM businesses b JOIN users u ON u.id = b.user_id \
             ORDER BY b.created_at DESC",
            BUSINESS_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter()
            .map(|row| {
                Ok(BusinessListing {
                    business: Self::row_to_business(row)?,
                    owner_name: column(row, "owner_name")?,
                    owner_verified: column(row, "owner_verified")?,
                })
            })
            .collect()
    }
}

pub struct MySqlFreelancerRepository {
    pool: MySqlPool,
}

impl MySqlFreelancerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_freelancer(row: &MySqlRow) -> Result<Freelancer, DomainError> {
        Ok(Freelancer {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            title: column(row, "title")?,
            bio: column(row, "bio")?,
            skills: column(row, "skills")?,
            experience_years: column(row, "experience_years")?,
            hourly_rate: column(row, "hourly_rate")?,
            portfolio_url: column(row, "portfolio_url")?,
            location: column(row, "location")?,
            phone: column(row, "phone")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl FreelancerRepository for MySqlFreelancerRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Freelancer>, DomainError> {
        let query = format!(
            "SELECT {} FROM freelancers f WHERE f.user_id = ? LIMIT 1",
            FREELANCER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_freelancer).transpose()
    }

    async fn create(&self, freelancer: Freelancer) -> Result<Freelancer, DomainError> {
        let query = r#"
            INSERT INTO freelancers (
                id, user_id, title, bio, skills, experience_years, hourly_rate,
                portfolio_url, location, phone, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(freelancer.id.to_string())
            .bind(freelancer.user_id.to_string())
            .bind(&freelancer.title)
            .bind(&freelancer.bio)
            .bind(&freelancer.skills)
            .bind(freelancer.experience_years)
            .bind(freelancer.hourly_rate)
            .bind(&freelancer.portfolio_url)
            .bind(&freelancer.location)
            .bind(&freelancer.phone)
            .bind(freelancer.created_at)
            .bind(freelancer.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_sqlx_error(
                    e,
                    "Failed to create freelancer profile",
                    "Freelancer profile already exists",
                )
            })?;

        Ok(freelancer)
    }

    async fn update(&self, freelancer: Freelancer) -> Result<Freelancer, DomainError> {
        let query = r#"
            UPDATE freelancers SET
                title = ?, bio = ?, skills = ?, experience_years = ?, hourly_rate = ?,
                portfolio_url = ?, location = ?, phone = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&freelancer.title)
            .bind(&freelancer.bio)
            .bind(&freelancer.skills)
            .bind(freelancer.experience_years)
            .bind(freelancer.hourly_rate)
            .bind(&freelancer.portfolio_url)
            .bind(&freelancer.location)
            .bind(&freelancer.phone)
            .bind(freelancer.updated_at)
            .bind(freelancer.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        if result.rows_affected() == 0 && self.find_by_user(freelancer.user_id).await?.is_none() {
            return Err(DomainError::not_found("Freelancer profile"));
        }

        Ok(freelancer)
    }

    async fn list(&self) -> Result<Vec<FreelancerListing>, DomainError> {
        let query = format!(
            "SELECT {}, u.name AS owner_name, u.verified AS owner_verified \
             FROM freelancers f JOIN users u ON u.id = f.user_id \
             ORDER BY f.created_at DESC",
            FREELANCER_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter()
            .map(|row| {
                Ok(FreelancerListing {
                    freelancer: Self::row_to_freelancer(row)?,
                    owner_name: column(row, "owner_name")?,
                    owner_verified: column(row, "owner_verified")?,
                })
            })
            .collect()
    }
}
