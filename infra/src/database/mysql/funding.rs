//! MySQL implementation of the FundingRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use kk_core::domain::entities::{FundingApplication, FundingListing, FundingStatus};
use kk_core::errors::DomainError;
use kk_core::repositories::FundingRepository;

use crate::database::error::{
    column, enum_column, map_sqlx_error, optional_uuid_column, query_failed, uuid_column,
};

const FUNDING_COLUMNS: &str = r#"
    f.id, f.user_id, f.business_name, f.amount, f.purpose, f.business_plan,
    f.financial_statements, f.status, f.reviewed_by, f.review_notes, f.reviewed_at,
    f.created_at, f.updated_at
"#;

pub struct MySqlFundingRepository {
    pool: MySqlPool,
}

impl MySqlFundingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_application(row: &MySqlRow) -> Result<FundingApplication, DomainError> {
        Ok(FundingApplication {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            business_name: column(row, "business_name")?,
            amount: column(row, "amount")?,
            purpose: column(row, "purpose")?,
            business_plan: column(row, "business_plan")?,
            financial_statements: column(row, "financial_statements")?,
            status: enum_column(row, "status")?,
            reviewed_by: optional_uuid_column(row, "reviewed_by")?,
            review_notes: column(row, "review_notes")?,
            reviewed_at: column(row, "reviewed_at")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    fn row_to_listing(row: &MySqlRow) -> Result<FundingListing, DomainError> {
        Ok(FundingListing {
            application: Self::row_to_application(row)?,
            applicant_name: column(row, "applicant_name")?,
            applicant_email: column(row, "applicant_email")?,
        })
    }

    fn listing_select() -> String {
        format!(
            "SELECT {}, u.name AS applicant_name, u.email AS applicant_email \
             FROM funding_applications f JOIN users u ON u.id = f.user_id",
            FUNDING_COLUMNS
        )
    }
}

#[async_trait]
impl FundingRepository for MySqlFundingRepository {
    async fn create(
        &self,
        application: FundingApplication,
    ) -> Result<FundingApplication, DomainError> {
        let query = r#"
            INSERT INTO funding_applications (
                id, user_id, business_name, amount, purpose, business_plan,
                financial_statements, status, reviewed_by, review_notes, reviewed_at,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(application.id.to_string())
            .bind(application.user_id.to_string())
            .bind(&application.business_name)
            .bind(application.amount)
            .bind(&application.purpose)
            .bind(&application.business_plan)
            .bind(&application.financial_statements)
            .bind(application.status.as_str())
            .bind(application.reviewed_by.map(|id| id.to_string()))
            .bind(&application.review_notes)
            .bind(application.reviewed_at)
            .bind(application.created_at)
            .bind(application.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_sqlx_error(
                    e,
                    "Failed to create funding application",
                    "Funding application already exists",
                )
            })?;

        Ok(application)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FundingApplication>, DomainError> {
        let query = format!(
            "SELECT {} FROM funding_applications f WHERE f.id = ?",
            FUNDING_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_application).transpose()
    }

    async fn find_listing(&self, id: Uuid) -> Result<Option<FundingListing>, DomainError> {
        let query = format!("{} WHERE f.id = ?", Self::listing_select());

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_listing).transpose()
    }

    async fn list(
        &self,
        status: Option<FundingStatus>,
    ) -> Result<Vec<FundingListing>, DomainError> {
        let rows = match status {
            Some(status) => {
                let query = format!(
                    "{} WHERE f.status = ? ORDER BY f.created_at DESC",
                    Self::listing_select()
                );
                sqlx::query(&query)
                    .bind(status.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!("{} ORDER BY f.created_at DESC", Self::listing_select());
                sqlx::query(&query).fetch_all(&self.pool).await
            }
        }
        .map_err(query_failed)?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<FundingApplication>, DomainError> {
        let query = format!(
            "SELECT {} FROM funding_applications f WHERE f.user_id = ? ORDER BY f.created_at DESC",
            FUNDING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_application).collect()
    }

    async fn update(
        &self,
        application: FundingApplication,
    ) -> Result<FundingApplication, DomainError> {
        let query = r#"
            UPDATE funding_applications SET
                status = ?, reviewed_by = ?, review_notes = ?, reviewed_at = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(application.status.as_str())
            .bind(application.reviewed_by.map(|id| id.to_string()))
            .bind(&application.review_notes)
            .bind(application.reviewed_at)
            .bind(application.updated_at)
            .bind(application.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        if result.rows_affected() == 0 && self.find_by_id(application.id).await?.is_none() {
            return Err(DomainError::not_found("Funding application"));
        }

        Ok(application)
    }
}
