//! MySQL implementation of the JobApplicationRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use kk_core::domain::entities::{ApplicantView, JobApplication, UserApplicationView};
use kk_core::errors::DomainError;
use kk_core::repositories::JobApplicationRepository;

use crate::database::error::{column, enum_column, map_sqlx_error, query_failed, uuid_column};

pub struct MySqlJobApplicationRepository {
    pool: MySqlPool,
}

impl MySqlJobApplicationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_application(row: &MySqlRow) -> Result<JobApplication, DomainError> {
        Ok(JobApplication {
            id: uuid_column(row, "id")?,
            job_id: uuid_column(row, "job_id")?,
            user_id: uuid_column(row, "user_id")?,
            cover_letter: column(row, "cover_letter")?,
            proposal: column(row, "proposal")?,
            proposed_budget: column(row, "proposed_budget")?,
            status: enum_column(row, "status")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl JobApplicationRepository for MySqlJobApplicationRepository {
    async fn find_by_job_and_user(
        &self,
        job_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<JobApplication>, DomainError> {
        let query = r#"
            SELECT id, job_id, user_id, cover_letter, proposal, proposed_budget,
                   status, created_at, updated_at
            FROM job_applications
            WHERE job_id = ? AND user_id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(job_id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_application).transpose()
    }

    async fn create(&self, application: JobApplication) -> Result<JobApplication, DomainError> {
        let query = r#"
            INSERT INTO job_applications (
                id, job_id, user_id, cover_letter, proposal, proposed_budget,
                status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(application.id.to_string())
            .bind(application.job_id.to_string())
            .bind(application.user_id.to_string())
            .bind(&application.cover_letter)
            .bind(&application.proposal)
            .bind(application.proposed_budget)
            .bind(application.status.as_str())
            .bind(application.created_at)
            .bind(application.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_sqlx_error(
                    e,
                    "Failed to create job application",
                    "Job application already submitted",
                )
            })?;

        Ok(application)
    }

    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<ApplicantView>, DomainError> {
        let query = r#"
            SELECT a.id, a.job_id, a.user_id, a.cover_letter, a.proposal, a.proposed_budget,
                   a.status, a.created_at, a.updated_at,
                   u.name AS applicant_name, u.email AS applicant_email,
                   u.verified AS applicant_verified
            FROM job_applications a
            JOIN users u ON u.id = a.user_id
            WHERE a.job_id = ?
            ORDER BY a.created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(job_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter()
            .map(|row| {
                Ok(ApplicantView {
                    application: Self::row_to_application(row)?,
                    applicant_name: column(row, "applicant_name")?,
                    applicant_email: column(row, "applicant_email")?,
                    applicant_verified: column(row, "applicant_verified")?,
                })
            })
            .collect()
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserApplicationView>, DomainError> {
        let query = r#"
            SELECT a.id, a.job_id, a.user_id, a.cover_letter, a.proposal, a.proposed_budget,
                   a.status, a.created_at, a.updated_at,
                   j.title AS job_title, j.category AS job_category
            FROM job_applications a
            JOIN jobs j ON j.id = a.job_id
            WHERE a.user_id = ?
            ORDER BY a.created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter()
            .map(|row| {
                Ok(UserApplicationView {
                    application: Self::row_to_application(row)?,
                    job_title: column(row, "job_title")?,
                    job_category: column(row, "job_category")?,
                })
            })
            .collect()
    }
}
