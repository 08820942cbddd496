//! MySQL implementation of the JobRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use kk_core::domain::entities::{Job, JobFilter, JobListing};
use kk_core::errors::DomainError;
use kk_core::repositories::JobRepository;

use crate::database::error::{column, enum_column, map_sqlx_error, query_failed, uuid_column};

const LISTING_SELECT: &str = r#"
    SELECT j.id, j.user_id, j.title, j.description, j.category, j.budget,
           j.location, j.job_type, j.status, j.deadline, j.created_at, j.updated_at,
           u.name AS poster_name, u.role AS poster_role
    FROM jobs j
    JOIN users u ON u.id = j.user_id
"#;

pub struct MySqlJobRepository {
    pool: MySqlPool,
}

impl MySqlJobRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_job(row: &MySqlRow) -> Result<Job, DomainError> {
        Ok(Job {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            category: column(row, "category")?,
            budget: column(row, "budget")?,
            location: column(row, "location")?,
            job_type: enum_column(row, "job_type")?,
            status: enum_column(row, "status")?,
            deadline: column(row, "deadline")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    fn row_to_listing(row: &MySqlRow) -> Result<JobListing, DomainError> {
        Ok(JobListing {
            job: Self::row_to_job(row)?,
            poster_name: column(row, "poster_name")?,
            poster_role: enum_column(row, "poster_role")?,
        })
    }
}

#[async_trait]
impl JobRepository for MySqlJobRepository {
    async fn create(&self, job: Job) -> Result<Job, DomainError> {
        let query = r#"
            INSERT INTO jobs (
                id, user_id, title, description, category, budget, location,
                job_type, status, deadline, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(job.id.to_string())
            .bind(job.user_id.to_string())
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.category)
            .bind(job.budget)
            .bind(&job.location)
            .bind(job.job_type.as_str())
            .bind(job.status.as_str())
            .bind(job.deadline)
            .bind(job.created_at)
            .bind(job.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to create job", "Job already exists"))?;

        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, description, category, budget, location,
                   job_type, status, deadline, created_at, updated_at
            FROM jobs
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_job).transpose()
    }

    async fn find_listing(&self, id: Uuid) -> Result<Option<JobListing>, DomainError> {
        let query = format!("{} WHERE j.id = ?", LISTING_SELECT);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_listing).transpose()
    }

    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobListing>, DomainError> {
        let mut builder: QueryBuilder<MySql> = QueryBuilder::new(LISTING_SELECT);
        builder.push(" WHERE 1 = 1");

        if let Some(status) = filter.status {
            builder.push(" AND j.status = ").push_bind(status.as_str());
        }
        if let Some(category) = &filter.category {
            builder.push(" AND j.category = ").push_bind(category.clone());
        }
        builder.push(" ORDER BY j.created_at DESC");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn update(&self, job: Job) -> Result<Job, DomainError> {
        let query = r#"
            UPDATE jobs SET
                title = ?, description = ?, category = ?, budget = ?, location = ?,
                job_type = ?, status = ?, deadline = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.category)
            .bind(job.budget)
            .bind(&job.location)
            .bind(job.job_type.as_str())
            .bind(job.status.as_str())
            .bind(job.deadline)
            .bind(job.updated_at)
            .bind(job.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        if result.rows_affected() == 0 && self.find_by_id(job.id).await?.is_none() {
            return Err(DomainError::not_found("Job"));
        }

        Ok(job)
    }
}
