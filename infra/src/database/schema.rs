//! Idempotent schema bootstrap.
//!
//! Ids are UUID strings. Enumerations are stored as their textual values and
//! validated in the domain layer. Unique indexes back the one-per-user and
//! one-per-(job, applicant) invariants so concurrent inserts surface as
//! `Conflict` rather than duplicates.

use sqlx::{Executor, MySqlPool};

use crate::InfrastructureError;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id VARCHAR(36) PRIMARY KEY,
    email VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL,
    name VARCHAR(255) NOT NULL,
    role VARCHAR(32) NOT NULL,
    verified BOOLEAN NOT NULL DEFAULT FALSE,
    verified_by VARCHAR(36) NULL,
    verified_at DATETIME(6) NULL,
    created_at DATETIME(6) NOT NULL,
    updated_at DATETIME(6) NOT NULL,
    UNIQUE KEY uq_users_email (email),
    INDEX idx_users_role (role)
)
"#;

const CREATE_BUSINESSES: &str = r#"
CREATE TABLE IF NOT EXISTS businesses (
    id VARCHAR(36) PRIMARY KEY,
    user_id VARCHAR(36) NOT NULL,
    business_name VARCHAR(255) NOT NULL,
    description TEXT NULL,
    category VARCHAR(100) NULL,
    services TEXT NULL,
    location VARCHAR(255) NULL,
    phone VARCHAR(50) NULL,
    registration_number VARCHAR(100) NULL,
    website VARCHAR(255) NULL,
    created_at DATETIME(6) NOT NULL,
    updated_at DATETIME(6) NOT NULL,
    UNIQUE KEY uq_businesses_user (user_id),
    CONSTRAINT fk_businesses_user FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
)
"#;

const CREATE_FREELANCERS: &str = r#"
CREATE TABLE IF NOT EXISTS freelancers (
    id VARCHAR(36) PRIMARY KEY,
    user_id VARCHAR(36) NOT NULL,
    title VARCHAR(255) NULL,
    bio TEXT NULL,
    skills TEXT NULL,
    experience_years INT NULL,
    hourly_rate DOUBLE NULL,
    portfolio_url VARCHAR(255) NULL,
    location VARCHAR(255) NULL,
    phone VARCHAR(50) NULL,
    created_at DATETIME(6) NOT NULL,
    updated_at DATETIME(6) NOT NULL,
    UNIQUE KEY uq_freelancers_user (user_id),
    CONSTRAINT fk_freelancers_user FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
)
"#;

const CREATE_JOBS: &str = r#"
CREATE TABLE IF NOT EXISTS jobs (
    id VARCHAR(36) PRIMARY KEY,
    user_id VARCHAR(36) NOT NULL,
    title VARCHAR(255) NOT NULL,
    description TEXT NOT NULL,
    category VARCHAR(100) NULL,
    budget DOUBLE NULL,
    location VARCHAR(255) NULL,
    job_type VARCHAR(32) NOT NULL DEFAULT 'gig',
    status VARCHAR(32) NOT NULL DEFAULT 'open',
    deadline DATE NULL,
    created_at DATETIME(6) NOT NULL,
    updated_at DATETIME(6) NOT NULL,
    INDEX idx_jobs_status (status),
    INDEX idx_jobs_category (category),
    CONSTRAINT fk_jobs_user FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
)
"#;

const CREATE_JOB_APPLICATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS job_applications (
    id VARCHAR(36) PRIMARY KEY,
    job_id VARCHAR(36) NOT NULL,
    user_id VARCHAR(36) NOT NULL,
    cover_letter TEXT NULL,
    proposal TEXT NULL,
    proposed_budget DOUBLE NULL,
    status VARCHAR(32) NOT NULL DEFAULT 'pending',
    created_at DATETIME(6) NOT NULL,
    updated_at DATETIME(6) NOT NULL,
    UNIQUE KEY uq_job_applications_job_user (job_id, user_id),
    INDEX idx_job_applications_user (user_id),
    CONSTRAINT fk_job_applications_job FOREIGN KEY (job_id) REFERENCES jobs(id) ON DELETE CASCADE,
    CONSTRAINT fk_job_applications_user FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
)
"#;

const CREATE_FUNDING_APPLICATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS funding_applications (
    id VARCHAR(36) PRIMARY KEY,
    user_id VARCHAR(36) NOT NULL,
    business_name VARCHAR(255) NOT NULL,
    amount DOUBLE NOT NULL,
    purpose TEXT NOT NULL,
    business_plan TEXT NULL,
    financial_statements TEXT NULL,
    status VARCHAR(32) NOT NULL DEFAULT 'pending',
    reviewed_by VARCHAR(36) NULL,
    review_notes TEXT NULL,
    reviewed_at DATETIME(6) NULL,
    created_at DATETIME(6) NOT NULL,
    updated_at DATETIME(6) NOT NULL,
    INDEX idx_funding_status (status),
    CONSTRAINT fk_funding_user FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
    CONSTRAINT fk_funding_reviewer FOREIGN KEY (reviewed_by) REFERENCES users(id) ON DELETE SET NULL
)
"#;

/// Table definitions in dependency order
pub const SCHEMA: &[(&str, &str)] = &[
    ("users", CREATE_USERS),
    ("businesses", CREATE_BUSINESSES),
    ("freelancers", CREATE_FREELANCERS),
    ("jobs", CREATE_JOBS),
    ("job_applications", CREATE_JOB_APPLICATIONS),
    ("funding_applications", CREATE_FUNDING_APPLICATIONS),
];

/// Creates any missing tables. Existing tables are left untouched.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    tracing::info!("Ensuring database schema");

    for (table, ddl) in SCHEMA {
        pool.execute(*ddl).await.map_err(|e| {
            tracing::error!("Failed to create table {}: {}", table, e);
            InfrastructureError::Database(e)
        })?;
        tracing::debug!("Table {} ready", table);
    }

    tracing::info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_orders_referenced_tables_first() {
        let position = |name: &str| SCHEMA.iter().position(|(t, _)| *t == name).unwrap();
        assert!(position("users") < position("jobs"));
        assert!(position("jobs") < position("job_applications"));
        assert!(position("users") < position("funding_applications"));
    }

    #[test]
    fn test_every_statement_is_idempotent() {
        for (table, ddl) in SCHEMA {
            assert!(
                ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {} ", table)),
                "{} must be created idempotently",
                table
            );
        }
    }

    #[test]
    fn test_uniqueness_invariants_are_indexed() {
        assert!(CREATE_USERS.contains("UNIQUE KEY uq_users_email (email)"));
        assert!(CREATE_JOB_APPLICATIONS.contains("(job_id, user_id)"));
        assert!(CREATE_BUSINESSES.contains("UNIQUE KEY uq_businesses_user (user_id)"));
        assert!(CREATE_FREELANCERS.contains("UNIQUE KEY uq_freelancers_user (user_id)"));
    }
}
