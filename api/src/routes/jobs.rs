//! Job board routes under `/api/jobs`
//!
//! Listing and detail are public. Posting is gated on `CreateJob`; editing a
//! job and reading its applications go through the ownership guard in
//! [`kk_core::JobService`].

use actix_web::{web, HttpResponse, Scope};
use kk_core::errors::DomainError;
use kk_core::{AccessPolicy, Operation};
use serde_json::json;
use uuid::Uuid;

use super::{authenticated, authorized, validated};
use crate::app::AppState;
use crate::dto::{ApplyToJobRequest, CreateJobRequest, JobQuery, UpdateJobRequest};
use crate::handlers::ApiResult;
use crate::middleware::{AuthContext, JwtAuth};

pub fn scope(jwt: &JwtAuth, policy: AccessPolicy) -> Scope {
    web::scope("/jobs")
        .service(
            web::resource(["", "/"])
                .route(web::get().to(list_jobs))
                .route(authorized(
                    web::post().to(create_job),
                    jwt,
                    policy,
                    Operation::CreateJob,
                )),
        )
        // Registered before `/{job_id}/...` so "user" is never taken for an id
        .route(
            "/user/applications",
            authenticated(web::get().to(my_applications), jwt),
        )
        .service(
            web::resource("/{job_id}")
                .route(web::get().to(get_job))
                .route(authenticated(web::put().to(update_job), jwt)),
        )
        .route(
            "/{job_id}/apply",
            authenticated(web::post().to(apply_to_job), jwt),
        )
        .route(
            "/{job_id}/applications",
            authenticated(web::get().to(job_applications), jwt),
        )
}

/// Handler for GET /api/jobs
///
/// Optional `status` and `category` filters; an unknown status is a 400.
pub async fn list_jobs(
    state: web::Data<AppState>,
    query: web::Query<JobQuery>,
) -> ApiResult<HttpResponse> {
    let filter = query.into_inner().into_filter().map_err(DomainError::from)?;
    let jobs = state.jobs.list(&filter).await?;
    Ok(HttpResponse::Ok().json(json!({ "jobs": jobs })))
}

pub async fn get_job(state: web::Data<AppState>, path: web::Path<Uuid>) -> ApiResult<HttpResponse> {
    let job = state.jobs.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "job": job })))
}

pub async fn create_job(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<CreateJobRequest>,
) -> ApiResult<HttpResponse> {
    let input = validated(body)?.into();
    let job = state.jobs.create(&auth.principal(), input).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Job created successfully",
        "job": job,
    })))
}

/// Handler for PUT /api/jobs/{job_id}
///
/// ## Errors
/// - 400 Bad Request: no updatable field in the body
/// - 403 Forbidden: caller does not own the job
/// - 404 Not Found: no such job
pub async fn update_job(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<UpdateJobRequest>,
) -> ApiResult<HttpResponse> {
    let update = validated(body)?.into();
    let job = state
        .jobs
        .update(&auth.principal(), path.into_inner(), update)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Job updated successfully",
        "job": job,
    })))
}

/// Handler for POST /api/jobs/{job_id}/apply
///
/// One application per user and job; a second one is a 409.
pub async fn apply_to_job(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<ApplyToJobRequest>,
) -> ApiResult<HttpResponse> {
    let input = validated(body)?.into();
    let application = state
        .jobs
        .apply(&auth.principal(), path.into_inner(), input)
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Application submitted successfully",
        "application": application,
    })))
}

pub async fn job_applications(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let applications = state
        .jobs
        .applications_for_job(&auth.principal(), path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "applications": applications })))
}

pub async fn my_applications(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> ApiResult<HttpResponse> {
    let applications = state.jobs.applications_for_user(&auth.principal()).await?;
    Ok(HttpResponse::Ok().json(json!({ "applications": applications })))
}
