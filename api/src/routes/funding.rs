//! Municipal funding routes under `/api/funding`

use actix_web::{web, HttpResponse, Scope};
use kk_core::errors::DomainError;
use kk_core::{AccessPolicy, Operation};
use serde_json::json;
use uuid::Uuid;

use super::{authenticated, authorized, validated};
use crate::app::AppState;
use crate::dto::{FundingApplicationRequest, FundingQuery, ReviewFundingRequest};
use crate::handlers::ApiResult;
use crate::middleware::{AuthContext, JwtAuth};

pub fn scope(jwt: &JwtAuth, policy: AccessPolicy) -> Scope {
    web::scope("/funding")
        .route(
            "/apply",
            authorized(
                web::post().to(apply),
                jwt,
                policy,
                Operation::ApplyForFunding,
            ),
        )
        .route(
            "/my-applications",
            authenticated(web::get().to(my_applications), jwt),
        )
        .route(
            "/applications",
            authorized(
                web::get().to(list_applications),
                jwt,
                policy,
                Operation::ListFundingApplications,
            ),
        )
        .route(
            "/{application_id}/review",
            authorized(
                web::put().to(review),
                jwt,
                policy,
                Operation::ReviewFundingApplication,
            ),
        )
}

/// Handler for POST /api/funding/apply
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "message": "Funding application submitted successfully",
///     "application": { "id": "...", "status": "pending", "applicant_name": "...", ... }
/// }
/// ```
pub async fn apply(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<FundingApplicationRequest>,
) -> ApiResult<HttpResponse> {
    let input = validated(body)?.into();
    let application = state.funding.apply(&auth.principal(), input).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Funding application submitted successfully",
        "application": application,
    })))
}

pub async fn my_applications(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> ApiResult<HttpResponse> {
    let applications = state.funding.my_applications(&auth.principal()).await?;
    Ok(HttpResponse::Ok().json(json!({ "applications": applications })))
}

pub async fn list_applications(
    state: web::Data<AppState>,
    query: web::Query<FundingQuery>,
) -> ApiResult<HttpResponse> {
    let status = query.into_inner().into_status().map_err(DomainError::from)?;
    let applications = state.funding.list(status).await?;
    Ok(HttpResponse::Ok().json(json!({ "applications": applications })))
}

/// Handler for PUT /api/funding/{application_id}/review
///
/// ## Errors
/// - 400 Bad Request: status is not `approved`, `rejected` or `under_review`
/// - 404 Not Found: no such application
pub async fn review(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<ReviewFundingRequest>,
) -> ApiResult<HttpResponse> {
    let review = validated(body)?
        .into_review()
        .map_err(DomainError::from)?;
    let application = state
        .funding
        .review(&auth.principal(), path.into_inner(), review)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Funding application reviewed successfully",
        "application": application,
    })))
}
