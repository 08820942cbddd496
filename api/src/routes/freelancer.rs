//! Freelancer profile routes under `/api/freelancer`

use actix_web::{web, HttpResponse, Scope};
use kk_core::{AccessPolicy, Operation};
use serde_json::json;

use super::{authenticated, authorized, validated};
use crate::app::AppState;
use crate::dto::FreelancerProfileRequest;
use crate::handlers::ApiResult;
use crate::middleware::{AuthContext, JwtAuth};

pub fn scope(jwt: &JwtAuth, policy: AccessPolicy) -> Scope {
    web::scope("/freelancer")
        .service(
            web::resource("/profile")
                .route(authorized(
                    web::post().to(save_profile),
                    jwt,
                    policy,
                    Operation::CreateFreelancerProfile,
                ))
                .route(authenticated(web::get().to(my_profile), jwt)),
        )
        .route("/all", web::get().to(list_all))
}

pub async fn save_profile(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<FreelancerProfileRequest>,
) -> ApiResult<HttpResponse> {
    let input = validated(body)?.into();
    let saved = state
        .profiles
        .save_freelancer(&auth.principal(), input)
        .await?;

    let (status, message) = if saved.was_created() {
        (
            actix_web::http::StatusCode::CREATED,
            "Freelancer profile created successfully",
        )
    } else {
        (
            actix_web::http::StatusCode::OK,
            "Freelancer profile updated successfully",
        )
    };

    Ok(HttpResponse::build(status).json(json!({
        "message": message,
        "freelancer": saved.into_inner(),
    })))
}

pub async fn my_profile(state: web::Data<AppState>, auth: AuthContext) -> ApiResult<HttpResponse> {
    let freelancer = state.profiles.freelancer_for(&auth.principal()).await?;
    Ok(HttpResponse::Ok().json(json!({ "freelancer": freelancer })))
}

pub async fn list_all(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let freelancers = state.profiles.list_freelancers().await?;
    Ok(HttpResponse::Ok().json(json!({ "freelancers": freelancers })))
}
