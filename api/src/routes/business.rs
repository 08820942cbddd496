//! Business profile routes under `/api/business`

use actix_web::{web, HttpResponse, Scope};
use kk_core::{AccessPolicy, Operation};
use serde_json::json;

use super::{authenticated, authorized, validated};
use crate::app::AppState;
use crate::dto::BusinessProfileRequest;
use crate::handlers::ApiResult;
use crate::middleware::{AuthContext, JwtAuth};

pub fn scope(jwt: &JwtAuth, policy: AccessPolicy) -> Scope {
    web::scope("/business")
        .service(
            web::resource("/profile")
                .route(authorized(
                    web::post().to(save_profile),
                    jwt,
                    policy,
                    Operation::CreateBusinessProfile,
                ))
                .route(authenticated(web::get().to(my_profile), jwt)),
        )
        .route("/all", web::get().to(list_all))
}

/// Handler for POST /api/business/profile
///
/// Creates the caller's profile (201) or updates the existing one (200).
pub async fn save_profile(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<BusinessProfileRequest>,
) -> ApiResult<HttpResponse> {
    let input = validated(body)?.into();
    let saved = state
        .profiles
        .save_business(&auth.principal(), input)
        .await?;

    if saved.was_created() {
        Ok(HttpResponse::Created().json(json!({
            "message": "Business profile created successfully",
            "business": saved.into_inner(),
        })))
    } else {
        Ok(HttpResponse::Ok().json(json!({
            "message": "Business profile updated successfully",
            "business": saved.into_inner(),
        })))
    }
}

/// `business` is `null` when the caller has no profile yet
pub async fn my_profile(state: web::Data<AppState>, auth: AuthContext) -> ApiResult<HttpResponse> {
    let business = state.profiles.business_for(&auth.principal()).await?;
    Ok(HttpResponse::Ok().json(json!({ "business": business })))
}

pub async fn list_all(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let businesses = state.profiles.list_businesses().await?;
    Ok(HttpResponse::Ok().json(json!({ "businesses": businesses })))
}
