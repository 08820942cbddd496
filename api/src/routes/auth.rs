//! Identity routes under `/api/auth`

use actix_web::{web, HttpResponse, Scope};
use kk_core::errors::DomainError;
use kk_core::{AccessPolicy, Operation};
use serde_json::json;
use uuid::Uuid;

use super::{authenticated, authorized, validated};
use crate::app::AppState;
use crate::dto::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::handlers::ApiResult;
use crate::middleware::{AuthContext, JwtAuth};

pub fn scope(jwt: &JwtAuth, policy: AccessPolicy) -> Scope {
    web::scope("/auth")
        .route("/register", web::post().to(register))
        .route("/login", web::post().to(login))
        .service(
            web::resource("/profile")
                .route(authenticated(web::get().to(profile), jwt))
                .route(authenticated(web::put().to(update_profile), jwt)),
        )
        .route(
            "/verify/{user_id}",
            authorized(web::put().to(verify_user), jwt, policy, Operation::VerifyUser),
        )
}

/// Handler for POST /api/auth/register
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "message": "User registered successfully",
///     "user": { "id": "...", "email": "...", "role": "freelancer", "verified": false, ... },
///     "token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing field, malformed email or unknown role
/// - 409 Conflict: email already registered
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let command = validated(body)?
        .into_command()
        .map_err(DomainError::from)?;
    let response = state.auth.register(command).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully",
        "user": response.user,
        "token": response.token,
    })))
}

/// Handler for POST /api/auth/login
///
/// Unknown email and wrong password both answer 401 with the same message.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let request = validated(body)?;
    let response = state.auth.login(&request.email, &request.password).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Login successful",
        "user": response.user,
        "token": response.token,
    })))
}

pub async fn profile(state: web::Data<AppState>, auth: AuthContext) -> ApiResult<HttpResponse> {
    let user = state.auth.profile(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

pub async fn update_profile(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<UpdateProfileRequest>,
) -> ApiResult<HttpResponse> {
    let update = validated(body)?.into();
    let user = state.auth.update_profile(auth.user_id, update).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Profile updated successfully",
        "user": user,
    })))
}

/// Handler for PUT /api/auth/verify/{user_id}
///
/// Municipal workers only. Records the reviewer and the time of verification.
pub async fn verify_user(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let user = state
        .auth
        .verify_user(&auth.principal(), path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User verified successfully",
        "user": user,
    })))
}
