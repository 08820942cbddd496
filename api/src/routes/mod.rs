//! HTTP route handlers, one module per resource.
//!
//! Each module exposes a `scope` that registers its routes. Gating is
//! attached per route: [`authenticated`] wraps a route with [`JwtAuth`],
//! [`authorized`] additionally runs [`RequireRole`] for one operation.

pub mod auth;
pub mod business;
pub mod freelancer;
pub mod funding;
pub mod health;
pub mod jobs;

use actix_web::{web, Route};
use kk_core::{AccessPolicy, Operation};
use validator::Validate;

use crate::handlers::ApiError;
use crate::middleware::{JwtAuth, RequireRole};

/// Require a valid bearer token
pub(crate) fn authenticated(route: Route, jwt: &JwtAuth) -> Route {
    route.wrap(jwt.clone())
}

/// Require a valid bearer token whose role `policy` permits for `operation`.
/// The last `wrap` runs first, so authentication precedes the role check.
pub(crate) fn authorized(
    route: Route,
    jwt: &JwtAuth,
    policy: AccessPolicy,
    operation: Operation,
) -> Route {
    route
        .wrap(RequireRole::with_policy(operation, policy))
        .wrap(jwt.clone())
}

/// Unwrap a JSON body and run its `validator` rules
pub(crate) fn validated<T: Validate>(body: web::Json<T>) -> Result<T, ApiError> {
    let body = body.into_inner();
    body.validate()?;
    Ok(body)
}
