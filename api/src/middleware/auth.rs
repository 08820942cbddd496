//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the `Authorization` header, verifies it
//! with the core [`TokenService`] and injects an [`AuthContext`] into the
//! request. A missing or unverifiable token ends the request with a 401
//! response; the inner service is never called.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use kk_core::{
    errors::{AuthError, DomainError},
    Principal, Role, TokenService,
};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};
use uuid::Uuid;

use crate::handlers::ApiError;

/// Authenticated identity injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl AuthContext {
    pub fn principal(&self) -> Principal {
        Principal::new(self.user_id, self.email.clone(), self.role)
    }
}

impl From<Principal> for AuthContext {
    fn from(principal: Principal) -> Self {
        Self {
            user_id: principal.user_id,
            email: principal.email,
            role: principal.role,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    tokens: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authenticated = authenticate(&self.tokens, &req);

        Box::pin(async move {
            match authenticated {
                Ok(context) => {
                    log::debug!("Authenticated {} as {}", context.user_id, context.role);
                    req.extensions_mut().insert(context);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    log::debug!("Rejected {} {}: {}", req.method(), req.path(), error);
                    Ok(req
                        .error_response(ApiError::from(error))
                        .map_into_right_body())
                }
            }
        })
    }
}

fn authenticate(tokens: &TokenService, req: &ServiceRequest) -> Result<AuthContext, DomainError> {
    let token = extract_bearer_token(req).ok_or(AuthError::MissingToken)?;
    let claims = tokens.verify(&token)?;
    let principal = Principal::try_from(claims)?;
    Ok(principal.into())
}

/// Extracts the token from `Authorization: Bearer <token>`; the scheme is case-insensitive
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(DomainError::from(AuthError::MissingToken)).into());

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        for header in ["bearer abc.def.ghi", "BEARER abc.def.ghi", "  Bearer   abc.def.ghi "] {
            let req = TestRequest::default()
                .insert_header((AUTHORIZATION, header))
                .to_srv_request();
            assert_eq!(extract_bearer_token(&req), Some("abc.def.ghi".to_string()), "{header}");
        }

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic abc.def.ghi"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);
    }

    #[test]
    fn test_context_round_trips_principal() {
        let principal = Principal::new(Uuid::new_v4(), "a@b.co", Role::Client);
        let context = AuthContext::from(principal.clone());
        assert_eq!(context.principal(), principal);
    }
}
