//! Role check middleware.
//!
//! Runs after [`JwtAuth`](super::auth::JwtAuth) and consults the shared
//! [`AccessPolicy`] for one [`Operation`]. A request without an
//! [`AuthContext`] is answered with 401, a role outside the operation's set
//! with 403; anything else passes through untouched.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use kk_core::{
    errors::{AuthError, DomainError},
    AccessPolicy, Operation,
};
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use super::auth::AuthContext;
use crate::handlers::ApiError;

/// Role check middleware factory
#[derive(Debug, Clone, Copy)]
pub struct RequireRole {
    operation: Operation,
    policy: AccessPolicy,
}

impl RequireRole {
    /// Gate on `operation` using the default policy table
    pub fn new(operation: Operation) -> Self {
        Self::with_policy(operation, AccessPolicy::default())
    }

    pub fn with_policy(operation: Operation, policy: AccessPolicy) -> Self {
        Self { operation, policy }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            operation: self.operation,
            policy: self.policy,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    operation: Operation,
    policy: AccessPolicy,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let role = req.extensions().get::<AuthContext>().map(|context| context.role);

        let decision: Result<(), DomainError> = match role {
            None => Err(AuthError::MissingToken.into()),
            Some(role) => self.policy.check(self.operation, role).map_err(DomainError::from),
        };

        match decision {
            Ok(()) => {
                let service = Rc::clone(&self.service);
                Box::pin(async move {
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                })
            }
            Err(error) => {
                log::debug!("{} denied for {}: {}", self.operation, req.path(), error);
                let response = req
                    .error_response(ApiError::from(error))
                    .map_into_right_body();
                Box::pin(async move { Ok(response) })
            }
        }
    }
}
