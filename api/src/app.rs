//! Application state and factory
//!
//! [`AppState`] owns the business services, the token service and the
//! access policy. [`create_app`] wires them into an actix-web `App` with the
//! full route table.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};
use kk_core::repositories::{
    BusinessRepository, FreelancerRepository, FundingRepository, InMemoryStore,
    JobApplicationRepository, JobRepository, UserRepository,
};
use kk_core::services::{
    AuthService, FundingService, JobService, PasswordHasher, ProfileService, TokenService,
    TokenServiceConfig,
};
use kk_core::{AccessPolicy, DomainResult};
use kk_infra::{
    BcryptPasswordHasher, DatabasePool, MySqlBusinessRepository, MySqlFreelancerRepository,
    MySqlFundingRepository, MySqlJobApplicationRepository, MySqlJobRepository,
    MySqlUserRepository,
};
use kk_shared::AppConfig;

use crate::handlers::ApiError;
use crate::middleware::{create_cors, JwtAuth};
use crate::routes;

/// The stores behind every service
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub applications: Arc<dyn JobApplicationRepository>,
    pub funding: Arc<dyn FundingRepository>,
    pub businesses: Arc<dyn BusinessRepository>,
    pub freelancers: Arc<dyn FreelancerRepository>,
}

impl Repositories {
    /// Every repository backed by one shared in-memory store
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            users: store.clone(),
            jobs: store.clone(),
            applications: store.clone(),
            funding: store.clone(),
            businesses: store.clone(),
            freelancers: store,
        }
    }

    pub fn mysql(database: &DatabasePool) -> Self {
        let pool = database.get_pool();
        Self {
            users: Arc::new(MySqlUserRepository::new(pool.clone())),
            jobs: Arc::new(MySqlJobRepository::new(pool.clone())),
            applications: Arc::new(MySqlJobApplicationRepository::new(pool.clone())),
            funding: Arc::new(MySqlFundingRepository::new(pool.clone())),
            businesses: Arc::new(MySqlBusinessRepository::new(pool.clone())),
            freelancers: Arc::new(MySqlFreelancerRepository::new(pool.clone())),
        }
    }
}

/// Shared, read-only application state
pub struct AppState {
    pub auth: AuthService,
    pub jobs: JobService,
    pub funding: FundingService,
    pub profiles: ProfileService,
    pub tokens: Arc<TokenService>,
    pub policy: AccessPolicy,
    /// Present when backed by MySQL; reported by the health endpoint
    pub database: Option<DatabasePool>,
}

impl AppState {
    pub fn new(
        repositories: Repositories,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            auth: AuthService::new(repositories.users, hasher, Arc::clone(&tokens)),
            jobs: JobService::new(repositories.jobs, repositories.applications),
            funding: FundingService::new(repositories.funding),
            profiles: ProfileService::new(repositories.businesses, repositories.freelancers),
            tokens,
            policy: AccessPolicy::default(),
            database: None,
        }
    }

    /// Token service and bcrypt hasher built from configuration
    ///
    /// # Errors
    /// * `Internal` - the signing secret is empty or the lifetime is not positive
    pub fn from_config(config: &AppConfig, repositories: Repositories) -> DomainResult<Self> {
        let tokens = TokenService::new(TokenServiceConfig::from(&config.auth.jwt))?;
        let hasher = BcryptPasswordHasher::new(config.auth.bcrypt_cost);
        Ok(Self::new(repositories, Arc::new(hasher), Arc::new(tokens)))
    }

    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let jwt = JwtAuth::new(Arc::clone(&state.tokens));
    let policy = state.policy;

    App::new()
        .app_data(state)
        .app_data(json_config(config.server.max_payload_size))
        .app_data(query_config())
        .app_data(path_config())
        .wrap(Logger::default())
        .wrap(create_cors(&config.cors))
        .route("/", web::get().to(index))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(routes::health::health))
                .service(routes::auth::scope(&jwt, policy))
                .service(routes::business::scope(&jwt, policy))
                .service(routes::freelancer::scope(&jwt, policy))
                .service(routes::jobs::scope(&jwt, policy))
                .service(routes::funding::scope(&jwt, policy)),
        )
        .default_service(web::route().to(not_found))
}

fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

/// Malformed ids can never match a stored resource
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| ApiError::NotFound("Resource not found".to_string()).into())
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to Kasi Konnect API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/api/auth",
            "business": "/api/business",
            "freelancer": "/api/freelancer",
            "jobs": "/api/jobs",
            "funding": "/api/funding",
            "health": "/api/health"
        }
    }))
}

/// Default 404 handler
async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound("Route not found".to_string()))
}
