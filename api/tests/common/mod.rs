//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use kk_api::{AppState, Repositories};
use kk_core::services::{RegisterUser, TokenService, TokenServiceConfig};
use kk_core::{AuthResponse, Role};
use kk_infra::BcryptPasswordHasher;
use kk_shared::AppConfig;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const PASSWORD: &str = "sikhona-2024";

/// Application state over a fresh in-memory store
pub fn state() -> web::Data<AppState> {
    let tokens = TokenService::new(TokenServiceConfig::new(TEST_SECRET)).unwrap();
    let hasher = BcryptPasswordHasher::new(BcryptPasswordHasher::MIN_COST);
    web::Data::new(AppState::new(
        Repositories::in_memory(),
        Arc::new(hasher),
        Arc::new(tokens),
    ))
}

pub fn config() -> AppConfig {
    AppConfig::default()
}

/// Register directly through the service, bypassing HTTP
pub async fn register(state: &AppState, email: &str, role: Role) -> AuthResponse {
    state
        .auth
        .register(RegisterUser {
            email: email.to_string(),
            password: PASSWORD.to_string(),
            name: format!("Test {}", role),
            role,
        })
        .await
        .unwrap()
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
