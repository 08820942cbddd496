use actix_web::{web, HttpResponse};
use kk_shared::{HealthResponse, HealthStatus};

use crate::app::AppState;

/// Handler for GET /api/health
///
/// Reports 503 when the database does not answer.
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let mut health = HealthResponse::new(env!("CARGO_PKG_VERSION"));

    if let Some(database) = &state.database {
        let status = match database.health_check().await {
            Ok(true) => HealthStatus::Healthy,
            _ => HealthStatus::Unhealthy,
        };
        health = health.with_service("database", status);
    }

    if health.status == HealthStatus::Healthy {
        HttpResponse::Ok().json(health)
    } else {
        HttpResponse::ServiceUnavailable().json(health)
    }
}
