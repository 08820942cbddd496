//! CORS middleware configuration for cross-origin requests.
//!
//! Driven by [`CorsConfig`]: a `*` entry allows any origin (the development
//! default), otherwise only the listed origins are accepted. Production with
//! no `ALLOWED_ORIGINS` accepts no cross-origin requests.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use kk_shared::CorsConfig;

pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("Configuring CORS to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight(config: CorsConfig, origin: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ping")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let status = preflight(CorsConfig::development(), "http://localhost:3000").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_listed_origin_is_allowed() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.kasikonnect.co.za".to_string()],
            ..Default::default()
        };
        let status = preflight(config, "https://app.kasikonnect.co.za").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unlisted_origin_is_rejected() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.kasikonnect.co.za".to_string()],
            ..Default::default()
        };
        let status = preflight(config, "https://evil.example.com").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
