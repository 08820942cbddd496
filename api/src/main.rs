use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};

use kk_api::{config, create_app, handlers::expose_internal_details, AppState, Repositories};
use kk_infra::{ensure_schema, DatabasePool};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = config::load().context("failed to load configuration")?;

    config::logger_builder(&config.logging).init();

    info!("Starting Kasi Konnect API ({})", config.environment);

    config.validate().map_err(anyhow::Error::msg)?;
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development default");
    }
    expose_internal_details(config.environment.exposes_error_details());

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    info!("Database pool ready: {}", database.get_statistics());
    if config.database.auto_migrate {
        ensure_schema(database.get_pool())
            .await
            .context("failed to create the database schema")?;
    }

    let state = AppState::from_config(&config, Repositories::mysql(&database))
        .context("failed to build application state")?
        .with_database(database.clone());
    let state = web::Data::new(state);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config));
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await?;

    info!("Server stopped, closing database pool");
    database.close().await;
    Ok(())
}
