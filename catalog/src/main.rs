use actix_web::{web, App, HttpResponse, HttpServer, Result};
use std::sync::Arc;
use tracing::{error, info};

use casehub_config::{AppConfig, PreconfiguredRegistry};
use casehub_database::{Database, DatabaseConfig, PgConnectorStore};
use casehub_models::SUPPORTED_ACTION_TYPES;

mod errors;
mod handlers;
mod services;

#[cfg(test)]
mod test_support;

use handlers::connectors;
use services::ConnectorCatalog;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let bind_addr = format!("0.0.0.0:{}", config.port);

    info!("🚀 [Catalog Service] Starting on port {}", config.port);

    let preconfigured = match PreconfiguredRegistry::from_path(&config.preconfigured_path) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Invalid preconfigured connector configuration: {}", e);
            std::process::exit(1);
        }
    };

    let database = match Database::new(&DatabaseConfig::from_env()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = database.migrate().await {
        error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }
    info!("🗄️  Database connected and migrated");

    let store = Arc::new(PgConnectorStore::new(database.pool().clone()));
    let catalog = web::Data::new(ConnectorCatalog::new(
        store,
        preconfigured,
        config.upstream_timeout,
    ));
    info!(
        "🔌 Connector catalog ready ({} preconfigured connector(s))",
        catalog.preconfigured_count()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .route("/health", web::get().to(health_check))
            .route("/status", web::get().to(status_check))
            .route(
                "/api/spaces/{space}/connectors",
                web::get().to(connectors::list_space_connectors),
            )
            .route(
                "/api/connectors",
                web::get().to(connectors::list_default_connectors),
            )
    })
    .bind(&bind_addr)?
    .run()
    .await
}

async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "catalog-service"
    })))
}

async fn status_check(catalog: web::Data<ConnectorCatalog>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "service": "catalog-service",
        "version": "0.1.0",
        "status": "running",
        "features": {
            "space_scoped_listing": true,
            "preconfigured_connectors": catalog.preconfigured_count(),
            "supported_action_types": SUPPORTED_ACTION_TYPES,
        }
    })))
}
