//! File metadata API.

use axum::Router;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;

use tracker_suite::core::config::{AppConfig, SwaggerConfig, UploadConfig};
use tracker_suite::core::openapi::{self, FileMetaApiDoc};
use tracker_suite::core::{middleware, server};
use tracker_suite::features::filemeta::routes as filemeta_routes;

fn main() -> anyhow::Result<()> {
    server::block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();
    server::init_tracing();

    // Load configuration
    let app_config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let upload_config = UploadConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let swagger_config =
        SwaggerConfig::from_env("File Metadata API").map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(openapi::swagger_router(
            FileMetaApiDoc::openapi(),
            &swagger_config,
        ))
        .merge(filemeta_routes::routes(&upload_config))
        .merge(health_route)
        .layer(middleware::cors_layer(
            app_config.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    server::serve(&app_config.server_address(), app).await
}
