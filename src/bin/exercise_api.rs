//! User/Exercise log API.

use std::sync::Arc;

use axum::Router;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;

use tracker_suite::core::config::{AppConfig, DatabaseConfig, SwaggerConfig};
use tracker_suite::core::openapi::{self, ExerciseApiDoc};
use tracker_suite::core::{database, middleware, server};
use tracker_suite::features::exercises::{routes as exercises_routes, ExerciseService};
use tracker_suite::features::users::{routes as users_routes, UserService};

fn main() -> anyhow::Result<()> {
    server::block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();
    server::init_tracing();

    // Load configuration
    let app_config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let database_config = DatabaseConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let swagger_config =
        SwaggerConfig::from_env("Exercise Log API").map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&database_config).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize services
    let user_service = Arc::new(UserService::new(pool.clone()));
    let exercise_service = Arc::new(ExerciseService::new(pool.clone()));
    tracing::info!("User and exercise services initialized");

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(openapi::swagger_router(
            ExerciseApiDoc::openapi(),
            &swagger_config,
        ))
        .merge(users_routes::routes(user_service))
        .merge(exercises_routes::routes(exercise_service))
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
