//! Timestamp routes

use axum::{routing::get, Router};

use crate::features::timestamp::handlers;

/// Create routes for the timestamp feature.
///
/// The date parameter is optional in the historical contract, so the bare
/// `/api` path is registered alongside the parameterized one. `/api/hello`
/// wins over `{date}` because static segments take precedence.
pub fn routes() -> Router {
    Router::new()
        .route("/api", get(handlers::current_timestamp))
        .route("/api/hello", get(handlers::hello))
        .route("/api/{date}", get(handlers::parse_timestamp))
}
