//! User routes

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature.
///
/// `/api/users/delete` must be registered as a literal segment; it coexists
/// with the `{id}`-parameterized exercise routes because those carry an extra
/// path segment.
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/api/users/delete", get(handlers::delete_all_users))
        .with_state(service)
}
