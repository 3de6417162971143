//! Exercise routes

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::exercises::handlers;
use crate::features::exercises::services::ExerciseService;

/// Create routes for the exercises feature
pub fn routes(service: Arc<ExerciseService>) -> Router {
    Router::new()
        .route("/api/users/{id}/exercises", post(handlers::log_exercise))
        .route("/api/users/{id}/logs", get(handlers::get_exercise_log))
        .route(
            "/api/exercises/delete",
            get(handlers::delete_all_exercises),
        )
        .with_state(service)
}
