//! File metadata routes

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::core::config::UploadConfig;
use crate::features::filemeta::handlers;

/// Create routes for the filemeta feature
pub fn routes(config: &UploadConfig) -> Router {
    Router::new().route(
        "/api/fileanalyse",
        // Allow body size up to the upload cap + buffer for multipart overhead
        post(handlers::analyse_file)
            .layer(DefaultBodyLimit::max(config.max_upload_size + 1024 * 1024)),
    )
}
