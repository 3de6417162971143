use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::SwaggerConfig;
use crate::core::middleware;
use crate::features::exercises::{dtos as exercises_dtos, handlers as exercises_handlers};
use crate::features::filemeta::{dtos as filemeta_dtos, handlers as filemeta_handlers};
use crate::features::timestamp::{dtos as timestamp_dtos, handlers as timestamp_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{DeleteResponse, DeleteResult, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::list_users,
        users_handlers::create_user,
        users_handlers::delete_all_users,
        // Exercises
        exercises_handlers::log_exercise,
        exercises_handlers::get_exercise_log,
        exercises_handlers::delete_all_exercises,
    ),
    components(schemas(
        users_dtos::UserResponseDto,
        users_dtos::CreateUserDto,
        exercises_dtos::CreateExerciseDto,
        exercises_dtos::ExerciseResponseDto,
        exercises_dtos::ExerciseLogDto,
        exercises_dtos::LogEntryDto,
        DeleteResponse,
        DeleteResult,
        ErrorResponse,
    )),
    tags(
        (name = "users", description = "User creation and listing"),
        (name = "exercises", description = "Exercise logging and log queries"),
    )
)]
pub struct ExerciseApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(filemeta_handlers::analyse_file),
    components(schemas(
        filemeta_dtos::UploadFileDto,
        filemeta_dtos::FileMetadataDto,
        ErrorResponse,
    )),
    tags(
        (name = "filemeta", description = "File metadata inspection on upload"),
    )
)]
pub struct FileMetaApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        timestamp_handlers::current_timestamp,
        timestamp_handlers::parse_timestamp,
        timestamp_handlers::hello,
    ),
    components(schemas(
        timestamp_dtos::TimestampDto,
        timestamp_dtos::InvalidDateDto,
        timestamp_dtos::GreetingDto,
    )),
    tags(
        (name = "timestamp", description = "Date-string and epoch-millisecond parsing"),
    )
)]
pub struct TimestampApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// Build the Swagger UI router for one service, applying the configured
/// info block and optional basic auth.
pub fn swagger_router(mut openapi: utoipa::openapi::OpenApi, config: &SwaggerConfig) -> Router {
    let modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };
    modifier.modify(&mut openapi);

    if let Some(credentials) = config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    }
}
