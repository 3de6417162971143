//! Exercise handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppForm;
use crate::features::exercises::dtos::{
    CreateExerciseDto, ExerciseLogDto, ExerciseLogQuery, ExerciseResponseDto,
};
use crate::features::exercises::services::ExerciseService;
use crate::shared::types::{DeleteResponse, ErrorResponse};

/// Log an exercise for a user
///
/// `date` defaults to today's UTC calendar date when omitted.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body(content = CreateExerciseDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Exercise logged", body = ExerciseResponseDto),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "exercises"
)]
pub async fn log_exercise(
    State(service): State<Arc<ExerciseService>>,
    Path(user_id): Path<Uuid>,
    AppForm(dto): AppForm<CreateExerciseDto>,
) -> Result<Json<ExerciseResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let exercise = service.log_exercise(user_id, dto).await?;
    Ok(Json(exercise))
}

/// Query a user's exercise log
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ExerciseLogQuery
    ),
    responses(
        (status = 200, description = "Filtered exercise log", body = ExerciseLogDto),
        (status = 400, description = "Malformed query parameter", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "exercises"
)]
pub async fn get_exercise_log(
    State(service): State<Arc<ExerciseService>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ExerciseLogQuery>,
) -> Result<Json<ExerciseLogDto>> {
    let log = service.get_log(user_id, query).await?;
    Ok(Json(log))
}

/// Delete all exercises
#[utoipa::path(
    get,
    path = "/api/exercises/delete",
    responses(
        (status = 200, description = "All exercises removed", body = DeleteResponse)
    ),
    tag = "exercises"
)]
pub async fn delete_all_exercises(
    State(service): State<Arc<ExerciseService>>,
) -> Result<Json<DeleteResponse>> {
    let deleted = service.delete_all().await?;

    Ok(Json(DeleteResponse::new(
        "All exercises have been deleted!",
        deleted,
    )))
}
