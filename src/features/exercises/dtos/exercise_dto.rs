use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Request DTO for logging an exercise.
///
/// `duration` arrives as a form-encoded string and is parsed to whole seconds
/// by the service; non-numeric input is a validation error. An absent or
/// empty `date` defaults to today's UTC calendar date.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseDto {
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub duration: String,
    pub date: Option<String>,
}

/// Query parameters for the exercise log endpoint.
///
/// `from`/`to` are inclusive ISO calendar dates; `limit` caps the number of
/// returned entries (unbounded when omitted or non-positive).
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ExerciseLogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    #[param(minimum = 1)]
    pub limit: Option<i64>,
}

/// Wire view of a freshly logged exercise. `_id` echoes the **user's** id,
/// which the historical clients rely on; `date` is human-readable.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponseDto {
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

/// One entry of a user's exercise log, date human-readable
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogEntryDto {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// Wire view of a log query result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLogDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntryDto>,
}
