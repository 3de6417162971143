//! User handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppForm;
use crate::features::users::dtos::{CreateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::{DeleteResponse, ErrorResponse};

/// List all users
///
/// An empty store is reported as 404 with the historical message rather than
/// an empty array; existing clients key off that payload.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponseDto>),
        (status = 404, description = "No users in the database", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
) -> Result<Json<Vec<UserResponseDto>>> {
    let users = service.list().await?;

    if users.is_empty() {
        return Err(AppError::NotFound(
            "There are no users in the database!".to_string(),
        ));
    }

    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(content = CreateUserDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "User created", body = UserResponseDto),
        (status = 400, description = "Malformed form body", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    AppForm(dto): AppForm<CreateUserDto>,
) -> Result<Json<UserResponseDto>> {
    let user = service.create(dto).await?;
    Ok(Json(user))
}

/// Delete all users
#[utoipa::path(
    get,
    path = "/api/users/delete",
    responses(
        (status = 200, description = "All users removed", body = DeleteResponse)
    ),
    tag = "users"
)]
pub async fn delete_all_users(
    State(service): State<Arc<UserService>>,
) -> Result<Json<DeleteResponse>> {
    let deleted = service.delete_all().await?;

    Ok(Json(DeleteResponse::new(
        "All users have been deleted!",
        deleted,
    )))
}
