//! User service - creation, listing and bulk removal

use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::users::dtos::{CreateUserDto, UserResponseDto};
use crate::features::users::models::User;

/// Service for user records
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every user, oldest first.
    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, created_at FROM users ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::info!("Users in database: {}", users.len());

        Ok(users.into_iter().map(UserResponseDto::from).collect())
    }

    /// Create a user. The username is persisted verbatim; duplicates are
    /// allowed and concurrent creations with the same name both succeed.
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username) VALUES ($1) RETURNING id, username, created_at",
        )
        .bind(&dto.username)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("User created: id={}", user.id);

        Ok(user.into())
    }

    /// Remove all users unconditionally. Idempotent; returns the number of
    /// rows removed (zero on an empty table is still success).
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        let deleted = result.rows_affected();
        tracing::info!("Deleted all users: count={}", deleted);

        Ok(deleted)
    }
}
