//! Exercise service - logging, range queries and bulk removal

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::exercises::dtos::{
    CreateExerciseDto, ExerciseLogDto, ExerciseLogQuery, ExerciseResponseDto, LogEntryDto,
};
use crate::features::exercises::models::Exercise;
use crate::features::users::models::User;
use crate::shared::constants::{EPOCH_START_DATE, ISO_DATE_FORMAT};
use crate::shared::validation::DATE_REGEX;

/// Service for exercise records
pub struct ExerciseService {
    pool: PgPool,
}

impl ExerciseService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Log an exercise against a user.
    ///
    /// The user is looked up first; the stored record snapshots their
    /// username. The response echoes the user's id, not the exercise's.
    pub async fn log_exercise(
        &self,
        user_id: Uuid,
        dto: CreateExerciseDto,
    ) -> Result<ExerciseResponseDto> {
        let user = self.find_user(user_id).await?;

        let duration = parse_duration(&dto.duration)?;
        let date = resolve_entry_date(dto.date.as_deref())?;

        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (user_id, username, description, duration, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, username, description, duration, date, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&dto.description)
        .bind(duration)
        .bind(&date)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Exercise logged: id={}, user_id={}, date={}",
            exercise.id,
            user.id,
            exercise.date
        );

        Ok(ExerciseResponseDto {
            username: user.username,
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.human_date(),
            id: user.id,
        })
    }

    /// Fetch a user's exercise log, filtered to an inclusive date range and
    /// optionally capped. Entries come back in insertion order.
    pub async fn get_log(&self, user_id: Uuid, query: ExerciseLogQuery) -> Result<ExerciseLogDto> {
        let user = self.find_user(user_id).await?;

        let (from, to) = resolve_date_range(query.from.as_deref(), query.to.as_deref())?;
        // Non-positive limits mean "no cap", like the historical `limit=0`
        let limit = query.limit.filter(|l| *l > 0);

        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, user_id, username, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1 AND date >= $2 AND date <= $3
            ORDER BY created_at ASC
            LIMIT $4
            "#,
        )
        .bind(user.id)
        .bind(&from)
        .bind(&to)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        tracing::info!(
            "Exercise log fetched: user_id={}, from={}, to={}, count={}",
            user.id,
            from,
            to,
            exercises.len()
        );

        let log: Vec<LogEntryDto> = exercises.into_iter().map(LogEntryDto::from).collect();

        Ok(ExerciseLogDto {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        })
    }

    /// Remove all exercises unconditionally. Idempotent; returns the number
    /// of rows removed.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM exercises")
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected();
        tracing::info!("Deleted all exercises: count={}", deleted);

        Ok(deleted)
    }

    async fn find_user(&self, user_id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>("SELECT id, username, created_at FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}

/// Parse a form-encoded duration into whole seconds.
fn parse_duration(raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::Validation("duration must be a whole number of seconds".to_string()))
}

/// Resolve the date to store for a new exercise: today when absent or empty,
/// otherwise the validated ISO date as given.
fn resolve_entry_date(date: Option<&str>) -> Result<String> {
    match date {
        None => Ok(today()),
        Some(raw) if raw.is_empty() => Ok(today()),
        Some(raw) => parse_iso_date(raw).map(|_| raw.to_string()),
    }
}

/// Resolve the inclusive range for a log query: epoch start when `from` is
/// omitted, today when `to` is omitted.
fn resolve_date_range(from: Option<&str>, to: Option<&str>) -> Result<(String, String)> {
    let from = match from {
        None => EPOCH_START_DATE.to_string(),
        Some(raw) => parse_iso_date(raw).map(|_| raw.to_string())?,
    };
    let to = match to {
        None => today(),
        Some(raw) => parse_iso_date(raw).map(|_| raw.to_string())?,
    };
    Ok((from, to))
}

fn parse_iso_date(raw: &str) -> Result<NaiveDate> {
    if !DATE_REGEX.is_match(raw) {
        return Err(AppError::Validation(format!(
            "'{}' is not a YYYY-MM-DD date",
            raw
        )));
    }
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT)
        .map_err(|_| AppError::Validation(format!("'{}' is not a valid calendar date", raw)))
}

fn today() -> String {
    Utc::now().date_naive().format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_accepts_integers() {
        assert_eq!(parse_duration("60").unwrap(), 60);
        assert_eq!(parse_duration(" 45 ").unwrap(), 45);
        assert_eq!(parse_duration("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_duration_rejects_non_numeric() {
        assert!(parse_duration("sixty").is_err());
        assert!(parse_duration("7.5").is_err());
        assert!(parse_duration("60min").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_resolve_entry_date_keeps_valid_dates() {
        assert_eq!(
            resolve_entry_date(Some("2015-12-25")).unwrap(),
            "2015-12-25"
        );
    }

    #[test]
    fn test_resolve_entry_date_defaults_to_today() {
        let today = today();
        assert_eq!(resolve_entry_date(None).unwrap(), today);
        assert_eq!(resolve_entry_date(Some("")).unwrap(), today);
    }

    #[test]
    fn test_resolve_entry_date_rejects_malformed_input() {
        assert!(resolve_entry_date(Some("25-12-2015")).is_err());
        assert!(resolve_entry_date(Some("not-a-date")).is_err());
        // correct shape, impossible calendar date
        assert!(resolve_entry_date(Some("2015-02-31")).is_err());
    }

    #[test]
    fn test_resolve_date_range_defaults() {
        let (from, to) = resolve_date_range(None, None).unwrap();
        assert_eq!(from, EPOCH_START_DATE);
        assert_eq!(to, today());
    }

    #[test]
    fn test_resolve_date_range_keeps_explicit_bounds() {
        let (from, to) = resolve_date_range(Some("2020-01-01"), Some("2020-12-31")).unwrap();
        assert_eq!(from, "2020-01-01");
        assert_eq!(to, "2020-12-31");
    }

    #[test]
    fn test_resolve_date_range_rejects_malformed_bounds() {
        assert!(resolve_date_range(Some("garbage"), None).is_err());
        assert!(resolve_date_range(None, Some("2020-13-01")).is_err());
    }
}
