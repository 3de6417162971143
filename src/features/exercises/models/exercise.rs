use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::exercises::dtos::LogEntryDto;
use crate::shared::constants::{HUMAN_DATE_FORMAT, ISO_DATE_FORMAT};

/// Database model for an exercise.
///
/// `username` is a snapshot of the user's name at creation time, not a live
/// reference. `date` is an ISO calendar-date string (YYYY-MM-DD).
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl Exercise {
    /// Stored ISO date rendered as "Fri Dec 25 2015". Stored dates are
    /// validated on write, so the fallback to the raw string is unreachable
    /// in practice.
    pub fn human_date(&self) -> String {
        NaiveDate::parse_from_str(&self.date, ISO_DATE_FORMAT)
            .map(|d| d.format(HUMAN_DATE_FORMAT).to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}

impl From<Exercise> for LogEntryDto {
    fn from(exercise: Exercise) -> Self {
        let date = exercise.human_date();
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_with_date(date: &str) -> Exercise {
        Exercise {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            description: "running".to_string(),
            duration: 30,
            date: date.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_human_date_formats_stored_iso_date() {
        assert_eq!(exercise_with_date("2015-12-25").human_date(), "Fri Dec 25 2015");
        assert_eq!(exercise_with_date("1970-01-01").human_date(), "Thu Jan 01 1970");
    }

    #[test]
    fn test_log_entry_keeps_description_and_duration() {
        let entry = LogEntryDto::from(exercise_with_date("2015-12-25"));
        assert_eq!(entry.description, "running");
        assert_eq!(entry.duration, 30);
        assert_eq!(entry.date, "Fri Dec 25 2015");
    }
}
