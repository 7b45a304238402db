use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::models::error::FieldError;

#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct Training {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub sport_type_id: i64,
    pub user_id: Option<i64>,
    pub comment: String,
}

/// A training row joined with its sport type name and owner email, as
/// returned by the list and detail endpoints.
#[derive(FromRow, Debug, Clone, Serialize)]
pub struct TrainingDetails {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub sport_type_id: i64,
    pub sport_type_name: String,
    pub user_id: Option<i64>,
    pub user_email: Option<String>,
    pub comment: String,
}

/// Create payload. A client-supplied `user_id` is accepted but never
/// trusted: the handler overwrites it with the authenticated user's id
/// before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTraining {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub sport_type_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub comment: String,
}

/// Edit payload; `id` must match the path id.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTraining {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub sport_type_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub comment: String,
}

/// Validates the temporal invariants of a session interval. `now` is an
/// explicit parameter so the checks are unit-testable without a clock.
/// Both checks run independently and report together.
pub fn validate_interval(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if end_time < start_time {
        errors.push(FieldError::new(
            "end_time",
            "end time cannot be earlier than start time",
        ));
    }
    if start_time < now {
        errors.push(FieldError::new(
            "start_time",
            "start time cannot be earlier than the current date",
        ));
    }
    errors
}
