use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use http::StatusCode;

use crate::{
    models::{
        error::Error,
        jwt::CurrentUser,
        training::{validate_interval, NewTraining, Training, TrainingDetails, UpdateTraining},
    },
    utils::state::AppState,
};

const DETAILS_SELECT: &str = "SELECT t.id, t.start_time, t.end_time, t.sport_type_id, \
     s.name AS sport_type_name, t.user_id, u.email AS user_email, t.comment \
     FROM trainings t \
     JOIN sport_types s ON s.id = t.sport_type_id \
     LEFT JOIN users u ON u.id = t.user_id";

pub async fn list_trainings(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<TrainingDetails>>, Error> {
    let query = format!("{DETAILS_SELECT} WHERE t.user_id = ?");
    let rows = sqlx::query_as::<_, TrainingDetails>(&query)
        .bind(user.id)
        .fetch_all(&state.db)
        .await?;
    Ok(Json(rows))
}

pub async fn get_training(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<TrainingDetails>, Error> {
    // Non-owned rows report not-found rather than forbidden so session ids
    // are not disclosed.
    let query = format!("{DETAILS_SELECT} WHERE t.id = ? AND t.user_id = ?");
    let row = sqlx::query_as::<_, TrainingDetails>(&query)
        .bind(id)
        .bind(user.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(Error::not_found)?;
    Ok(Json(row))
}

pub async fn create_training(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(mut payload): Json<NewTraining>,
) -> Result<(StatusCode, Json<Training>), Error> {
    // Ownership is assigned server-side; the client-supplied value is
    // never trusted.
    payload.user_id = Some(user.id);

    let errors = validate_interval(payload.start_time, payload.end_time, Utc::now());
    if !errors.is_empty() {
        return Err(Error::validation(errors));
    }

    let row = sqlx::query_as::<_, Training>(
        "INSERT INTO trainings (start_time, end_time, sport_type_id, user_id, comment) \
         VALUES (?, ?, ?, ?, ?) \
         RETURNING id, start_time, end_time, sport_type_id, user_id, comment",
    )
    .bind(payload.start_time)
    .bind(payload.end_time)
    .bind(payload.sport_type_id)
    .bind(payload.user_id)
    .bind(&payload.comment)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update_training(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTraining>,
) -> Result<Json<Training>, Error> {
    if id != payload.id {
        return Err(Error::not_found());
    }

    let errors = validate_interval(payload.start_time, payload.end_time, Utc::now());
    if !errors.is_empty() {
        return Err(Error::validation(errors));
    }

    let result = sqlx::query(
        "UPDATE trainings SET start_time = ?, end_time = ?, sport_type_id = ?, comment = ? \
         WHERE id = ? AND user_id = ?",
    )
    .bind(payload.start_time)
    .bind(payload.end_time)
    .bind(payload.sport_type_id)
    .bind(&payload.comment)
    .bind(id)
    .bind(user.id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT count(*) FROM trainings WHERE id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(user.id)
        .fetch_one(&state.db)
        .await?;
        if exists == 0 {
            return Err(Error::not_found());
        }
        return Err(Error::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "concurrent update conflict",
        ));
    }

    Ok(Json(Training {
        id,
        start_time: payload.start_time,
        end_time: payload.end_time,
        sport_type_id: payload.sport_type_id,
        user_id: Some(user.id),
        comment: payload.comment,
    }))
}

pub async fn delete_training(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Error> {
    // Idempotent; only the owner's row can match.
    sqlx::query("DELETE FROM trainings WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user.id)
        .execute(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
