use axum::{
    extract::{Path, State},
    Json,
};
use http::StatusCode;

use crate::{
    models::{
        error::Error,
        sport_type::{validate_name, NewSportType, SportType},
    },
    utils::state::AppState,
};

pub async fn list_sport_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<SportType>>, Error> {
    // Store-native order; callers must not assume one.
    let rows = sqlx::query_as::<_, SportType>("SELECT id, name FROM sport_types")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(rows))
}

pub async fn get_sport_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SportType>, Error> {
    let row = sqlx::query_as::<_, SportType>("SELECT id, name FROM sport_types WHERE id = ?")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(Error::not_found)?;
    Ok(Json(row))
}

pub async fn create_sport_type(
    State(state): State<AppState>,
    Json(payload): Json<NewSportType>,
) -> Result<(StatusCode, Json<SportType>), Error> {
    let errors = validate_name(&payload.name);
    if !errors.is_empty() {
        return Err(Error::validation(errors));
    }

    let row = sqlx::query_as::<_, SportType>(
        "INSERT INTO sport_types (name) VALUES (?) RETURNING id, name",
    )
    .bind(&payload.name)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update_sport_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SportType>,
) -> Result<Json<SportType>, Error> {
    if id != payload.id {
        return Err(Error::not_found());
    }

    let errors = validate_name(&payload.name);
    if !errors.is_empty() {
        return Err(Error::validation(errors));
    }

    let result = sqlx::query("UPDATE sport_types SET name = ? WHERE id = ?")
        .bind(&payload.name)
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        // Conflict is resolved as not-found only when the row is gone.
        let exists = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM sport_types WHERE id = ?")
            .bind(id)
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

    Ok(Json(payload))
}

pub async fn delete_sport_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Error> {
    // Idempotent: deleting an absent row is a no-op success. Referencing
    // trainings are removed by the store's cascade.
    sqlx::query("DELETE FROM sport_types WHERE id = ?")
        .bind(id)
        .execute(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
