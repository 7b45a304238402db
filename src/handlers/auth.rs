use axum::{extract::State, Json};
use http::StatusCode;
use serde_json::{json, Value};

use crate::{
    models::{
        error::{Error, FieldError},
        user::{LoginUser, RegisterUser, User},
    },
    utils::{
        hash_password::{hash_password, verify_password},
        jwt_encode::jwt_encode,
        state::AppState,
    },
};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUser>,
) -> Result<(StatusCode, Json<Value>), Error> {
    let mut errors = Vec::new();
    if payload.email.is_empty() {
        errors.push(FieldError::new("email", "email is required"));
    }
    if payload.password.is_empty() {
        errors.push(FieldError::new("password", "password is required"));
    }
    if !errors.is_empty() {
        return Err(Error::validation(errors));
    }

    let hashed = hash_password(&payload.password)
        .map_err(|e| Error::new(StatusCode::INTERNAL_SERVER_ERROR, &e))?;

    let inserted = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, username, password_hash) VALUES (?, ?, ?)
         RETURNING id, email, username, password_hash, created_at",
    )
    .bind(&payload.email)
    .bind(&payload.username)
    .bind(&hashed)
    .fetch_one(&state.db)
    .await;

    let user = match inserted {
        Ok(user) => user,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(Error::validation(vec![FieldError::new(
                "email",
                "email is already registered",
            )]));
        }
        Err(e) => return Err(e.into()),
    };

    let token = jwt_encode(user.id, &user.email, &state.config.jwt_secret)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered",
            "data": { "access_token": token, "user": user }
        })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginUser>,
) -> Result<Json<Value>, Error> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, username, password_hash, created_at FROM users WHERE email = ?",
    )
    .bind(&payload.email)
    .fetch_optional(&state.db)
    .await?
    .ok_or((StatusCode::UNAUTHORIZED, "Invalid email or password"))?;

    if !verify_password(&payload.password, &user.password_hash) {
        return Err(Error::new(
            StatusCode::UNAUTHORIZED,
            "Invalid email or password",
        ));
    }

    let token = jwt_encode(user.id, &user.email, &state.config.jwt_secret)?;

    Ok(Json(json!({
        "message": "Login successful",
        "data": { "access_token": token, "user": user }
    })))
}
