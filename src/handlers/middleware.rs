use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use http::{header, StatusCode};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::{
    models::{
        error::Error,
        jwt::{Claims, CurrentUser},
    },
    utils::state::AppState,
};

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, Error> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or((StatusCode::UNAUTHORIZED, "Missing Bearer token"))?;

    let decoding_key = DecodingKey::from_secret(state.config.jwt_secret.as_bytes());

    let decoded = decode::<Claims>(token, &decoding_key, &Validation::default()).map_err(|e| {
        Error::new(
            StatusCode::UNAUTHORIZED,
            &format!("Token validation failed: {}", e),
        )
    })?;

    let user_id = decoded
        .claims
        .sub
        .parse::<i64>()
        .map_err(|_| Error::new(StatusCode::UNAUTHORIZED, "Malformed subject claim"))?;

    req.extensions_mut().insert(CurrentUser {
        id: user_id,
        email: decoded.claims.email,
    });

    Ok(next.run(req).await)
}
