use axum::{handler::Handler, middleware::from_fn_with_state, routing::get, Router};

use crate::handlers::middleware::auth_middleware;
use crate::handlers::sport_types::{
    create_sport_type, delete_sport_type, get_sport_type, list_sport_types, update_sport_type,
};
use crate::utils::state::AppState;

/// Listing and detail are public; mutations require authentication.
pub fn sport_type_routes(state: AppState) -> Router<AppState> {
    let auth = from_fn_with_state(state, auth_middleware);

    Router::new()
        .route(
            "/",
            get(list_sport_types).post(create_sport_type.layer(auth.clone())),
        )
        .route(
            "/{id}",
            get(get_sport_type)
                .put(update_sport_type.layer(auth.clone()))
                .delete(delete_sport_type.layer(auth)),
        )
}
