use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::handlers::middleware::auth_middleware;
use crate::handlers::trainings::{
    create_training, delete_training, get_training, list_trainings, update_training,
};
use crate::utils::state::AppState;

/// The whole training log is gated: listings are filtered to the caller and
/// per-row operations require ownership.
pub fn training_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_trainings).post(create_training))
        .route(
            "/{id}",
            get(get_training)
                .put(update_training)
                .delete(delete_training),
        )
        .layer(from_fn_with_state(state, auth_middleware))
}
