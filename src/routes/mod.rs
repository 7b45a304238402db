pub mod auth;
pub mod sport_types;
pub mod trainings;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{error::Error, str::FromStr};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub use auth::auth_routes;
pub use sport_types::sport_type_routes;
pub use trainings::training_routes;

use crate::utils::{config::Config, state::AppState};

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

pub async fn make_app() -> Result<Router, Box<dyn Error>> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_PKG_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();

    info!("Initializing application...");
    let config = Config::init();

    info!("Configuration loaded successfully");
    // foreign_keys is per-connection in SQLite and backs the catalog's
    // cascade delete.
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(10))
        .connect_with(connect_options)
        .await?;

    info!("Database connection pool created successfully");
    MIGRATOR.run(&db_pool).await?;
    info!("Migrations applied successfully");

    let state = AppState {
        db: db_pool,
        config,
    };

    Ok(build_router(state))
}

/// Router assembly, separated from environment setup so tests can inject
/// their own pool and config.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", auth_routes())
        .nest("/sport-types", sport_type_routes(state.clone()))
        .nest("/trainings", training_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({"message": "Training log API"}))
}
