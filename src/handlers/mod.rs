pub mod auth;
pub mod middleware;
pub mod sport_types;
pub mod trainings;
