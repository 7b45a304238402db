pub mod error;
pub mod jwt;
pub mod sport_type;
pub mod training;
pub mod user;
