pub mod config;
pub mod hash_password;
pub mod jwt_encode;
pub mod state;
