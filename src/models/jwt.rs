use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified.
    pub sub: String,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

/// The authenticated identity, inserted into request extensions by the auth
/// middleware and threaded into handlers as an explicit argument.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
}
