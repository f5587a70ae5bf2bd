use serde::{Deserialize, Serialize};

use crate::session::Identity;

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful credential exchange: the bearer token plus the profile
/// of the account it was issued for.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
}

/// Error body the backend returns on a rejected login.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub msg: Option<String>,
}
