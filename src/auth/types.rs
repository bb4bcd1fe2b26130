//! Types for the authentication endpoints

use serde::{Deserialize, Serialize};

use crate::session::Role;

/// Sign-in credentials
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Registration request
///
/// The role is chosen up front; buyers and sellers self-register, admin
/// accounts are provisioned server-side.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,

    /// Phone number
    pub phone: String,

    /// Delivery address
    pub address: String,

    /// Email address
    pub email: String,

    /// Password
    pub password: String,

    /// Requested account role
    pub role: Role,
}

/// The user record returned by the auth endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    /// The user ID
    pub id: u64,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Account role; absent for accounts created before roles existed
    #[serde(default)]
    pub role: Option<Role>,
}

/// Response from the sign-in and registration endpoints
///
/// Unlike the data endpoints, the auth endpoints return the token and user
/// at the top level rather than inside the `data` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// The bearer token for subsequent requests
    pub token: String,

    /// The authenticated user
    pub user: AuthUser,
}
