//! Authentication for the marketplace API
//!
//! Signing in or registering exchanges credentials for a bearer token and
//! user record, then enters the session store so every subsequent request
//! carries `Authorization: Bearer <token>`.

mod types;

use std::sync::Arc;

use crate::error::Error;
use crate::fetch::ApiClient;
use crate::session::{Role, SessionStore, UserData};

pub use types::*;

/// Client for the authentication endpoints
pub struct AuthClient {
    http: Arc<ApiClient>,
    session: Arc<SessionStore>,
}

impl AuthClient {
    /// Create a new AuthClient
    pub(crate) fn new(http: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self { http, session }
    }

    /// Sign in with email and password
    ///
    /// On success the session store is updated and persisted; the returned
    /// identity mirrors what the accessors now report. Accounts without an
    /// explicit role are treated as buyers, matching the backend default.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserData, Error> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: AuthResponse = self
            .http
            .post("/auth/login")
            .json(&credentials)?
            .execute()
            .await?;

        let user = UserData {
            id: response.user.id,
            name: response.user.name,
            email: response.user.email,
            role: response.user.role.unwrap_or(Role::User),
            token: response.token,
        };
        self.session.login(user.clone())?;

        Ok(user)
    }

    /// Register a new account
    ///
    /// A successful registration signs the new account in directly, with
    /// the requested role standing in when the backend omits one.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserData, Error> {
        let response: AuthResponse = self
            .http
            .post("/auth/register")
            .json(request)?
            .execute()
            .await?;

        let user = UserData {
            id: response.user.id,
            name: response.user.name,
            email: response.user.email,
            role: response.user.role.unwrap_or(request.role),
            token: response.token,
        };
        self.session.login(user.clone())?;

        Ok(user)
    }

    /// Sign out the current user
    ///
    /// The backend keeps no session state; signing out clears the local
    /// session and its persisted record. Always succeeds.
    pub fn sign_out(&self) {
        self.session.logout();
    }
}
