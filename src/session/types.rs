//! Types for session state

use serde::{Deserialize, Serialize};

/// The role of the current user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Not signed in; browse-only access
    #[default]
    Guest,

    /// A buyer account
    User,

    /// A seller account
    Seller,

    /// An administrator account
    Admin,
}

impl Role {
    /// The wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }
}

/// A validated, authenticated identity as returned by the auth endpoints
///
/// This is also the shape persisted to durable storage under the `user` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// The user ID
    pub id: u64,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Account role
    pub role: Role,

    /// Bearer token proving authentication
    pub token: String,
}

/// The session state machine
///
/// Either nobody is signed in, or a fully-populated identity is. There is no
/// state with a token but no role, or a role but no token.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    /// Logged out; all accessors report guest defaults
    #[default]
    Anonymous,

    /// Logged in with a complete identity
    Authenticated(UserData),
}

impl Session {
    /// Whether a user is signed in
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// The current role; `Guest` when logged out
    pub fn role(&self) -> Role {
        match self {
            Session::Anonymous => Role::Guest,
            Session::Authenticated(user) => user.role,
        }
    }

    /// The current display name; empty when logged out
    pub fn display_name(&self) -> &str {
        match self {
            Session::Anonymous => "",
            Session::Authenticated(user) => &user.name,
        }
    }

    /// The current bearer token, if signed in
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(&user.token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_reports_guest_defaults() {
        let session = Session::default();
        assert!(!session.is_logged_in());
        assert_eq!(session.role(), Role::Guest);
        assert_eq!(session.display_name(), "");
        assert_eq!(session.token(), None);
    }

    #[test]
    fn role_round_trips_through_serde() {
        for role in [Role::Guest, Role::User, Role::Seller, Role::Admin] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
        }
    }
}
