//! Session management
//!
//! A single [`SessionStore`] per client process holds the current identity
//! and bridges it to durable storage. Every page-level consumer reads it
//! through the accessors; the only writers are [`SessionStore::login`],
//! [`SessionStore::logout`] and the authentication-failure path driven by
//! the HTTP layer.

mod types;

use std::sync::{Arc, Mutex};

use crate::error::Error;
use crate::store::{keys, LocalStore};

pub use types::*;

/// Process-wide authentication state with durable persistence
pub struct SessionStore {
    /// The current session; replaced wholesale on every transition
    session: Mutex<Session>,

    /// Durable storage for the persisted session record
    store: Arc<dyn LocalStore>,

    /// Whether transitions are mirrored to durable storage
    persist: bool,
}

impl SessionStore {
    /// Create a new store in the logged-out state
    pub(crate) fn new(store: Arc<dyn LocalStore>, persist: bool) -> Self {
        Self {
            session: Mutex::new(Session::Anonymous),
            store,
            persist,
        }
    }

    /// Enter the authenticated state with a validated identity
    ///
    /// Persists the full record under the `user` key and the bare token
    /// under the `token` key before the in-memory state is replaced, so a
    /// storage failure never leaves a session that would not survive a
    /// restart.
    pub fn login(&self, user: UserData) -> Result<(), Error> {
        if user.token.is_empty() {
            return Err(Error::auth("login requires a non-empty token"));
        }
        let mut session = self.session.lock().unwrap();
        if self.persist {
            self.store.set(keys::USER, &serde_json::to_string(&user)?)?;
            self.store.set(keys::TOKEN, &user.token)?;
        }
        *session = Session::Authenticated(user);
        Ok(())
    }

    /// Reset to the logged-out state and remove the persisted record
    ///
    /// Always succeeds; calling while already logged out is a no-op. A
    /// failure to remove the durable record is logged and otherwise ignored
    /// so the in-memory state is never left authenticated.
    pub fn logout(&self) {
        let mut session = self.session.lock().unwrap();
        *session = Session::Anonymous;
        self.purge();
    }

    /// React to an authentication-failure signal from the HTTP layer
    pub(crate) fn handle_auth_failure(&self) {
        log::warn!("authentication failure: clearing session");
        self.logout();
    }

    /// Hydrate the session from durable storage at process start
    ///
    /// A structurally valid record with a non-empty token re-enters
    /// [`SessionStore::login`]; anything else is purged and the session is
    /// left logged out. Never propagates a parse failure outward.
    pub fn restore_on_start(&self) {
        let raw = match self.store.get(keys::USER) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                log::warn!("failed to read persisted session: {}", e);
                return;
            }
        };
        match serde_json::from_str::<UserData>(&raw) {
            Ok(user) if !user.token.is_empty() => {
                if let Err(e) = self.login(user) {
                    log::warn!("failed to restore persisted session: {}", e);
                }
            }
            Ok(_) => {
                log::warn!("persisted session has no token; discarding");
                self.purge();
            }
            Err(e) => {
                log::warn!("persisted session is malformed; discarding: {}", e);
                self.purge();
            }
        }
    }

    /// Whether a user is signed in
    pub fn is_logged_in(&self) -> bool {
        self.session.lock().unwrap().is_logged_in()
    }

    /// The current role; `Guest` when logged out
    pub fn role(&self) -> Role {
        self.session.lock().unwrap().role()
    }

    /// The current display name; empty when logged out
    pub fn display_name(&self) -> String {
        self.session.lock().unwrap().display_name().to_string()
    }

    /// The current bearer token, if signed in
    ///
    /// The in-memory session is the authoritative token source for outgoing
    /// requests; the duplicated `token` storage key is a write-through
    /// shadow kept only so the purge semantics match the persisted state.
    pub fn token(&self) -> Option<String> {
        self.session.lock().unwrap().token().map(str::to_string)
    }

    /// A snapshot of the current session state
    pub fn snapshot(&self) -> Session {
        self.session.lock().unwrap().clone()
    }

    fn purge(&self) {
        for key in [keys::USER, keys::TOKEN] {
            if let Err(e) = self.store.remove(key) {
                log::warn!("failed to remove stored {}: {}", key, e);
            }
        }
    }
}
