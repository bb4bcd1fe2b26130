//! Hidden Haul Rust Client Library
//!
//! A Rust client for the Hidden Haul second-hand marketplace API, providing
//! session management, the authenticated request pipeline, role-gated
//! navigation, and typed clients for the catalog, cart, checkout and
//! moderation endpoints.

pub mod auth;
pub mod cart;
pub mod categories;
pub mod config;
pub mod error;
pub mod fetch;
pub mod nav;
pub mod orders;
pub mod products;
pub mod session;
pub mod soldout;
pub mod store;

use std::sync::Arc;

use crate::auth::AuthClient;
use crate::cart::CartClient;
use crate::categories::CategoryTree;
use crate::config::ClientOptions;
use crate::fetch::{ApiClient, Navigator, NoopNavigator};
use crate::orders::OrdersClient;
use crate::products::ProductsClient;
use crate::session::SessionStore;
use crate::soldout::SoldOutSet;
use crate::store::{LocalStore, MemoryStore};

/// The main entry point for the Hidden Haul client
///
/// Owns the one session store and HTTP client for the process and hands out
/// per-service sub-clients. Constructing the client hydrates the session
/// from durable storage, so a previously signed-in user is signed in again
/// before the first request goes out.
pub struct HiddenHaul {
    /// Client options
    pub options: ClientOptions,

    /// The shared request pipeline
    http: Arc<ApiClient>,

    /// The process-wide session store
    session: Arc<SessionStore>,

    /// Durable local storage
    store: Arc<dyn LocalStore>,

    /// Products marked sold out in this process
    sold_out: Arc<SoldOutSet>,
}

impl HiddenHaul {
    /// Create a new client against the given API base address
    ///
    /// # Example
    ///
    /// ```
    /// use hiddenhaul::HiddenHaul;
    ///
    /// let client = HiddenHaul::new("http://localhost:8000/api");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self::new_with_options(ClientOptions::default().with_base_url(base_url))
    }

    /// Create a new client with custom options
    ///
    /// Uses process-lifetime storage and ignores the navigate-to-login
    /// signal; embedding shells that need either should use
    /// [`HiddenHaul::new_with_parts`].
    ///
    /// # Example
    ///
    /// ```
    /// use hiddenhaul::{HiddenHaul, config::ClientOptions};
    ///
    /// let options = ClientOptions::from_env().with_persist_session(true);
    /// let client = HiddenHaul::new_with_options(options);
    /// ```
    pub fn new_with_options(options: ClientOptions) -> Self {
        Self::new_with_parts(options, Arc::new(MemoryStore::new()), Arc::new(NoopNavigator))
    }

    /// Create a new client with injected storage and navigation
    ///
    /// `store` supplies the durable key-value storage for the session
    /// record and category tree; `navigator` receives the navigate-to-login
    /// side effect fired on an authentication failure.
    pub fn new_with_parts(
        options: ClientOptions,
        store: Arc<dyn LocalStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let session = Arc::new(SessionStore::new(store.clone(), options.persist_session));
        session.restore_on_start();

        let http = Arc::new(ApiClient::new(&options, session.clone(), navigator));

        Self {
            options,
            http,
            session,
            store,
            sold_out: Arc::new(SoldOutSet::new()),
        }
    }

    /// The session store for the current user
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Client for the authentication endpoints
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.http.clone(), self.session.clone())
    }

    /// Client for the product endpoints
    pub fn products(&self) -> ProductsClient {
        ProductsClient::new(self.http.clone())
    }

    /// Client for the cart endpoints
    pub fn cart(&self) -> CartClient {
        CartClient::new(self.http.clone())
    }

    /// Client for the order endpoints
    pub fn orders(&self) -> OrdersClient {
        OrdersClient::new(self.http.clone())
    }

    /// The sold-out set for this process
    pub fn sold_out(&self) -> &SoldOutSet {
        &self.sold_out
    }

    /// The admin category tree, hydrated from durable storage
    pub fn categories(&self) -> CategoryTree {
        CategoryTree::load(self.store.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::session::Role;
    pub use crate::HiddenHaul;
}
