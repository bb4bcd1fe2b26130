//! HTTP client abstraction for talking to the marketplace API
//!
//! Every request goes through [`ApiClient`], which attaches the current
//! bearer token, fills in the JSON content type unless the body is a
//! multipart form, and reacts to HTTP 401 by clearing the session and
//! steering the embedding shell to the login route. Service clients never
//! repeat any of this.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{multipart, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::session::SessionStore;

/// Receiver for the navigate-to-login side effect fired on HTTP 401
///
/// The embedding shell installs an implementation that drives its router;
/// the default [`NoopNavigator`] ignores the signal.
pub trait Navigator: Send + Sync {
    /// Steer the user interface to the login route
    fn navigate_to_login(&self);
}

/// A [`Navigator`] that ignores the signal
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate_to_login(&self) {}
}

/// The JSON success envelope used by the marketplace API
///
/// Payloads arrive as `{ "data": ... }`; service clients resolve the
/// envelope once at the boundary instead of re-probing per call site.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    /// The wrapped payload; absent on empty responses
    pub data: Option<T>,
}

/// Preconfigured request sender for the marketplace API
pub struct ApiClient {
    /// The API base address
    base_url: String,

    /// HTTP client used for requests
    client: Client,

    /// The session supplying the bearer token
    session: Arc<SessionStore>,

    /// Sink for the navigate-to-login side effect
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Create a new client from the given options
    pub(crate) fn new(
        options: &ClientOptions,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            log::warn!("failed to apply client options, using defaults: {}", e);
            Client::new()
        });

        Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            client,
            session,
            navigator,
        }
    }

    /// Create a GET request for an API path
    pub fn get(&self, path: &str) -> ApiRequest<'_> {
        ApiRequest::new(self, Method::GET, path)
    }

    /// Create a POST request for an API path
    pub fn post(&self, path: &str) -> ApiRequest<'_> {
        ApiRequest::new(self, Method::POST, path)
    }

    /// Create a PUT request for an API path
    pub fn put(&self, path: &str) -> ApiRequest<'_> {
        ApiRequest::new(self, Method::PUT, path)
    }

    /// Create a DELETE request for an API path
    pub fn delete(&self, path: &str) -> ApiRequest<'_> {
        ApiRequest::new(self, Method::DELETE, path)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Global reaction to an authentication-failure response: purge the
    /// persisted session, reset to guest, and fire the navigation signal
    /// exactly once per failing response.
    fn handle_auth_failure(&self) {
        self.session.handle_auth_failure();
        self.navigator.navigate_to_login();
    }
}

enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Multipart(multipart::Form),
}

/// Helper for building and executing a single request
pub struct ApiRequest<'a> {
    api: &'a ApiClient,
    method: Method,
    url: String,
    headers: HeaderMap,
    query_params: Option<HashMap<String, String>>,
    body: RequestBody,
}

impl<'a> ApiRequest<'a> {
    fn new(api: &'a ApiClient, method: Method, path: &str) -> Self {
        Self {
            api,
            method,
            url: api.url(path),
            headers: HeaderMap::new(),
            query_params: None,
            body: RequestBody::Empty,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            reqwest::header::HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add query parameters to the request
    pub fn query(mut self, params: HashMap<String, String>) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Attach a JSON body
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        self.body = RequestBody::Json(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Attach a multipart form body
    ///
    /// The multipart content declaration is preserved as-is; the default
    /// JSON content type is not applied.
    pub fn multipart(mut self, form: multipart::Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    async fn send(self) -> Result<reqwest::Response, Error> {
        let mut url = Url::parse(&self.url)?;
        if let Some(params) = &self.query_params {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        let mut req = self.api.client.request(self.method.clone(), url.as_str());

        let mut headers = self.headers;
        match self.body {
            RequestBody::Multipart(form) => {
                // The form supplies its own multipart content type with the
                // boundary; it must not be overwritten with JSON.
                req = req.multipart(form);
            }
            RequestBody::Json(bytes) => {
                headers
                    .entry(CONTENT_TYPE)
                    .or_insert(HeaderValue::from_static("application/json"));
                req = req.body(bytes);
            }
            RequestBody::Empty => {
                headers
                    .entry(CONTENT_TYPE)
                    .or_insert(HeaderValue::from_static("application/json"));
            }
        }
        req = req.headers(headers);

        // The in-memory session is the authoritative token source.
        if let Some(token) = self.api.session.token() {
            req = req.bearer_auth(token);
        }

        log::debug!("{} {}", self.method, url);
        let response = req.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.api.handle_auth_failure();
            let message = response.text().await.unwrap_or_default();
            return Err(Error::api(401, message));
        }

        Ok(response)
    }

    /// Execute the request and parse the response body as JSON
    pub async fn execute<T: DeserializeOwned>(self) -> Result<T, Error> {
        let response = self.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(Error::api(status, message));
        }

        Ok(response.json::<T>().await?)
    }

    /// Execute the request, check for success, and discard the body
    pub async fn execute_empty(self) -> Result<(), Error> {
        let response = self.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(Error::api(status, message));
        }

        Ok(())
    }

    /// Execute the request and return the raw response
    ///
    /// Authentication failures are still intercepted; any other status is
    /// handed back unchecked.
    pub async fn execute_raw(self) -> Result<reqwest::Response, Error> {
        self.send().await
    }
}
