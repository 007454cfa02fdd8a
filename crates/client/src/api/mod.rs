//! Craftica REST API client.
//!
//! # Architecture
//!
//! - One `reqwest` client behind an `Arc`, cheap to clone
//! - Fixed base URL from [`ClientConfig`], bearer token attached whenever the
//!   [`Session`] holds one
//! - Every response is normalized once at this boundary (see [`normalize`]):
//!   downstream code never re-inspects raw backend shapes
//!
//! # Example
//!
//! ```rust,ignore
//! use craftica_client::api::CrafticaClient;
//! use craftica_client::config::ClientConfig;
//! use craftica_client::models::StoreFilter;
//! use craftica_client::session::Session;
//!
//! let config = ClientConfig::from_env()?;
//! let session = Session::anonymous()?;
//! let client = CrafticaClient::new(&config, session)?;
//!
//! let stores = client
//!     .get_stores(&StoreFilter { city: Some("Madrid".into()), ..Default::default() })
//!     .await?;
//! ```

mod auth;
mod comments;
mod normalize;
mod posts;
mod products;
mod reactions;
mod stores;

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;

/// Page size assumed when a list call does not set `limit`.
pub(crate) const DEFAULT_LIMIT: u32 = 10;

/// Client for the Craftica backend REST API.
///
/// Holds no cache of its own; see `resources` for the cached view.
#[derive(Clone)]
pub struct CrafticaClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl CrafticaClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.base_url.clone(),
                session,
            }),
        })
    }

    /// The session this client attaches tokens from.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.inner.http.get(self.url(path))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.inner.http.post(self.url(path))
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.inner.http.put(self.url(path))
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.inner.http.delete(self.url(path))
    }

    /// Send a request and return the raw JSON body.
    ///
    /// Attaches the bearer token when the session has one. Non-2xx statuses
    /// become [`ApiError::Status`] with the backend's `message` field when
    /// the body parses as JSON.
    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let builder = match self.inner.session.token() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();

        // Read as text first so error bodies are inspectable
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(Value::as_str)
                        .map(String::from)
                });
            tracing::error!(
                status = %status,
                body = %text.chars().take(200).collect::<String>(),
                "backend returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
