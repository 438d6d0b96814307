//! Poly Pizza HTTP client.
//!
//! A thin async wrapper around `reqwest` that knows the API base URL and the
//! auth token. It only performs GET requests and hands the decoded JSON back
//! untouched.

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::error::ToolError;
use crate::core::config::{CredentialsConfig, UpstreamConfig};
use crate::core::error::{Error, Result};

/// Header carrying the API token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// An upstream request target, relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Raw path segments; each is percent-encoded when the URL is built.
    segments: Vec<String>,

    /// Already-encoded query string, without the leading `?`.
    query: Option<String>,
}

impl Endpoint {
    /// Create an endpoint from raw (unencoded) path segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: None,
        }
    }

    /// Attach an encoded query string. `None` leaves the query off entirely.
    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    /// The raw path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The encoded query string, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Resolve this endpoint against `base`.
    ///
    /// Segments are appended to the base path (`/v1.1` + `/model/{id}`), and
    /// each segment is percent-encoded so a space becomes `%20` and a `/`
    /// cannot introduce extra path levels.
    pub fn url(&self, base: &Url) -> std::result::Result<Url, ToolError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| ToolError::encode(format!("base URL cannot take a path: {base}")))?
            .pop_if_empty()
            .extend(&self.segments);
        url.set_query(self.query.as_deref());
        Ok(url)
    }
}

/// Async client for the Poly Pizza REST API.
#[derive(Clone)]
pub struct PolyPizzaClient {
    http: reqwest::Client,
    base_url: Url,
    auth_token: String,
}

impl std::fmt::Debug for PolyPizzaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolyPizzaClient")
            .field("base_url", &self.base_url.as_str())
            .field("auth_token", &"[REDACTED]")
            .finish()
    }
}

impl PolyPizzaClient {
    /// Build a client from configuration.
    ///
    /// Fails if the base URL does not parse or cannot carry a path.
    pub fn new(upstream: &UpstreamConfig, credentials: &CredentialsConfig) -> Result<Self> {
        let base_url = Url::parse(&upstream.base_url).map_err(|e| {
            Error::config(format!("Invalid API base URL '{}': {}", upstream.base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Invalid API base URL '{}': not a hierarchical URL",
                upstream.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            auth_token: credentials.auth_token.clone(),
        })
    }

    /// The base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a GET for `endpoint` and decode the body as JSON.
    ///
    /// Non-2xx statuses become [`ToolError::Upstream`], connection failures
    /// [`ToolError::Network`], and unparseable bodies [`ToolError::Decode`].
    #[instrument(skip(self))]
    pub async fn get(&self, endpoint: &Endpoint) -> std::result::Result<Value, ToolError> {
        let url = endpoint.url(&self.base_url)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTH_HEADER, &self.auth_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::upstream(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
