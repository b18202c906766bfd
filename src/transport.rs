//! HTTP transport for the catalog API.
//!
//! The SDK talks to the network through the [`Transport`] trait so callers
//! (and tests) can swap the reqwest-backed [`HttpTransport`] for anything that
//! can answer a `GET`.

use crate::error::{Result, StorefrontError};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Status and body of a completed `GET`.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A blocking `GET` against a path relative to the API base URL.
///
/// Implementations only fail for transport-level problems; non-success
/// statuses are returned as regular responses.
pub trait Transport: Send + Sync {
    fn get(&self, path: &str) -> Result<TransportResponse>;

    /// Human-readable location of `path`, used in error messages.
    fn describe(&self, path: &str) -> String {
        path.to_string()
    }
}

/// Fetch `path` and decode the body as `T`.
///
/// Any non-success status becomes [`StorefrontError::Status`]; a body that
/// does not decode as `T` (including an empty one) is a JSON error.
pub fn get_json<T: DeserializeOwned>(transport: &dyn Transport, path: &str) -> Result<T> {
    let resp = send(transport, path)?;
    if !resp.is_success() {
        return Err(status_error(transport, path, &resp));
    }
    Ok(serde_json::from_str(resp.body.trim())?)
}

/// Fetch a single resource at `path` and decode it as `T`.
///
/// A 404, or a success whose body is empty or `null`, becomes
/// [`StorefrontError::NotFound`]. Other statuses and decode failures behave
/// as in [`get_json`].
pub fn get_json_resource<T: DeserializeOwned>(transport: &dyn Transport, path: &str) -> Result<T> {
    let resp = send(transport, path)?;
    if resp.status == 404 {
        return Err(StorefrontError::NotFound(transport.describe(path)));
    }
    if !resp.is_success() {
        return Err(status_error(transport, path, &resp));
    }

    let body = resp.body.trim();
    if body.is_empty() || body == "null" {
        return Err(StorefrontError::NotFound(transport.describe(path)));
    }
    Ok(serde_json::from_str(body)?)
}

fn send(transport: &dyn Transport, path: &str) -> Result<TransportResponse> {
    tracing::debug!(url = %transport.describe(path), "GET");
    transport.get(path)
}

fn status_error(transport: &dyn Transport, path: &str, resp: &TransportResponse) -> StorefrontError {
    StorefrontError::Status {
        status: resp.status,
        url: transport.describe(path),
    }
}

/// [`Transport`] backed by a blocking reqwest client.
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport rooted at `base_url`.
    ///
    /// `timeout` of `None` disables the request timeout entirely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(StorefrontError::InvalidArgument(
                "base URL must not be empty".into(),
            ));
        }
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str) -> Result<TransportResponse> {
        let resp = self.client.get(self.url(path)).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(TransportResponse { status, body })
    }

    fn describe(&self, path: &str) -> String {
        self.url(path)
    }
}
