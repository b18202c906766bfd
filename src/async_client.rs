//! Async wrapper around [`StorefrontSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the event loop free while the
//! blocking reqwest client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use storefront_sdk::{AsyncStorefront, ListScreen};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncStorefront::builder().build().await.unwrap();
//!
//!     let mut list = ListScreen::new();
//!     if list.begin() {
//!         list.publish(sdk.fetch_catalog().await);
//!     }
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{Result, StorefrontError};
use crate::models::{DetailViewModel, ListItemViewModel};
use crate::transport::Transport;
use crate::StorefrontSdk;

// ---------------------------------------------------------------------------
// AsyncStorefrontBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncStorefront`] instance.
#[derive(Default)]
pub struct AsyncStorefrontBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Box<dyn Transport>>,
}

impl AsyncStorefrontBuilder {
    /// Set the catalog API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set an HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom [`Transport`] instead of the reqwest client.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is created on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncStorefront> {
        tokio::task::spawn_blocking(move || {
            let mut builder = StorefrontSdk::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.transport = self.transport;
            let sdk = builder.build()?;
            Ok(AsyncStorefront {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncStorefront
// ---------------------------------------------------------------------------

/// Async wrapper around [`StorefrontSdk`].
///
/// Cheap to clone; clones share the same underlying SDK.
#[derive(Clone)]
pub struct AsyncStorefront {
    inner: Arc<StorefrontSdk>,
}

impl AsyncStorefront {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncStorefrontBuilder {
        AsyncStorefrontBuilder::default()
    }

    /// Wrap an already-built SDK.
    pub fn from_sdk(sdk: StorefrontSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StorefrontSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the catalog as list rows.
    pub async fn fetch_catalog(&self) -> Result<Vec<ListItemViewModel>> {
        self.run(|s| s.catalog().fetch()).await
    }

    /// Fetch one product as a detail view model.
    pub async fn fetch_detail(&self, id: i64) -> Result<DetailViewModel> {
        self.run(move |s| s.detail().fetch(id)).await
    }
}
