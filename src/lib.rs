//! Storefront SDK for Rust.
//!
//! Fetches products from a remote catalog API and shapes them into view
//! models for a two-screen storefront: a product list and a product detail
//! pane. Prices above the discount threshold are shown discounted.
//!
//! # Quick start
//!
//! ```no_run
//! use storefront_sdk::StorefrontSdk;
//!
//! let sdk = StorefrontSdk::builder().build().unwrap();
//!
//! // Every product, as list rows
//! let items = sdk.catalog().fetch().unwrap();
//!
//! // One product, as a detail view model
//! let detail = sdk.detail().fetch(items[0].id).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod discount;
pub mod error;
pub mod models;
pub mod navigation;
pub mod presentation;
pub mod queries;
pub mod screen;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::AsyncStorefront;
pub use discount::{apply_discount, DiscountedPrice};
pub use error::{ErrorKind, Result, StorefrontError};
pub use models::{DetailViewModel, ListItemViewModel, RawProduct};
pub use navigation::{Navigator, Route};
pub use screen::{DetailScreen, ListScreen, LoadFailure, LoadState};
pub use transport::{HttpTransport, Transport, TransportResponse};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// StorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StorefrontSdk`] instance.
///
/// Use [`StorefrontSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StorefrontSdkBuilder::build) to create the SDK.
#[derive(Default)]
pub struct StorefrontSdkBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Box<dyn Transport>>,
}

impl StorefrontSdkBuilder {
    /// Set the catalog API base URL.
    ///
    /// If not set, `STOREFRONT_API_BASE` is consulted, then the public
    /// default (`https://fakestoreapi.com`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set an HTTP request timeout.
    ///
    /// By default requests have no timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom [`Transport`] instead of the reqwest client.
    ///
    /// `base_url` and `timeout` are ignored when a transport is supplied.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the SDK. No request is made until a query runs.
    pub fn build(self) -> Result<StorefrontSdk> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let base_url = self.base_url.unwrap_or_else(config::api_base);
                Box::new(HttpTransport::new(&base_url, self.timeout)?)
            }
        };
        Ok(StorefrontSdk { transport })
    }
}

// ---------------------------------------------------------------------------
// StorefrontSdk
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Owns a [`Transport`] and exposes the catalog and detail queries as
/// lightweight borrowing wrappers.
pub struct StorefrontSdk {
    transport: Box<dyn Transport>,
}

impl StorefrontSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StorefrontSdkBuilder {
        StorefrontSdkBuilder::default()
    }

    /// Access the catalog (product list) query interface.
    pub fn catalog(&self) -> queries::CatalogQuery<'_> {
        queries::CatalogQuery::new(self.transport.as_ref())
    }

    /// Access the single-product query interface.
    pub fn detail(&self) -> queries::DetailQuery<'_> {
        queries::DetailQuery::new(self.transport.as_ref())
    }
}

impl fmt::Display for StorefrontSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorefrontSdk(api={})", self.transport.describe(""))
    }
}
