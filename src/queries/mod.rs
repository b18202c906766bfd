//! Query modules for the storefront SDK.
//!
//! Each module provides a query struct that borrows the SDK's
//! [`Transport`](crate::transport::Transport), performs a single round trip
//! and maps the raw records into view models.

pub mod catalog;
pub mod detail;

pub use catalog::CatalogQuery;
pub use detail::DetailQuery;
