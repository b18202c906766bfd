//! Catalog listing: the whole product collection as list rows.

use crate::config;
use crate::error::Result;
use crate::models::{ListItemViewModel, RawProduct};
use crate::transport::{self, Transport};

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// Query interface for the full product collection (`GET /products`).
pub struct CatalogQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> CatalogQuery<'a> {
    /// Create a new `CatalogQuery` bound to the given transport.
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Fetch the raw product records, in the order the API returned them.
    pub fn raw(&self) -> Result<Vec<RawProduct>> {
        transport::get_json(self.transport, config::PRODUCTS_PATH)
    }

    /// Fetch the catalog and map every record into a [`ListItemViewModel`].
    ///
    /// Upstream order and count are preserved. The discount rule is applied
    /// to each record's original price.
    pub fn fetch(&self) -> Result<Vec<ListItemViewModel>> {
        let products = self.raw()?;
        tracing::debug!(count = products.len(), "catalog fetched");
        Ok(products.into_iter().map(ListItemViewModel::from).collect())
    }
}
