//! Single product lookups (`GET /products/{id}`).

use crate::config;
use crate::error::{Result, StorefrontError};
use crate::models::{DetailViewModel, RawProduct};
use crate::transport::{self, Transport};

// ---------------------------------------------------------------------------
// DetailQuery
// ---------------------------------------------------------------------------

/// Query interface for one product by identifier.
pub struct DetailQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> DetailQuery<'a> {
    /// Create a new `DetailQuery` bound to the given transport.
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Fetch the raw record for `id`.
    ///
    /// Fails with [`StorefrontError::NotFound`] when the API reports 404 or
    /// answers with an empty body.
    pub fn raw(&self, id: i64) -> Result<RawProduct> {
        transport::get_json_resource(self.transport, &config::product_path(id))
    }

    /// Fetch `id` and map it into a [`DetailViewModel`].
    pub fn fetch(&self, id: i64) -> Result<DetailViewModel> {
        let product = self.raw(id)?;
        if product.id != id {
            return Err(StorefrontError::NotFound(format!(
                "requested product {} but the API returned {}",
                id, product.id
            )));
        }
        Ok(DetailViewModel::from(product))
    }

    /// Like [`fetch`](Self::fetch), but maps "not found" to `None`.
    pub fn get(&self, id: i64) -> Result<Option<DetailViewModel>> {
        match self.fetch(id) {
            Ok(detail) => Ok(Some(detail)),
            Err(StorefrontError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
