use std::env;

pub const DEFAULT_API_BASE: &str = "https://fakestoreapi.com";
pub const API_BASE_ENV: &str = "STOREFRONT_API_BASE";
pub const PRODUCTS_PATH: &str = "products";

pub fn product_path(id: i64) -> String {
    format!("{}/{}", PRODUCTS_PATH, id)
}

/// Base URL of the catalog API, honoring the `STOREFRONT_API_BASE` override.
pub fn api_base() -> String {
    match env::var(API_BASE_ENV) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}
