//! Shared test fixtures for the storefront SDK integration tests.
//!
//! Provides `ScriptedTransport`, an in-memory [`Transport`] that serves canned
//! responses by path and records every path it was asked for, plus a small
//! sample catalog.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use storefront_sdk::{Result, StorefrontSdk, Transport, TransportResponse};

/// In-memory transport. Unknown paths answer 404.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    routes: HashMap<String, TransportResponse>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(mut self, path: &str, body: Value) -> Self {
        self.routes
            .insert(path.to_string(), TransportResponse::new(200, body.to_string()));
        self
    }

    pub fn raw(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(path.to_string(), TransportResponse::new(status, body));
        self
    }

    /// Handle onto the recorded request paths; survives moving the transport
    /// into an SDK.
    pub fn requests(&self) -> Arc<Mutex<Vec<String>>> {
        self.requests.clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, path: &str) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(path.to_string());
        Ok(self
            .routes
            .get(path)
            .cloned()
            .unwrap_or_else(|| TransportResponse::new(404, "")))
    }

    fn describe(&self, path: &str) -> String {
        format!("scripted://{}", path)
    }
}

pub fn sample_product(id: i64, title: &str, price: f64) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("Description of {}", title),
        "category": "electronics",
        "image": format!("https://img.example/{}.jpg", id),
        "rating": { "rate": 4.1, "count": 120 }
    })
}

/// Three products: one above the threshold, one on it, one below.
pub fn sample_catalog() -> Value {
    serde_json::json!([
        sample_product(1, "Backpack", 109.95),
        sample_product(2, "Slim Fit T-Shirt", 50.0),
        sample_product(3, "Cotton Jacket", 19.99),
    ])
}

/// Transport serving the sample catalog plus each product individually.
pub fn sample_transport() -> ScriptedTransport {
    let mut transport = ScriptedTransport::new().json("products", sample_catalog());
    if let Value::Array(items) = sample_catalog() {
        for item in items {
            let id = item["id"].as_i64().unwrap();
            transport = transport.json(&format!("products/{}", id), item);
        }
    }
    transport
}

pub fn sdk_with(transport: ScriptedTransport) -> StorefrontSdk {
    StorefrontSdk::builder().transport(transport).build().unwrap()
}
