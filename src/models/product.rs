use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RawProduct — A product record exactly as the catalog API returns it
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub rating: Option<Rating>,
}

// ---------------------------------------------------------------------------
// Rating — Aggregate customer rating attached to a product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: i64,
}
