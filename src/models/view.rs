use serde::{Deserialize, Serialize};

use super::product::RawProduct;
use crate::discount::apply_discount;

// ---------------------------------------------------------------------------
// ListItemViewModel — One row of the catalog list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemViewModel {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub price: f64,
    pub discount: bool,
}

impl From<RawProduct> for ListItemViewModel {
    fn from(raw: RawProduct) -> Self {
        let display = apply_discount(raw.price);
        Self {
            id: raw.id,
            title: raw.title,
            image_url: raw.image_url,
            price: display.price,
            discount: display.discounted,
        }
    }
}

// ---------------------------------------------------------------------------
// DetailViewModel — Everything the detail pane shows for one product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailViewModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub price: f64,
    pub discount: bool,
}

impl From<RawProduct> for DetailViewModel {
    fn from(raw: RawProduct) -> Self {
        let display = apply_discount(raw.price);
        Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            category: raw.category,
            image_url: raw.image_url,
            price: display.price,
            discount: display.discounted,
        }
    }
}
