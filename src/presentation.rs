//! Small helpers for whatever renders the view models.

use crate::models::{DetailViewModel, ListItemViewModel};

/// How a price should be emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTone {
    /// Shown highlighted (green).
    Discounted,
    /// Shown plainly (black).
    Regular,
}

impl PriceTone {
    pub fn from_discount(discount: bool) -> Self {
        if discount {
            PriceTone::Discounted
        } else {
            PriceTone::Regular
        }
    }
}

/// Dollar label for a display price: `$48`, `$19.99`.
pub fn price_label(price: f64) -> String {
    format!("${}", price)
}

/// Stable key for a list row.
pub fn row_key(item: &ListItemViewModel) -> String {
    item.id.to_string()
}

impl ListItemViewModel {
    pub fn price_label(&self) -> String {
        price_label(self.price)
    }

    pub fn price_tone(&self) -> PriceTone {
        PriceTone::from_discount(self.discount)
    }
}

impl DetailViewModel {
    pub fn price_label(&self) -> String {
        price_label(self.price)
    }

    pub fn price_tone(&self) -> PriceTone {
        PriceTone::from_discount(self.discount)
    }
}
