//! Product summary types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Condition of a listed product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    New,
    Used,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(Condition::New),
            "used" => Some(Condition::Used),
            _ => None,
        }
    }

    /// Label shown on listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Condition::New => "Nuevo",
            Condition::Used => "Usado",
        }
    }
}

/// Monthly installment offer shown on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Installments {
    /// Number of installments.
    pub quantity: u32,
    /// Amount per installment.
    pub amount: Money,
    /// Interest rate, absent when interest-free.
    #[serde(default)]
    pub rate: Option<f64>,
}

impl Installments {
    /// Interest-free installments ("sin interés").
    pub fn is_interest_free(&self) -> bool {
        self.rate.map(|r| r == 0.0).unwrap_or(true)
    }
}

/// Shipping options of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShippingInfo {
    pub free_shipping: bool,
    #[serde(default)]
    pub store_pick_up: bool,
}

/// Aggregated review score of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reviews {
    pub rating_average: f64,
    pub total: u32,
}

/// The catalog fields a listing card shows, and exactly what the cart
/// snapshots when a product is added.
///
/// Cart entries hold an owned copy of this struct: price or title changes
/// in the catalog after the add never reach items already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Catalog identifier.
    pub id: ProductId,
    /// Listing title.
    pub title: String,
    /// Current price.
    pub price: Money,
    /// Pre-discount price, when the listing is on sale.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// New or used.
    #[serde(default)]
    pub condition: Condition,
    /// Stock available at snapshot time. Clamping cart quantities against
    /// it is the calling UI's job, not the cart's.
    #[serde(default)]
    pub available_quantity: u32,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Installment offer, when the listing has one.
    #[serde(default)]
    pub installments: Option<Installments>,
    /// Shipping options.
    #[serde(default)]
    pub shipping: Option<ShippingInfo>,
    /// Review score.
    #[serde(default)]
    pub reviews: Option<Reviews>,
}

impl ProductSummary {
    /// Create a summary with the required fields.
    pub fn new(id: ProductId, title: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            original_price: None,
            condition: Condition::New,
            available_quantity: 1,
            thumbnail: None,
            installments: None,
            shipping: None,
            reviews: None,
        }
    }

    /// Whether the listing can currently be bought.
    pub fn in_stock(&self) -> bool {
        self.available_quantity > 0
    }

    /// Whether the listing shows a crossed-out original price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| orig.amount_minor > self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Discount percentage against the original price, when on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|orig| {
            if orig.amount_minor > self.price.amount_minor && orig.amount_minor > 0 {
                let savings = orig.amount_minor - self.price.amount_minor;
                Some((savings as f64 / orig.amount_minor as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Whether shipping is free for this listing.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.map(|s| s.free_shipping).unwrap_or(false)
    }
}
