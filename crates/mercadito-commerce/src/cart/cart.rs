//! Cart state and derived totals.

use crate::catalog::ProductSummary;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One line of the cart: a product snapshot plus a quantity.
///
/// The snapshot is an owned copy taken when the product was added, so
/// catalog edits after that point never reach entries already in the
/// cart. Quantity is at least 1 for as long as the entry exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    pub product: ProductSummary,
    pub quantity: u32,
}

impl CartEntry {
    /// Price × quantity for this line, clamped at the representable range.
    pub fn line_total(&self) -> Money {
        self.product.price.saturating_mul(self.quantity as i64)
    }
}

/// The client-local order draft.
///
/// Entries stay in insertion order and are unique by product id. The
/// sequence is only reachable through the named operations, all of which
/// are total: requests that would break an invariant are ignored rather
/// than rejected with an error.
///
/// Serializes transparently as its entry sequence, which is the shape the
/// persisted snapshot takes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// An entry already holding this product id has its quantity raised
    /// in place; its position and stored snapshot are kept. Adding zero
    /// units leaves the cart untouched.
    ///
    /// Stock is not consulted here: clamping against
    /// `available_quantity` is the calling UI's responsibility.
    pub fn add_item(&mut self, product: ProductSummary, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(entry) = self.entry_mut(&product.id) {
            entry.quantity = entry.quantity.saturating_add(quantity);
            return;
        }
        self.entries.push(CartEntry { product, quantity });
    }

    /// Remove the entry for `product_id`. Removing an absent id is a
    /// no-op, not an error.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.entries.retain(|e| &e.product.id != product_id);
    }

    /// Set the quantity of an existing entry.
    ///
    /// Absent ids and quantities below 1 are ignored: the cart never
    /// auto-deletes on zero, callers express deletion through
    /// [`Cart::remove_item`].
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(entry) = self.entry_mut(product_id) {
            entry.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Look up the entry for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.product.id == product_id)
    }

    /// Whether the cart holds this product.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_items(&self) -> usize {
        self.entries.len()
    }

    /// Sum of quantities across entries (the header badge count).
    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|e| e.quantity as u64).sum()
    }

    /// Undiscounted Σ price × quantity.
    ///
    /// Carts hold a single currency; the total takes its currency from
    /// the first entry and is zero in the default currency when empty.
    pub fn total_price(&self) -> Money {
        let currency = self
            .entries
            .first()
            .map(|e| e.product.price.currency)
            .unwrap_or_default();
        self.entries
            .iter()
            .fold(Money::zero(currency), |acc, e| {
                acc.saturating_add_amount(&e.line_total())
            })
    }

    /// Restore invariants over deserialized state: zero-quantity entries
    /// are dropped, duplicate product ids merge into the first occurrence.
    pub(crate) fn sanitize(&mut self) {
        let mut merged: Vec<CartEntry> = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if entry.quantity == 0 {
                continue;
            }
            match merged.iter_mut().find(|e| e.product.id == entry.product.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(entry.quantity)
                }
                None => merged.push(entry),
            }
        }
        self.entries = merged;
    }

    fn entry_mut(&mut self, product_id: &ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| &e.product.id == product_id)
    }
}
