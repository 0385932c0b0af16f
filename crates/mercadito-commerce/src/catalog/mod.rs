//! Catalog types.
//!
//! What the listing pages render and what the cart copies at add-time.

mod product;

pub use product::{Condition, Installments, ProductSummary, Reviews, ShippingInfo};
