//! Storefront domain state for mercadito.
//!
//! This crate holds the client-side state of a MercadoLibre-style
//! storefront:
//!
//! - **Catalog**: product snapshots as the listing pages show them
//! - **Cart**: the order draft, with persistence across page loads
//! - **Search**: search page state and result paging
//! - **Checkout**: form validation, region lookup, simulated payment
//!
//! # Example
//!
//! ```rust,ignore
//! use mercadito_commerce::prelude::*;
//! use mercadito_storage::LocalStore;
//!
//! let store = LocalStore::open_default()?;
//! let mut cart = CartStore::open(store);
//!
//! let laptop = ProductSummary::new(
//!     ProductId::new("MCO1391280"),
//!     "Notebook 14\" 8GB",
//!     Money::new(1_250_000, Currency::COP),
//! );
//! cart.add_item(laptop, 1);
//!
//! println!("Total: {}", cart.total_price());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Condition, Installments, ProductSummary, Reviews, ShippingInfo};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartStore, CART_KEY};

    // Search
    pub use crate::search::{LoadingState, SearchPaging, SearchResponse, SearchState};

    // Checkout
    pub use crate::checkout::{
        CardDetails, CheckoutFlow, CheckoutForm, CheckoutStage, FieldError, PaymentMethod,
        PaymentSelection, ProcessingStep, Region,
    };
}
