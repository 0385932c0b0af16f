//! Persistence glue: a cart that writes itself through on every change.

use mercadito_storage::LocalStore;
use tracing::{debug, warn};

use crate::cart::Cart;
use crate::catalog::ProductSummary;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Storage key the serialized cart lives under.
pub const CART_KEY: &str = "cart";

/// A [`Cart`] bound to a [`LocalStore`].
///
/// Every mutation is persisted synchronously before it returns, so the
/// draft survives page loads. Reads never touch storage. Write failures
/// are logged and swallowed: cart operations stay total, at the cost of
/// the draft not outliving the session when the disk is unwritable.
pub struct CartStore {
    cart: Cart,
    store: LocalStore,
    key: String,
}

impl CartStore {
    /// Bind to `store` under the default key, restoring any persisted
    /// draft.
    pub fn open(store: LocalStore) -> Self {
        Self::with_key(store, CART_KEY)
    }

    /// Bind to `store` under an explicit key.
    ///
    /// Unreadable or corrupt persisted state is discarded in favor of an
    /// empty cart so the storefront always renders; readable state has
    /// its invariants restored (zero quantities dropped, duplicate ids
    /// merged).
    pub fn with_key(store: LocalStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match store.get::<Cart>(&key) {
            Ok(Some(mut cart)) => {
                cart.sanitize();
                cart
            }
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(key = %key, error = %err, "discarding unreadable cart state");
                Cart::new()
            }
        };
        Self { cart, store, key }
    }

    /// Open the default local store and bind the cart to it.
    pub fn open_default() -> Result<Self, CommerceError> {
        Ok(Self::open(LocalStore::open_default()?))
    }

    /// The current draft.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// See [`Cart::add_item`].
    pub fn add_item(&mut self, product: ProductSummary, quantity: u32) {
        self.cart.add_item(product, quantity);
        self.persist();
    }

    /// See [`Cart::remove_item`].
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.cart.remove_item(product_id);
        self.persist();
    }

    /// See [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.cart.update_quantity(product_id, quantity);
        self.persist();
    }

    /// Empty the draft, as the explicit "empty cart" action and
    /// successful checkout completion do.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// See [`Cart::total_items`].
    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    /// See [`Cart::total_price`].
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Write the draft out now, reporting failure instead of logging it.
    ///
    /// Mutations already persist on their own; this is for callers that
    /// need to know the write landed (e.g. before navigating away).
    pub fn flush(&self) -> Result<(), CommerceError> {
        self.store.set(&self.key, &self.cart)?;
        Ok(())
    }

    fn persist(&self) {
        match self.store.set(&self.key, &self.cart) {
            Ok(()) => debug!(key = %self.key, items = self.cart.total_items(), "cart persisted"),
            Err(err) => warn!(key = %self.key, error = %err, "failed to persist cart"),
        }
    }
}
