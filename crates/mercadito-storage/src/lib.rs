//! Type-safe local storage for mercadito.
//!
//! The storefront keeps its client-side drafts (most importantly the cart)
//! in a small per-user key-value store with automatic JSON serialization,
//! the same role the browser's per-origin local storage plays for the web
//! client. Values live as individual JSON files under a single directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use mercadito_storage::LocalStore;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Draft {
//!     note: String,
//! }
//!
//! let store = LocalStore::open_default()?;
//!
//! // Store a value
//! store.set("draft", &Draft { note: "hi".into() })?;
//!
//! // Retrieve a value
//! let draft: Option<Draft> = store.get("draft")?;
//!
//! // Delete a value
//! store.delete("draft")?;
//! ```

mod error;
mod local;

pub use error::StorageError;
pub use local::LocalStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{LocalStore, StorageError};
}
