//! Commerce error types.

use thiserror::Error;

/// Errors that can occur at the storefront's fallible seams.
///
/// Cart mutations themselves are total and never produce one of these;
/// errors surface only when touching persistence or parsing catalog data.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Persistence layer failure.
    #[error("storage error: {0}")]
    Storage(#[from] mercadito_storage::StorageError),

    /// Unrecognized currency code in catalog data.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}
