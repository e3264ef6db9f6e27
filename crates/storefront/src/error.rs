//! Unified error handling for the storefront boundary.
//!
//! The core itself degrades gracefully (malformed storage reads as empty,
//! invalid mutations are no-ops); `AppError` exists for the places where
//! a caller genuinely cannot proceed, such as a missing catalog file, and
//! for presenting checkout rejections at the CLI boundary.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::SubmitError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The product catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Checkout submission was rejected.
    #[error("Checkout error: {0}")]
    Submit(#[from] SubmitError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
