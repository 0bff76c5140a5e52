//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where
//! the product list comes from. The plugin fetches exactly once at startup;
//! the trait exists so the worker logic can be exercised against an in-memory
//! source in tests and so the transport can change without touching the rest
//! of the plugin.

use crate::domain::error::Result;
use crate::domain::Product;

/// Abstraction over the external provider of the product list.
///
/// Implementations must not cache: each `fetch` re-reads the underlying
/// document so a reload observes the current contents.
///
/// # Implementations
///
/// - [`JsonCatalogSource`](crate::storage::JsonCatalogSource): JSON file (default)
pub trait CatalogSource: Send {
    /// Fetches the full product list with all field defaults applied.
    ///
    /// # Errors
    ///
    /// Returns an error only when the document is unreachable or structurally
    /// invalid. Missing or malformed optional fields are defaulted, never an
    /// error.
    fn fetch(&self) -> Result<Vec<Product>>;
}
