//! Product domain model.
//!
//! This module defines the core [`Product`] and [`Variant`] types that the rest of
//! the plugin operates on. Domain values are produced from the lenient storage
//! records (see `crate::storage::models`) with every default already applied, and
//! are immutable once loaded: filtering only changes which products are visible,
//! never their contents.

use serde::{Deserialize, Serialize};

/// Currency code assumed when the catalog source does not specify one.
pub const DEFAULT_CURRENCY: &str = "BRL";

/// A catalog product.
///
/// # Fields
///
/// - `id`: unique integer identifier within the catalog
/// - `title`: display title (may be empty; the UI falls back to a glyph)
/// - `description` / `details`: optional prose, empty when absent
/// - `category`: raw category key, mapped to a label via
///   [`category::display_label`](crate::domain::category::display_label)
/// - `images`: ordered image references; may be empty
/// - `tags`: extra search keywords
/// - `price` / `currency`: flat price, used only when `variants` is empty
/// - `variants`: purchasable options; when non-empty these take over pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub details: String,
    pub category: Option<String>,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub price: f64,
    pub currency: String,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Whether this product is priced through variants rather than a flat price.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// First image reference, if the product has any images.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A named, independently priced purchasable option of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Display label, e.g. "Pequeno" or "Grande".
    pub name: String,
    /// Price amount; 0.0 when the source value was absent or non-numeric.
    pub price: f64,
    /// Currency code, defaulted to [`DEFAULT_CURRENCY`] when absent.
    pub currency: String,
}
