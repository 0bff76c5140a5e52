//! Raw catalog records as they appear in the source document.
//!
//! These types are the lenient serde boundary between the external product
//! list and the domain model: every optional field defaults, and price values
//! coerce to a number instead of failing (a malformed price is worth 0, not an
//! error). Keeping them separate from `domain::Product` keeps the "anything
//! goes" parsing rules out of the rest of the plugin: by the time a record
//! becomes a [`Product`], all defaults have been applied.

use crate::domain::{Product, Variant, DEFAULT_CURRENCY};
use serde::Deserialize;

/// One product as read from the catalog document.
///
/// Only `id` and `title` are expected in practice, and even `title` defaults
/// to empty (the UI renders a glyph for untitled products). Everything else
/// is optional per the source contract.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub details: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Flat price; arbitrary JSON accepted and coerced (see [`coerce_amount`]).
    #[serde(default)]
    pub price: serde_json::Value,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub variants: Vec<VariantRecord>,
}

/// One purchasable variant as read from the catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantRecord {
    #[serde(default)]
    pub name: String,

    /// Variant price; arbitrary JSON accepted and coerced.
    #[serde(default)]
    pub price: serde_json::Value,

    #[serde(default)]
    pub currency: Option<String>,
}

/// Coerces an arbitrary JSON value to a price amount.
///
/// Numbers pass through and numeric strings parse; everything else
/// (`null`, booleans, objects, unparseable strings) is 0.0.
/// This mirrors the source contract: a malformed price must never fail the
/// load.
#[must_use]
pub fn coerce_amount(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

impl From<VariantRecord> for Variant {
    fn from(record: VariantRecord) -> Self {
        let price = coerce_amount(&record.price);
        Self {
            name: record.name,
            price,
            currency: record.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let price = coerce_amount(&record.price);
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            details: record.details,
            category: record.category,
            images: record.images,
            tags: record.tags,
            price,
            currency: record.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            variants: record.variants.into_iter().map(Variant::from).collect(),
        }
    }
}
