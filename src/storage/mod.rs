//! Storage layer: the external catalog source boundary.
//!
//! This module reads the product list the plugin browses. The source is
//! fetched exactly once at startup by the background worker; parsing is
//! lenient (missing optional fields default, malformed prices coerce to 0)
//! and only a missing or structurally invalid document is an error.
//!
//! # Modules
//!
//! - `source`: source trait abstraction
//! - `json`: JSON file implementation (uncached; re-reads on every fetch)
//! - `models`: raw record types separate from domain models

pub mod json;
pub mod models;
pub mod source;

pub use json::JsonCatalogSource;
pub use models::{ProductRecord, VariantRecord};
pub use source::CatalogSource;
