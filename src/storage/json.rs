//! JSON file catalog source.
//!
//! Reads the product list from a JSON document on disk: an array of product
//! records, leniently parsed (see `storage::models`). The file is re-read on
//! every fetch; nothing is cached, so editing the file and reloading the
//! plugin always observes current contents.

use crate::domain::error::{Result, VitrineError};
use crate::domain::Product;
use crate::storage::models::ProductRecord;
use crate::storage::source::CatalogSource;
use std::path::PathBuf;

/// Catalog source backed by a JSON file.
///
/// # File Format
///
/// ```json
/// [
///   {
///     "id": 1,
///     "title": "Caixa organizadora",
///     "category": "utilitarios",
///     "images": ["caixa-1.jpg"],
///     "price": 10,
///     "currency": "BRL"
///   },
///   {
///     "id": 2,
///     "title": "Kit de dados",
///     "category": "jogos",
///     "variants": [
///       {"name": "Pequeno", "price": 5},
///       {"name": "Grande", "price": 20}
///     ]
///   }
/// ]
/// ```
pub struct JsonCatalogSource {
    /// Path to the catalog document on disk.
    file_path: PathBuf,
}

impl JsonCatalogSource {
    /// Creates a source reading from the given path.
    ///
    /// The file is not touched until the first fetch, so construction always
    /// succeeds even if the document does not exist yet.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl CatalogSource for JsonCatalogSource {
    fn fetch(&self) -> Result<Vec<Product>> {
        let _span =
            tracing::debug_span!("json_fetch_catalog", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;

        let records: Vec<ProductRecord> = serde_json::from_str(&contents)
            .map_err(|e| VitrineError::Catalog(format!("failed to parse catalog JSON: {e}")))?;

        let products: Vec<Product> = records.into_iter().map(Product::from).collect();

        tracing::debug!(product_count = products.len(), "catalog fetched");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(contents: &str) -> (tempfile::TempDir, JsonCatalogSource) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, JsonCatalogSource::new(path))
    }

    #[test]
    fn fetches_products_in_document_order() {
        let (_dir, source) = write_catalog(
            r#"[
                {"id": 1, "title": "Caixa", "price": 10},
                {"id": 2, "title": "Kit", "variants": [{"name": "P", "price": 5}]}
            ]"#,
        );

        let products = source.fetch().unwrap();
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(products[1].variants.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonCatalogSource::new(dir.path().join("missing.json"));
        assert!(source.fetch().is_err());
    }

    #[test]
    fn invalid_document_is_a_catalog_error() {
        let (_dir, source) = write_catalog("{not json");
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, VitrineError::Catalog(_)));
    }

    #[test]
    fn fetch_is_uncached() {
        let (dir, source) = write_catalog(r#"[{"id": 1}]"#);
        assert_eq!(source.fetch().unwrap().len(), 1);

        std::fs::write(
            dir.path().join("products.json"),
            r#"[{"id": 1}, {"id": 2}]"#,
        )
        .unwrap();
        assert_eq!(source.fetch().unwrap().len(), 2);
    }
}
