//! Catalog store: the authoritative product list and its filtered view.
//!
//! The store owns two sequences: the full catalog as loaded from the source,
//! and the derived view the UI renders from. The catalog is replaced wholesale
//! exactly once per successful load (never patched incrementally); the view is
//! recomputed in full, never diffed, every time a filter or search input
//! changes. Products themselves are immutable after load.

use crate::domain::Product;

/// Owns the loaded product list and the current filtered view.
///
/// All mutation goes through [`replace`](Self::replace),
/// [`clear`](Self::clear) and [`set_view`](Self::set_view); reads are
/// borrowed slices. The view is always a stable-order subset of the catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    view: Vec<Product>,
}

impl CatalogStore {
    /// Creates an empty store (the state before the initial load resolves).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog wholesale after a successful load.
    ///
    /// The view resets to the full list, matching the original storefront's
    /// post-load state.
    pub fn replace(&mut self, products: Vec<Product>) {
        tracing::debug!(product_count = products.len(), "catalog replaced");
        self.view = products.clone();
        self.products = products;
    }

    /// Empties both the catalog and the view.
    ///
    /// Used on load failure so the store is never left partially populated.
    pub fn clear(&mut self) {
        self.products.clear();
        self.view.clear();
    }

    /// The full catalog, in source order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// The current filtered view, in source order.
    #[must_use]
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    /// Recomputes the view by applying `predicate` over the full catalog.
    ///
    /// Filtering is stable: products keep their original relative order, and
    /// the view contains only members of the catalog. Returns the size of the
    /// new view.
    pub fn set_view<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&Product) -> bool,
    {
        self.view = self
            .products
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect();

        tracing::debug!(
            total = self.products.len(),
            visible = self.view.len(),
            "view recomputed"
        );
        self.view.len()
    }

    /// Whether the catalog has no products at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::{CategoryFilter, SearchFilter};
    use crate::domain::DEFAULT_CURRENCY;

    fn product(id: i64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            details: String::new(),
            category: Some(category.to_string()),
            images: vec![],
            tags: vec![],
            price: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            variants: vec![],
        }
    }

    fn loaded() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.replace(vec![
            product(1, "Caixa", "utilitarios"),
            product(2, "Dados", "jogos"),
            product(3, "Vaso", "decoracao"),
            product(4, "Tabuleiro", "jogos"),
        ]);
        store
    }

    #[test]
    fn replace_resets_view_to_full_list() {
        let store = loaded();
        assert_eq!(store.view(), store.all());
        assert_eq!(store.all().len(), 4);
    }

    #[test]
    fn all_category_view_equals_catalog() {
        let mut store = loaded();
        let f = CategoryFilter::from_key(Some("all"));
        store.set_view(|p| f.matches(p));
        assert_eq!(store.view(), store.all());
    }

    #[test]
    fn category_view_is_exact_ordered_subset() {
        let mut store = loaded();
        let f = CategoryFilter::only("jogos");
        let count = store.set_view(|p| f.matches(p));

        assert_eq!(count, 2);
        let ids: Vec<i64> = store.view().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn search_view_is_idempotent() {
        let mut store = loaded();
        let f = SearchFilter::new("dados");

        store.set_view(|p| f.matches(p));
        let once: Vec<i64> = store.view().iter().map(|p| p.id).collect();
        store.set_view(|p| f.matches(p));
        let twice: Vec<i64> = store.view().iter().map(|p| p.id).collect();

        assert_eq!(once, twice);
        assert_eq!(once, vec![2]);
    }

    #[test]
    fn empty_search_restores_full_view() {
        let mut store = loaded();
        let narrow = SearchFilter::new("vaso");
        store.set_view(|p| narrow.matches(p));
        assert_eq!(store.view().len(), 1);

        let empty = SearchFilter::new("");
        store.set_view(|p| empty.matches(p));
        assert_eq!(store.view(), store.all());
    }

    #[test]
    fn clear_empties_catalog_and_view_together() {
        let mut store = loaded();
        store.clear();
        assert!(store.is_empty());
        assert!(store.view().is_empty());
    }
}
