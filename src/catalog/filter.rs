//! Filter predicates over the catalog.
//!
//! Two independent predicates select which products are visible: a category
//! filter (exact key match) and a search filter (plain substring match over a
//! product's searchable text). They are deliberately separate values combined
//! by the caller: the UI tracks the active category button and the search
//! text independently and reapplies each without knowing the other's
//! implementation. [`both`] composes them for callers that want the stricter
//! AND behavior.

use crate::domain::category;
use crate::domain::Product;

/// Category predicate: either "all products" or an exact key match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    key: Option<String>,
}

impl CategoryFilter {
    /// The identity filter: every product passes.
    #[must_use]
    pub fn all() -> Self {
        Self { key: None }
    }

    /// Filter to a single category key.
    #[must_use]
    pub fn only(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }

    /// Builds a filter from a raw UI key, where `"all"` means no filtering.
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            None | Some("all") => Self::all(),
            Some(key) => Self::only(key),
        }
    }

    /// Whether a product passes this filter.
    ///
    /// A product without a category only passes the identity filter; it never
    /// matches a concrete key.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match &self.key {
            None => true,
            Some(key) => product.category.as_deref() == Some(key.as_str()),
        }
    }
}

/// Search predicate: lowercased, trimmed substring match.
///
/// A product passes when the term is a substring of the lowercased
/// concatenation `title + " " + description + " " + category label`, or of
/// the lowercased join of its tags. No tokenization, no fuzzy matching, no
/// ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    /// Builds a search filter from raw input; the term is trimmed and
    /// lowercased once here. An empty or whitespace-only term is the identity.
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }

    /// Whether the filter matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Whether a product passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if self.term.is_empty() {
            return true;
        }

        let haystack = format!(
            "{} {} {}",
            product.title,
            product.description,
            category::display_label(product.category.as_deref())
        )
        .to_lowercase();

        if haystack.contains(&self.term) {
            return true;
        }

        product.tags.join(" ").to_lowercase().contains(&self.term)
    }
}

/// AND-composition of the two predicates.
///
/// The shipped behavior applies each predicate on its own (see
/// `app::handler`), mirroring the original storefront; this helper exists so
/// the combined behavior can be enabled without restructuring the filters.
#[must_use]
pub fn both<'a>(
    category: &'a CategoryFilter,
    search: &'a SearchFilter,
) -> impl Fn(&Product) -> bool + 'a {
    move |product| category.matches(product) && search.matches(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_CURRENCY;

    fn product(id: i64, title: &str, category: Option<&str>, tags: &[&str]) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            details: String::new(),
            category: category.map(String::from),
            images: vec![],
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            price: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            variants: vec![],
        }
    }

    #[test]
    fn all_filter_passes_everything() {
        let f = CategoryFilter::from_key(Some("all"));
        assert!(f.matches(&product(1, "Caixa", Some("utilitarios"), &[])));
        assert!(f.matches(&product(2, "Kit", None, &[])));
    }

    #[test]
    fn category_filter_is_exact_match() {
        let f = CategoryFilter::only("jogos");
        assert!(f.matches(&product(1, "Dados", Some("jogos"), &[])));
        assert!(!f.matches(&product(2, "Caixa", Some("utilitarios"), &[])));
        assert!(!f.matches(&product(3, "Kit", None, &[])));
    }

    #[test]
    fn empty_search_is_identity() {
        let f = SearchFilter::new("   ");
        assert!(f.is_empty());
        assert!(f.matches(&product(1, "Caixa", None, &[])));
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let f = SearchFilter::new("CAIXA");
        assert!(f.matches(&product(1, "Caixa organizadora", None, &[])));
        assert!(!f.matches(&product(2, "Kit", None, &[])));
    }

    #[test]
    fn search_matches_description_and_category_label() {
        let mut p = product(1, "Suporte", Some("utilitarios"), &[]);
        p.description = "Apoio para fones".to_string();

        assert!(SearchFilter::new("fones").matches(&p));
        // Matches the display label ("Utilitários"), not just the raw key.
        assert!(SearchFilter::new("utilitários").matches(&p));
    }

    #[test]
    fn search_matches_tags() {
        let p = product(1, "Vaso", Some("decoracao"), &["planta", "suculenta"]);
        assert!(SearchFilter::new("suculenta").matches(&p));
        assert!(!SearchFilter::new("cacto").matches(&p));
    }

    #[test]
    fn both_requires_each_predicate() {
        let category = CategoryFilter::only("jogos");
        let search = SearchFilter::new("dados");
        let pred = both(&category, &search);

        assert!(pred(&product(1, "Dados de resina", Some("jogos"), &[])));
        assert!(!pred(&product(2, "Dados de resina", Some("decoracao"), &[])));
        assert!(!pred(&product(3, "Tabuleiro", Some("jogos"), &[])));
    }
}
