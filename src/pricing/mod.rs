//! Display-price computation for products and variants.
//!
//! This module is the single source of truth for which price a product shows.
//! A product with variants shows the minimum variant price on its card (a
//! "starting from" lower bound) and the selected variant's price in the detail
//! view; a product without variants shows its flat price. All amounts are
//! formatted through the [`AmountFormatter`] seam so the locale policy can be
//! swapped without touching the computation, and the formatter is guaranteed
//! never to fail: unknown currency codes drop to a fixed fallback pattern.

use crate::domain::{Product, Variant};

/// A price ready for card display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTag {
    /// Formatted amount, e.g. `"R$ 10,00"`.
    pub text: String,
    /// Whether the amount is a "a partir de" lower bound across variants.
    pub starting_from: bool,
}

/// Formats a raw amount and currency code into display text.
///
/// Implementations must be total: any `(amount, currency)` pair yields some
/// text. Display is the last consumer of a price and has nowhere to report an
/// error to.
pub trait AmountFormatter {
    fn format(&self, amount: f64, currency: &str) -> String;
}

/// Brazilian-Portuguese locale formatter (the catalog's audience).
///
/// Known currency codes are rendered pt-BR style: symbol, `.` thousands
/// grouping, `,` decimal separator: `1234.5` in BRL becomes `"R$ 1.234,50"`.
/// Unknown codes fall back to [`fallback_format`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PtBrFormatter;

impl AmountFormatter for PtBrFormatter {
    fn format(&self, amount: f64, currency: &str) -> String {
        match currency_symbol(currency) {
            Some(symbol) => format!("{symbol} {}", group_pt_br(amount)),
            None => fallback_format(amount),
        }
    }
}

/// Fixed-pattern formatting used when a currency code is unsupported.
///
/// Always `"R$ <amount with 2 decimals>"`, the same shape the original
/// storefront fell back to. This function cannot fail.
#[must_use]
pub fn fallback_format(amount: f64) -> String {
    format!("R$ {amount:.2}")
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "BRL" => Some("R$"),
        "USD" => Some("US$"),
        "EUR" => Some("€"),
        _ => None,
    }
}

/// Groups an amount pt-BR style: `1234567.8` → `"1.234.567,80"`.
fn group_pt_br(amount: f64) -> String {
    let negative = amount < 0.0;
    // Two-decimal fixed point; rounding here matches `{:.2}` display rounding.
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac:02}")
}

/// Minimum price across a product's variants, if it has any.
///
/// Prices were already coerced at the storage boundary, so a variant with a
/// malformed source price contributes 0.0 to the minimum.
#[must_use]
pub fn min_variant_amount(product: &Product) -> Option<f64> {
    if product.variants.is_empty() {
        return None;
    }
    Some(
        product
            .variants
            .iter()
            .map(|v| v.price)
            .fold(f64::INFINITY, f64::min),
    )
}

/// Computes the price shown on a product card.
///
/// Products with variants show the minimum variant price, formatted with the
/// first variant's currency and flagged as a "starting from" bound. Products
/// without variants show the flat price.
///
/// # Examples
///
/// ```
/// use vitrine::domain::{Product, Variant, DEFAULT_CURRENCY};
/// use vitrine::pricing::{card_price, PtBrFormatter};
///
/// let product = Product {
///     id: 2,
///     title: "Kit".to_string(),
///     description: String::new(),
///     details: String::new(),
///     category: None,
///     images: vec![],
///     tags: vec![],
///     price: 0.0,
///     currency: DEFAULT_CURRENCY.to_string(),
///     variants: vec![
///         Variant { name: "Pequeno".into(), price: 5.0, currency: "BRL".into() },
///         Variant { name: "Grande".into(), price: 20.0, currency: "BRL".into() },
///     ],
/// };
///
/// let tag = card_price(&product, &PtBrFormatter);
/// assert_eq!(tag.text, "R$ 5,00");
/// assert!(tag.starting_from);
/// ```
#[must_use]
pub fn card_price(product: &Product, formatter: &dyn AmountFormatter) -> PriceTag {
    match min_variant_amount(product) {
        Some(min) => {
            let currency = product
                .variants
                .first()
                .map_or(crate::domain::DEFAULT_CURRENCY, |v| v.currency.as_str());
            PriceTag {
                text: formatter.format(min, currency),
                starting_from: true,
            }
        }
        None => PriceTag {
            text: formatter.format(product.price, &product.currency),
            starting_from: false,
        },
    }
}

/// Resolves a variant by optional index, bounds-checked.
///
/// Returns `None` for an absent index, an out-of-range index, or a product
/// without variants. Callers treat `None` as "no selection" and fall back to
/// the product-level price.
#[must_use]
pub fn resolve_variant(product: &Product, index: Option<usize>) -> Option<&Variant> {
    index.and_then(|i| product.variants.get(i))
}

/// Computes the price text shown in the detail view for a selection.
///
/// A valid selection yields that variant's price in its own currency; anything
/// else falls back to the product-level price. Never fails and never reads out
/// of range.
#[must_use]
pub fn variant_price(
    product: &Product,
    index: Option<usize>,
    formatter: &dyn AmountFormatter,
) -> String {
    match resolve_variant(product, index) {
        Some(variant) => formatter.format(variant.price, &variant.currency),
        None => formatter.format(product.price, &product.currency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_CURRENCY;

    fn flat(price: f64, currency: &str) -> Product {
        Product {
            id: 1,
            title: "Caixa".to_string(),
            description: String::new(),
            details: String::new(),
            category: None,
            images: vec![],
            tags: vec![],
            price,
            currency: currency.to_string(),
            variants: vec![],
        }
    }

    fn with_variants(variants: &[(&str, f64, &str)]) -> Product {
        let mut p = flat(0.0, DEFAULT_CURRENCY);
        p.variants = variants
            .iter()
            .map(|(name, price, currency)| Variant {
                name: (*name).to_string(),
                price: *price,
                currency: (*currency).to_string(),
            })
            .collect();
        p
    }

    #[test]
    fn flat_price_formats_without_starting_from() {
        let tag = card_price(&flat(10.0, "BRL"), &PtBrFormatter);
        assert_eq!(tag.text, "R$ 10,00");
        assert!(!tag.starting_from);
    }

    #[test]
    fn variant_card_price_is_minimum_with_first_currency() {
        let p = with_variants(&[("Pequeno", 5.0, "BRL"), ("Grande", 20.0, "BRL")]);
        let tag = card_price(&p, &PtBrFormatter);
        assert_eq!(tag.text, "R$ 5,00");
        assert!(tag.starting_from);
    }

    #[test]
    fn variant_minimum_ignores_ordering() {
        let p = with_variants(&[("Grande", 20.0, "USD"), ("Pequeno", 5.0, "BRL")]);
        let tag = card_price(&p, &PtBrFormatter);
        // Minimum of 5.0, formatted with the FIRST variant's currency.
        assert_eq!(tag.text, "US$ 5,00");
    }

    #[test]
    fn unknown_currency_falls_back_to_fixed_pattern() {
        assert_eq!(PtBrFormatter.format(3.5, "XYZ"), "R$ 3.50");
    }

    #[test]
    fn thousands_grouping_is_pt_br() {
        assert_eq!(PtBrFormatter.format(1234.5, "BRL"), "R$ 1.234,50");
        assert_eq!(PtBrFormatter.format(1_234_567.89, "BRL"), "R$ 1.234.567,89");
        assert_eq!(PtBrFormatter.format(0.0, "BRL"), "R$ 0,00");
    }

    #[test]
    fn variant_price_resolves_in_bounds_selection() {
        let p = with_variants(&[("Pequeno", 5.0, "BRL"), ("Grande", 20.0, "BRL")]);
        assert_eq!(variant_price(&p, Some(1), &PtBrFormatter), "R$ 20,00");
    }

    #[test]
    fn out_of_range_selection_falls_back_to_flat_price() {
        let mut p = with_variants(&[("Pequeno", 5.0, "BRL")]);
        p.price = 7.0;
        assert_eq!(variant_price(&p, Some(9), &PtBrFormatter), "R$ 7,00");
        assert_eq!(variant_price(&p, None, &PtBrFormatter), "R$ 7,00");
    }

    #[test]
    fn resolve_variant_never_reads_out_of_range() {
        let p = with_variants(&[("Pequeno", 5.0, "BRL")]);
        assert!(resolve_variant(&p, Some(0)).is_some());
        assert!(resolve_variant(&p, Some(1)).is_none());
        assert!(resolve_variant(&flat(1.0, "BRL"), Some(0)).is_none());
    }
}
