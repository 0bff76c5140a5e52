//! Outbound interest messaging.
//!
//! A pure formatting boundary: given a product and an optional selected
//! variant, build the plain-text interest message and, when a phone number is
//! configured, the percent-encoded WhatsApp deep link carrying it. Nothing
//! here touches state or performs I/O; opening the link is an [`Action`]
//! executed by the plugin shim.
//!
//! [`Action`]: crate::app::Action

use crate::domain::{category, Product};
use crate::pricing::{self, AmountFormatter};

/// Builds the plain-text interest message for a product and selection.
///
/// Always contains the product title and category label. When a variant is
/// selected (validated index), an "Opção" line with the variant name and a
/// "Preço" line with its price follow; without a selection, a "Preço" line is
/// included only if the product has a non-zero flat price.
///
/// # Examples
///
/// ```
/// use vitrine::domain::{Product, DEFAULT_CURRENCY};
/// use vitrine::pricing::PtBrFormatter;
/// use vitrine::share::interest_message;
///
/// let product = Product {
///     id: 1,
///     title: "Caixa organizadora".to_string(),
///     description: String::new(),
///     details: String::new(),
///     category: Some("utilitarios".to_string()),
///     images: vec![],
///     tags: vec![],
///     price: 10.0,
///     currency: DEFAULT_CURRENCY.to_string(),
///     variants: vec![],
/// };
///
/// let message = interest_message(&product, None, &PtBrFormatter);
/// assert!(message.contains("Produto: Caixa organizadora"));
/// assert!(message.contains("Preço: R$ 10,00"));
/// ```
#[must_use]
pub fn interest_message(
    product: &Product,
    variant_index: Option<usize>,
    formatter: &dyn AmountFormatter,
) -> String {
    let mut message = format!(
        "Olá! Tenho interesse em:\nProduto: {}\nCategoria: {}",
        product.title,
        category::display_label(product.category.as_deref())
    );

    match pricing::resolve_variant(product, variant_index) {
        Some(variant) => {
            let price = formatter.format(variant.price, &variant.currency);
            message.push_str(&format!("\nOpção: {}\nPreço: {}", variant.name, price));
        }
        None if product.price != 0.0 => {
            let price = formatter.format(product.price, &product.currency);
            message.push_str(&format!("\nPreço: {price}"));
        }
        None => {}
    }

    message
}

/// Builds the `wa.me` deep link for the interest message.
///
/// The message text is strictly percent-encoded so adversarial characters in
/// any product field reach the external channel as literal text. The phone
/// number is external configuration (DDI + DDD + number, digits only).
#[must_use]
pub fn whatsapp_link(
    phone: &str,
    product: &Product,
    variant_index: Option<usize>,
    formatter: &dyn AmountFormatter,
) -> String {
    let message = interest_message(product, variant_index, formatter);
    format!("https://wa.me/{phone}?text={}", urlencoding::encode(&message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Variant, DEFAULT_CURRENCY};
    use crate::pricing::PtBrFormatter;

    fn kit() -> Product {
        Product {
            id: 2,
            title: "Kit de dados".to_string(),
            description: String::new(),
            details: String::new(),
            category: Some("jogos".to_string()),
            images: vec![],
            tags: vec![],
            price: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            variants: vec![
                Variant {
                    name: "Pequeno".to_string(),
                    price: 5.0,
                    currency: DEFAULT_CURRENCY.to_string(),
                },
                Variant {
                    name: "Grande".to_string(),
                    price: 20.0,
                    currency: DEFAULT_CURRENCY.to_string(),
                },
            ],
        }
    }

    #[test]
    fn selected_variant_adds_option_and_price_lines() {
        let message = interest_message(&kit(), Some(1), &PtBrFormatter);
        assert!(message.contains("Produto: Kit de dados"));
        assert!(message.contains("Categoria: Jogos"));
        assert!(message.contains("Opção: Grande"));
        assert!(message.contains("Preço: R$ 20,00"));
    }

    #[test]
    fn zero_flat_price_omits_the_price_line() {
        let mut product = kit();
        product.variants.clear();
        let message = interest_message(&product, None, &PtBrFormatter);
        assert!(!message.contains("Preço"));
    }

    #[test]
    fn invalid_selection_falls_back_to_flat_price() {
        let mut product = kit();
        product.variants.clear();
        product.price = 10.0;
        let message = interest_message(&product, Some(5), &PtBrFormatter);
        assert!(!message.contains("Opção"));
        assert!(message.contains("Preço: R$ 10,00"));
    }

    #[test]
    fn deep_link_is_percent_encoded() {
        let link = whatsapp_link("5599999999999", &kit(), Some(0), &PtBrFormatter);
        assert!(link.starts_with("https://wa.me/5599999999999?text="));
        // Newlines and spaces never appear raw in the query.
        assert!(!link.contains('\n'));
        assert!(!link.contains(' '));
        assert!(link.contains("%0A"));
    }

    #[test]
    fn adversarial_title_stays_encoded_in_the_link() {
        let mut product = kit();
        product.title = "Kit & <promo>?".to_string();
        let link = whatsapp_link("5599999999999", &product, None, &PtBrFormatter);
        let query = link.split_once("?text=").unwrap().1;
        assert!(!query.contains('&'));
        assert!(!query.contains('<'));
        assert!(!query.contains('?'));
    }
}
