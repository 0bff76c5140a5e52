//! Category keys and display labels.
//!
//! Product categories are free-form string keys in the catalog source. A fixed
//! table maps the known keys to user-facing labels; unknown keys are shown as-is
//! and products without a category fall back to a generic label.

/// Known category keys paired with their display labels, in menu order.
///
/// The order here drives category cycling in the UI: "all" first, then each
/// entry of this table.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("miniaturas", "Miniaturas"),
    ("utilitarios", "Utilitários"),
    ("decoracao", "Decoração"),
    ("jogos", "Jogos"),
];

/// Label shown for products without a category.
pub const FALLBACK_LABEL: &str = "Outros";

/// Returns the display label for a category key.
///
/// Known keys map through [`CATEGORIES`]; an unknown key is returned verbatim
/// so new categories in the source degrade gracefully; `None` yields
/// [`FALLBACK_LABEL`].
///
/// # Examples
///
/// ```
/// use vitrine::domain::category::display_label;
///
/// assert_eq!(display_label(Some("utilitarios")), "Utilitários");
/// assert_eq!(display_label(Some("artesanato")), "artesanato");
/// assert_eq!(display_label(None), "Outros");
/// ```
#[must_use]
pub fn display_label(key: Option<&str>) -> String {
    match key {
        Some(key) => CATEGORIES
            .iter()
            .find(|(k, _)| *k == key)
            .map_or_else(|| key.to_string(), |(_, label)| (*label).to_string()),
        None => FALLBACK_LABEL.to_string(),
    }
}

/// Returns the key following `current` in the cycle `all → table entries → all`.
///
/// `None` stands for "all categories". Used by the UI to step through the
/// filter buttons with a single key.
#[must_use]
pub fn next_key(current: Option<&str>) -> Option<String> {
    let position = current.and_then(|key| CATEGORIES.iter().position(|(k, _)| *k == key));

    match (current, position) {
        (None, _) => CATEGORIES.first().map(|(k, _)| (*k).to_string()),
        // Unknown active key restarts the cycle from "all".
        (Some(_), None) => None,
        (Some(_), Some(i)) => CATEGORIES.get(i + 1).map(|(k, _)| (*k).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_map_to_labels() {
        assert_eq!(display_label(Some("miniaturas")), "Miniaturas");
        assert_eq!(display_label(Some("decoracao")), "Decoração");
        assert_eq!(display_label(Some("jogos")), "Jogos");
    }

    #[test]
    fn unknown_key_is_shown_verbatim() {
        assert_eq!(display_label(Some("vestuario")), "vestuario");
    }

    #[test]
    fn absent_category_uses_fallback_label() {
        assert_eq!(display_label(None), FALLBACK_LABEL);
    }

    #[test]
    fn cycle_visits_every_category_and_wraps() {
        let mut current: Option<String> = None;
        let mut seen = Vec::new();

        loop {
            current = next_key(current.as_deref());
            match &current {
                Some(key) => seen.push(key.clone()),
                None => break,
            }
        }

        let expected: Vec<String> = CATEGORIES.iter().map(|(k, _)| (*k).to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn unknown_active_key_restarts_from_all() {
        assert_eq!(next_key(Some("vestuario")), None);
    }
}
