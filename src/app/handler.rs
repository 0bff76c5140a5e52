//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! worker responses, translating them into state changes and action sequences.
//! It is the primary control flow coordinator for the plugin.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or the worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `SelectProduct`
//! - **Detail view**: `CloseDetail`, `VariantKey`, `CyclePreview`,
//!   `ExpressInterest`
//! - **Filtering**: `CycleCategory`, `ResetCategory`, search input events
//! - **System**: `NoticeTimeout`, `WorkerResponse`

use crate::app::{Action, AppState};
use crate::app::modes::{CatalogStatus, DetailState, InputMode, SearchFocus};
use crate::app::state::NOTICE_DWELL_SECS;
use crate::domain::error::Result;
use crate::pricing::{self, AmountFormatter, PtBrFormatter};
use crate::share;
use crate::worker::WorkerResponse;

/// Notice shown when the catalog source cannot be loaded.
const LOAD_FAILURE_NOTICE: &str = "Não foi possível carregar os produtos.";

/// Events triggered by user input or system changes.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, so all
/// transitions are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the card selection down by one (wraps to top).
    KeyDown,
    /// Moves the card selection up by one (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Opens the detail view for the currently selected product.
    SelectProduct,
    /// Closes the detail view.
    CloseDetail,
    /// Raw variant-selection key pressed in the detail view ('1'..'9').
    ///
    /// Parsed at a strict integer boundary here; anything invalid or out of
    /// range becomes "no selection" and product-level pricing applies.
    VariantKey(char),
    /// Advances the detail view's gallery preview.
    CyclePreview,
    /// Registers interest in the open product (no state change; side effects
    /// only: a notice and, when configured, the messaging deep link).
    ExpressInterest,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the filtered results (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears transient input state (search or detail) and returns to normal.
    Escape,
    /// Activates the next category filter (all → each category → all).
    CycleCategory,
    /// Resets the category filter to all products.
    ResetCategory,
    /// A notice-dismiss timer expired.
    NoticeTimeout,
    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Parses a raw variant key into a strict optional index.
///
/// Keys are 1-based for the user; `'1'` selects variant 0. Non-digits and
/// `'0'` yield `None`. Bounds are validated by the caller against the open
/// product.
#[must_use]
pub fn parse_variant_key(key: char) -> Option<usize> {
    let digit = key.to_digit(10)? as usize;
    digit.checked_sub(1)
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(should_render, actions)`: whether the UI needs a redraw, and the
/// side effects the runtime must execute in order.
///
/// # Errors
///
/// Returns errors from state mutation; currently all transitions are
/// infallible, but the signature matches the runtime's expectations.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            if state.detail.is_open() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.detail.is_open() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SelectProduct => {
            if state.detail.is_open() {
                return Ok((false, vec![]));
            }

            let Some(product) = state.selected_product().cloned() else {
                tracing::debug!("no product selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    state.input_mode = InputMode::Normal;
                    state.search_query = String::new();
                    state.apply_search_view();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            tracing::debug!(
                product_id = product.id,
                product_title = %product.title,
                has_variants = product.has_variants(),
                "opening detail view"
            );

            let variant = if product.has_variants() { Some(0) } else { None };
            state.detail = DetailState::Open {
                product,
                variant,
                preview: 0,
            };
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            if !state.detail.is_open() {
                return Ok((false, vec![]));
            }
            state.detail = DetailState::Closed;
            Ok((true, vec![]))
        }
        Event::VariantKey(key) => {
            let DetailState::Open {
                product, variant, ..
            } = &mut state.detail
            else {
                return Ok((false, vec![]));
            };

            let parsed = parse_variant_key(*key);
            // Out-of-range input becomes "no selection": product-level
            // pricing applies, never an out-of-range read.
            let validated = parsed.filter(|i| *i < product.variants.len());
            tracing::debug!(key = %key, parsed = ?parsed, validated = ?validated, "variant selection");
            *variant = validated;
            Ok((true, vec![]))
        }
        Event::CyclePreview => {
            let DetailState::Open {
                product, preview, ..
            } = &mut state.detail
            else {
                return Ok((false, vec![]));
            };

            if product.images.len() < 2 {
                return Ok((false, vec![]));
            }
            *preview = (*preview + 1) % product.images.len();
            Ok((true, vec![]))
        }
        Event::ExpressInterest => {
            let DetailState::Open {
                product, variant, ..
            } = &state.detail
            else {
                return Ok((false, vec![]));
            };

            let chosen = pricing::resolve_variant(product, *variant).map(|v| {
                format!(
                    " — {} ({})",
                    v.name,
                    PtBrFormatter.format(v.price, &v.currency)
                )
            });
            let notice = format!(
                "Interesse registrado: {}{}",
                product.title,
                chosen.unwrap_or_default()
            );

            let mut actions = vec![Action::ScheduleNoticeDismiss {
                seconds: NOTICE_DWELL_SECS,
            }];

            if let Some(phone) = &state.whatsapp_phone {
                actions.push(Action::OpenLink {
                    url: share::whatsapp_link(phone, product, *variant, &PtBrFormatter),
                });
            }

            tracing::debug!(product_id = product.id, variant = ?variant, "interest registered");
            state.show_notice(notice);
            Ok((true, actions))
        }
        Event::SearchMode => {
            if state.detail.is_open() {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_search_view();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_search_view();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, "search query updated");
            state.apply_search_view();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.apply_search_view();
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.detail.is_open() {
                state.detail = DetailState::Closed;
                return Ok((true, vec![]));
            }

            // Escape resets both filter inputs, so the header and the view
            // stay in agreement.
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.active_category = None;
            state.apply_category_view();
            Ok((true, vec![]))
        }
        Event::CycleCategory => {
            if state.detail.is_open() {
                return Ok((false, vec![]));
            }
            state.active_category =
                crate::domain::category::next_key(state.active_category.as_deref());
            tracing::debug!(category = ?state.active_category, "category filter changed");
            state.apply_category_view();
            Ok((true, vec![]))
        }
        Event::ResetCategory => {
            if state.detail.is_open() {
                return Ok((false, vec![]));
            }
            state.active_category = None;
            state.apply_category_view();
            Ok((true, vec![]))
        }
        Event::NoticeTimeout => {
            let cleared = state.notice_timer_fired();
            Ok((cleared, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { products } => {
                tracing::debug!(product_count = products.len(), "catalog load resolved");
                state.status = CatalogStatus::Ready;
                state.store.replace(products.clone());
                state.selected_index = 0;
                Ok((true, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::warn!(error = %message, "catalog load failed");
                state.status = CatalogStatus::Failed;
                state.store.clear();
                state.selected_index = 0;
                state.show_notice(LOAD_FAILURE_NOTICE);
                Ok((
                    true,
                    vec![Action::ScheduleNoticeDismiss {
                        seconds: NOTICE_DWELL_SECS,
                    }],
                ))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, Variant, DEFAULT_CURRENCY};
    use crate::ui::theme::Theme;

    fn flat(id: i64, title: &str, category: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            details: String::new(),
            category: Some(category.to_string()),
            images: vec![],
            tags: vec![],
            price,
            currency: DEFAULT_CURRENCY.to_string(),
            variants: vec![],
        }
    }

    fn kit(id: i64) -> Product {
        let mut p = flat(id, "Kit de dados", "jogos", 0.0);
        p.variants = vec![
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
        ];
        p
    }

    fn loaded_state(products: Vec<Product>) -> AppState {
        let mut state = AppState::new(Theme::default(), None);
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogLoaded { products }),
        )
        .unwrap();
        state
    }

    fn open_detail(state: &mut AppState) {
        handle_event(state, &Event::SelectProduct).unwrap();
        assert!(state.detail.is_open());
    }

    #[test]
    fn select_opens_detail_with_default_variant() {
        let mut state = loaded_state(vec![kit(2)]);
        open_detail(&mut state);

        let DetailState::Open { variant, .. } = &state.detail else {
            unreachable!()
        };
        assert_eq!(*variant, Some(0));
    }

    #[test]
    fn select_without_variants_has_no_selection() {
        let mut state = loaded_state(vec![flat(1, "Caixa", "utilitarios", 10.0)]);
        open_detail(&mut state);

        let DetailState::Open { variant, .. } = &state.detail else {
            unreachable!()
        };
        assert_eq!(*variant, None);
    }

    #[test]
    fn variant_key_selects_in_bounds_index() {
        let mut state = loaded_state(vec![kit(2)]);
        open_detail(&mut state);

        handle_event(&mut state, &Event::VariantKey('2')).unwrap();
        let DetailState::Open { variant, .. } = &state.detail else {
            unreachable!()
        };
        assert_eq!(*variant, Some(1));
    }

    #[test]
    fn out_of_range_variant_key_becomes_no_selection() {
        let mut state = loaded_state(vec![kit(2)]);
        open_detail(&mut state);

        handle_event(&mut state, &Event::VariantKey('9')).unwrap();
        let DetailState::Open { variant, .. } = &state.detail else {
            unreachable!()
        };
        assert_eq!(*variant, None);

        // The displayed price falls back to the product-level price.
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.detail.unwrap().price_text, "R$ 0,00");
    }

    #[test]
    fn variant_selection_never_mutates_the_store() {
        let mut state = loaded_state(vec![kit(2)]);
        let before = state.store.all().to_vec();
        open_detail(&mut state);
        handle_event(&mut state, &Event::VariantKey('2')).unwrap();
        assert_eq!(state.store.all(), before.as_slice());
    }

    #[test]
    fn express_interest_keeps_detail_open_and_shows_notice() {
        let mut state = loaded_state(vec![kit(2)]);
        open_detail(&mut state);

        let (_, actions) = handle_event(&mut state, &Event::ExpressInterest).unwrap();
        assert!(state.detail.is_open());
        assert_eq!(
            state.notice.as_deref(),
            Some("Interesse registrado: Kit de dados — Pequeno (R$ 5,00)")
        );
        assert!(actions
            .iter()
            .any(|a| matches!(a, Action::ScheduleNoticeDismiss { .. })));
        // No phone configured → no link opened.
        assert!(!actions.iter().any(|a| matches!(a, Action::OpenLink { .. })));
    }

    #[test]
    fn express_interest_opens_link_when_phone_configured() {
        let mut state = loaded_state(vec![kit(2)]);
        state.whatsapp_phone = Some("5599999999999".to_string());
        open_detail(&mut state);

        let (_, actions) = handle_event(&mut state, &Event::ExpressInterest).unwrap();
        let link = actions.iter().find_map(|a| match a {
            Action::OpenLink { url } => Some(url.clone()),
            _ => None,
        });
        assert!(link.unwrap().starts_with("https://wa.me/5599999999999?text="));
    }

    #[test]
    fn search_recomputes_from_full_catalog_ignoring_category() {
        let mut state = loaded_state(vec![
            flat(1, "Caixa organizadora", "utilitarios", 10.0),
            kit(2),
        ]);

        // Narrow to a category that excludes the kit...
        handle_event(&mut state, &Event::CycleCategory).unwrap();
        state.active_category = Some("utilitarios".to_string());
        state.apply_category_view();
        assert_eq!(state.store.view().len(), 1);

        // ...then search for the kit: the view resets to the FULL catalog
        // before filtering by term, so the kit is found anyway.
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "kit".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        let ids: Vec<i64> = state.store.view().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn category_and_search_events_do_not_touch_open_detail() {
        let mut state = loaded_state(vec![kit(2), flat(3, "Vaso", "decoracao", 8.0)]);
        open_detail(&mut state);
        handle_event(&mut state, &Event::VariantKey('2')).unwrap();

        let detail_before = state.detail.clone();
        handle_event(&mut state, &Event::CycleCategory).unwrap();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        assert_eq!(state.detail, detail_before);
    }

    #[test]
    fn load_failure_clears_store_and_shows_one_notice() {
        let mut state = loaded_state(vec![kit(2)]);
        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "unreachable".to_string(),
            }),
        )
        .unwrap();

        assert!(state.store.all().is_empty());
        assert!(state.store.view().is_empty());
        assert_eq!(state.notice.as_deref(), Some(LOAD_FAILURE_NOTICE));
        assert_eq!(actions.len(), 1);

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards.is_empty());
        assert!(vm.notice.is_some());
    }

    #[test]
    fn replacement_notice_keeps_its_full_dwell() {
        let mut state = loaded_state(vec![kit(2)]);
        open_detail(&mut state);

        handle_event(&mut state, &Event::ExpressInterest).unwrap();
        handle_event(&mut state, &Event::ExpressInterest).unwrap();

        // First timer fires while the second notice is still dwelling.
        handle_event(&mut state, &Event::NoticeTimeout).unwrap();
        assert!(state.notice.is_some());

        handle_event(&mut state, &Event::NoticeTimeout).unwrap();
        assert!(state.notice.is_none());
    }

    #[test]
    fn gallery_preview_cycles_and_wraps() {
        let mut product = kit(2);
        product.images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        let mut state = loaded_state(vec![product]);
        open_detail(&mut state);

        handle_event(&mut state, &Event::CyclePreview).unwrap();
        let DetailState::Open { preview, .. } = &state.detail else {
            unreachable!()
        };
        assert_eq!(*preview, 1);

        handle_event(&mut state, &Event::CyclePreview).unwrap();
        let DetailState::Open { preview, .. } = &state.detail else {
            unreachable!()
        };
        assert_eq!(*preview, 0);
    }

    #[test]
    fn escape_closes_detail_before_clearing_search() {
        let mut state = loaded_state(vec![kit(2)]);
        open_detail(&mut state);
        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!state.detail.is_open());
    }

    #[test]
    fn parse_variant_key_is_strict() {
        assert_eq!(parse_variant_key('1'), Some(0));
        assert_eq!(parse_variant_key('9'), Some(8));
        assert_eq!(parse_variant_key('0'), None);
        assert_eq!(parse_variant_key('x'), None);
    }
}
