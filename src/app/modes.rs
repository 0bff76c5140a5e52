//! Input, loading, and detail-view state types for the application.
//!
//! This module defines the state machine enums that control user interaction.
//! [`InputMode`] determines which keybindings are active, [`CatalogStatus`]
//! tracks the one-shot load lifecycle, and [`DetailState`] is the detail-view
//! ("modal") state machine over a selected product.

use crate::domain::Product;

/// Focus state within search mode.
///
/// Determines whether search input is being typed or the filtered results are
/// being navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts Ctrl+n/p for movement, enter to open, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), enter (open detail),
    /// c/Tab (cycle category), a (all categories), q (quit).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// Lifecycle of the one-shot catalog load.
///
/// The catalog loads exactly once at startup; there are no retries and no
/// background refresh, so the status only ever moves forward from `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    /// The initial fetch has not resolved yet; no cards render.
    Loading,

    /// The catalog was loaded (possibly empty).
    Ready,

    /// The load failed; the catalog stays empty until the plugin reloads.
    Failed,
}

/// Detail-view state machine.
///
/// `Closed → Open` on product selection; variant and preview changes keep the
/// view `Open`; closing returns to `Closed`. The open state owns a clone of
/// the product, so recomputing the card view underneath never corrupts the
/// selection here.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// No detail view is open.
    Closed,

    /// A product's detail view is open.
    Open {
        /// The product being viewed.
        product: Product,

        /// Selected variant index, validated on entry; `None` means no
        /// selection and product-level pricing applies.
        variant: Option<usize>,

        /// Index into `product.images` of the main preview. Always in range
        /// when images exist; ignored otherwise.
        preview: usize,
    },
}

impl DetailState {
    /// Whether the detail view is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}
