//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are display-ready projections: all
//! prices are formatted, all text is sanitized and truncated, variant options
//! carry their own price text. They contain no business logic and no
//! references into the store, so rendering can never mutate catalog state.

use crate::pricing::PriceTag;

/// Complete UI view model for rendering.
///
/// Computed by `AppState::compute_viewmodel()` and consumed by the renderer.
/// Exactly one of `detail` / `empty_state` / `cards` drives the main area;
/// `notice` overlays whichever mode is active.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Card rows to display in the grid.
    pub cards: Vec<CardItem>,

    /// Index of the selected card within `cards` (window-relative).
    pub selected_index: usize,

    /// Header information (title, active category, count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Optional empty state message (loading, no products, no matches).
    pub empty_state: Option<EmptyState>,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Optional detail view (when a product is open).
    pub detail: Option<DetailView>,

    /// Optional transient notice banner.
    pub notice: Option<NoticeInfo>,
}

/// Cover media for a card or detail view.
///
/// Terminal rendering cannot inline image files, so an image reference renders
/// as an indicator plus its path in the detail view, while products without
/// images fall back to a single-character glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMedia {
    /// Reference to an image file (first entry of the product's images).
    Image(String),

    /// Fallback glyph derived from the product title's first character, or a
    /// generic glyph for untitled products.
    Glyph(char),
}

/// Display information for a single product card.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Cover media indicator.
    pub media: CardMedia,

    /// Category display label.
    pub category_label: String,

    /// Sanitized, possibly truncated title.
    pub title: String,

    /// Sanitized description, truncated to the available column width.
    pub description: String,

    /// Card price with its "a partir de" flag.
    pub price: PriceTag,

    /// Whether this card is currently selected.
    pub is_selected: bool,
}

/// One selectable variant row in the detail view.
#[derive(Debug, Clone)]
pub struct VariantOption {
    /// Zero-based variant index (shown to the user as index + 1).
    pub index: usize,

    /// Sanitized variant name.
    pub label: String,

    /// Formatted price for this variant.
    pub price_text: String,

    /// Whether this variant is the current selection.
    pub is_selected: bool,
}

/// Display information for the product detail view.
#[derive(Debug, Clone)]
pub struct DetailView {
    /// Main preview media (current gallery selection, or fallback glyph).
    pub media: CardMedia,

    /// All gallery image references when the product has more than one image;
    /// empty otherwise.
    pub gallery: Vec<String>,

    /// Index of the current preview within `gallery` (0 when gallery is empty).
    pub preview_index: usize,

    /// Category display label.
    pub category_label: String,

    /// Sanitized title.
    pub title: String,

    /// Sanitized description.
    pub description: String,

    /// Sanitized details text, or the "—" placeholder when absent.
    pub details: String,

    /// Price text for the current variant selection (or flat price).
    pub price_text: String,

    /// Ordered variant options; empty for flat-priced products.
    pub variants: Vec<VariantOption>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown while the catalog loads, after a failed load, or when no products
/// match the active filter.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Transient notice banner information.
#[derive(Debug, Clone)]
pub struct NoticeInfo {
    /// Notice text (load failure or interest confirmation).
    pub text: String,
}
