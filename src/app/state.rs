//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for view recomputation, selection management,
//! and UI view model generation. It serves as the single source of truth for
//! all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the [`CatalogStore`]) from derived and
//! interaction state (selection, input mode, detail view, notice). View models
//! are computed on demand from state snapshots; nothing in the UI layer ever
//! reaches back into the store.
//!
//! # State Components
//!
//! - **Store**: authoritative product list and its filtered view
//! - **Selection**: cursor position within the filtered view
//! - **Input Mode**: controls keybinding interpretation and UI layout
//! - **Category / Search**: the two independent filter inputs
//! - **Detail**: the open-product state machine (variant + preview selection)
//! - **Notice**: the single transient banner and its pending timers

use super::modes::{CatalogStatus, DetailState, InputMode};
use crate::catalog::{CatalogStore, CategoryFilter, SearchFilter};
use crate::domain::category;
use crate::pricing::{self, AmountFormatter, PtBrFormatter};
use crate::ui::helpers::{sanitize, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, CardMedia, DetailView, EmptyState, FooterInfo, HeaderInfo, NoticeInfo,
    SearchBarInfo, UIViewModel, VariantOption,
};

/// Seconds a notice stays visible before auto-dismissing.
pub const NOTICE_DWELL_SECS: f64 = 3.0;

/// Glyph shown for products without a usable title character.
const GENERIC_GLYPH: char = '🧩';

/// Fixed width of the title column in the card grid.
const TITLE_COLUMN_WIDTH: usize = 37;

/// Fixed width of the category column in the card grid.
const CATEGORY_COLUMN_WIDTH: usize = 14;

/// Fixed width of the price column in the card grid.
const PRICE_COLUMN_WIDTH: usize = 24;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and worker
/// responses. View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Authoritative catalog and its filtered view.
    pub store: CatalogStore,

    /// Lifecycle of the one-shot catalog load.
    pub status: CatalogStatus,

    /// Zero-based index of the selected card within the filtered view.
    ///
    /// Clamped to valid bounds whenever the view is recomputed. Wraps around
    /// during navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query string.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace`, cleared by
    /// `ExitSearch` and `Escape`.
    pub search_query: String,

    /// Active category key; `None` means all categories.
    pub active_category: Option<String>,

    /// Detail-view state machine.
    pub detail: DetailState,

    /// Current notice text, if one is showing.
    pub notice: Option<String>,

    /// Number of notice-dismiss timers still pending.
    ///
    /// A new notice replaces the current one but schedules its own timer; the
    /// notice only clears when the last pending timer fires, so a replacement
    /// keeps its full dwell.
    pub notice_timers: u32,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Configured WhatsApp phone for the interest deep link, if any.
    pub whatsapp_phone: Option<String>,
}

impl AppState {
    /// Creates a new application state with the given theme and phone config.
    ///
    /// The store starts empty in `Loading` status; the worker populates it
    /// once the initial fetch resolves.
    #[must_use]
    pub fn new(theme: Theme, whatsapp_phone: Option<String>) -> Self {
        Self {
            store: CatalogStore::new(),
            status: CatalogStatus::Loading,
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            active_category: None,
            detail: DetailState::Closed,
            notice: None,
            notice_timers: 0,
            theme,
            whatsapp_phone,
        }
    }

    /// Moves the selection cursor down by one card, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.store.view().is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.store.view().len();
    }

    /// Moves the selection cursor up by one card, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.store.view().is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.store.view().len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected product, if the view has any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&crate::domain::Product> {
        self.store.view().get(self.selected_index)
    }

    /// Recomputes the view from the active category filter.
    ///
    /// The search term is deliberately not reapplied here: a category click
    /// recomputes from the full catalog, mirroring the original storefront.
    pub fn apply_category_view(&mut self) {
        let filter = CategoryFilter::from_key(self.active_category.as_deref());
        self.store.set_view(|p| filter.matches(p));
        self.clamp_selection();
    }

    /// Recomputes the view from the current search term.
    ///
    /// Search always recomputes from the FULL catalog; the active category is
    /// not reapplied. `catalog::filter::both` exists for the stricter
    /// composition.
    pub fn apply_search_view(&mut self) {
        let filter = SearchFilter::new(&self.search_query);
        self.store.set_view(|p| filter.matches(p));
        self.clamp_selection();
    }

    /// Shows a notice, replacing any current one, and counts its timer.
    ///
    /// The caller must emit a matching
    /// [`Action::ScheduleNoticeDismiss`](crate::app::Action::ScheduleNoticeDismiss).
    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
        self.notice_timers = self.notice_timers.saturating_add(1);
    }

    /// Handles an expired notice timer; clears the notice when no timers
    /// remain pending. Returns whether the notice was cleared.
    pub fn notice_timer_fired(&mut self) -> bool {
        self.notice_timers = self.notice_timers.saturating_sub(1);
        if self.notice_timers == 0 && self.notice.is_some() {
            self.notice = None;
            return true;
        }
        false
    }

    fn clamp_selection(&mut self) {
        let len = self.store.view().len();
        if len == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(len - 1);
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Pure projection: formats prices, sanitizes and truncates text, windows
    /// the card list around the selection. Mutates nothing.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let notice = self
            .notice
            .as_ref()
            .map(|text| NoticeInfo { text: sanitize(text) });

        if let DetailState::Open {
            product,
            variant,
            preview,
        } = &self.detail
        {
            return UIViewModel {
                cards: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: FooterInfo {
                    keybindings:
                        "1-9: opção  g: galeria  i: tenho interesse  Esc: fechar".to_string(),
                },
                empty_state: None,
                search_bar: None,
                detail: Some(Self::compute_detail(product, *variant, *preview)),
                notice,
            };
        }

        if self.store.view().is_empty() {
            return UIViewModel {
                cards: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                empty_state: Some(self.compute_empty_state()),
                search_bar: self.compute_search_bar(),
                detail: None,
                notice,
            };
        }

        let available_rows = self.calculate_available_rows(rows);

        let view = self.store.view();
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(view.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && view.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let cards: Vec<CardItem> = view[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, product)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_card(product, absolute_idx, cols)
            })
            .collect();

        let selected_display_index = self.selected_index.saturating_sub(visible_start);

        UIViewModel {
            cards,
            selected_index: selected_display_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            detail: None,
            notice,
        }
    }

    /// Computes the card descriptor for one product.
    fn compute_card(
        &self,
        product: &crate::domain::Product,
        absolute_idx: usize,
        cols: usize,
    ) -> CardItem {
        let is_selected = absolute_idx == self.selected_index;

        // Matches the grid's column accounting: fixed columns plus separators.
        let description_width = cols.saturating_sub(
            TITLE_COLUMN_WIDTH + CATEGORY_COLUMN_WIDTH + PRICE_COLUMN_WIDTH + 2,
        );

        CardItem {
            media: Self::cover_media(product),
            category_label: sanitize(&category::display_label(product.category.as_deref())),
            title: truncate_chars(&sanitize(&product.title), TITLE_COLUMN_WIDTH - 2),
            description: truncate_chars(&sanitize(&product.description), description_width),
            price: pricing::card_price(product, &PtBrFormatter),
            is_selected,
        }
    }

    /// Computes the detail descriptor for the open product.
    fn compute_detail(
        product: &crate::domain::Product,
        variant: Option<usize>,
        preview: usize,
    ) -> DetailView {
        let gallery: Vec<String> = if product.images.len() > 1 {
            product.images.iter().map(|i| sanitize(i)).collect()
        } else {
            vec![]
        };

        let preview_index = if product.images.is_empty() {
            0
        } else {
            preview.min(product.images.len() - 1)
        };

        let media = product
            .images
            .get(preview_index)
            .map_or_else(
                || CardMedia::Glyph(Self::title_glyph(&product.title)),
                |image| CardMedia::Image(sanitize(image)),
            );

        let variants: Vec<VariantOption> = product
            .variants
            .iter()
            .enumerate()
            .map(|(index, v)| VariantOption {
                index,
                label: sanitize(&v.name),
                price_text: PtBrFormatter.format(v.price, &v.currency),
                is_selected: variant == Some(index),
            })
            .collect();

        let details = if product.details.is_empty() {
            "—".to_string()
        } else {
            sanitize(&product.details)
        };

        DetailView {
            media,
            gallery,
            preview_index,
            category_label: sanitize(&category::display_label(product.category.as_deref())),
            title: sanitize(&product.title),
            description: sanitize(&product.description),
            details,
            price_text: pricing::variant_price(product, variant, &PtBrFormatter),
            variants,
        }
    }

    /// Cover media for a card: first image, else a title glyph.
    fn cover_media(product: &crate::domain::Product) -> CardMedia {
        product.cover_image().map_or_else(
            || CardMedia::Glyph(Self::title_glyph(&product.title)),
            |image| CardMedia::Image(sanitize(image)),
        )
    }

    /// Fallback glyph: the title's first character, or a generic glyph.
    fn title_glyph(title: &str) -> char {
        title.chars().next().unwrap_or(GENERIC_GLYPH)
    }

    /// Computes header text: active category label plus visible count.
    fn compute_header(&self) -> HeaderInfo {
        let label = match self.active_category.as_deref() {
            Some(key) => category::display_label(Some(key)),
            None => "Todos".to_string(),
        };
        HeaderInfo {
            title: format!(" Vitrine — {label} ({}) ", self.store.view().len()),
        }
    }

    /// Computes footer keybinding hints for the current mode.
    fn compute_footer(&self) -> FooterInfo {
        use super::modes::SearchFocus;

        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: sair da busca  Enter: abrir  Ctrl+n/p: navegar  Digite para filtrar"
                    .to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: sair da busca  /: editar termo  Ctrl+n/p: navegar  Enter: abrir".to_string()
            }
            InputMode::Normal => {
                "j/k: navegar  /: buscar  c: categoria  a: todas  Enter: detalhes  q: sair"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes the empty-state message for the current load/filter status.
    fn compute_empty_state(&self) -> EmptyState {
        match self.status {
            CatalogStatus::Loading => EmptyState {
                message: "Carregando produtos…".to_string(),
                subtitle: String::new(),
            },
            CatalogStatus::Failed => EmptyState {
                message: "Nenhum produto disponível".to_string(),
                subtitle: "O catálogo não pôde ser carregado".to_string(),
            },
            CatalogStatus::Ready if !self.search_query.is_empty() => EmptyState {
                message: "Nenhum produto encontrado".to_string(),
                subtitle: "Tente outro termo de busca".to_string(),
            },
            CatalogStatus::Ready => EmptyState {
                message: "Nenhum produto cadastrado".to_string(),
                subtitle: "Adicione produtos ao arquivo de catálogo".to_string(),
            },
        }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Calculates rows available for cards after subtracting UI chrome.
    ///
    /// Accounts for header, borders, column headers, and footer; search mode
    /// additionally reserves the 3-line search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search(_) => total_rows.saturating_sub(9),
        }
    }
}
