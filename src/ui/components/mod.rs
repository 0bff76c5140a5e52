//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component renders
//! one part of the interface; the layout functions below compose them per
//! mode.
//!
//! # Components
//!
//! - [`header`]: title bar with active category and count
//! - [`footer`]: keybinding hints
//! - [`search`]: search input box
//! - [`grid`]: product card rows (PRODUTO, CATEGORIA, DESCRIÇÃO, PREÇO)
//! - [`detail`]: open-product panel with variants and gallery
//! - [`notice`]: transient banner overlay
//! - [`empty`]: empty state message
//!
//! # Layout Modes
//!
//! - [`render_browse_mode`]: Header + Grid + Footer
//! - [`render_search_mode`]: Header + SearchBar + Grid + Footer
//! - [`render_detail_mode`]: Header + Detail panel + Footer
//! - [`render_empty_mode`]: Header + (SearchBar) + EmptyState + Footer

mod detail;
mod empty;
mod footer;
mod grid;
mod header;
mod notice;
mod search;

pub use empty::render_empty_state;
pub use notice::render_notice;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, SearchBarInfo, UIViewModel};

use detail::render_detail;
use footer::render_footer;
use grid::{render_grid_headers, render_grid_rows};
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/grid, grid/footer). Returns the next
/// available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the footer area (border + hints) anchored to the bottom.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the browse layout (no search bar).
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Grid Headers]
/// [Card Rows]
/// [Blank padding]
/// [Border]
/// [Footer]
/// ```
pub fn render_browse_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_grid_headers(current_row, theme, cols);
    let _current_row = render_grid_rows(current_row, &vm.cards, theme, cols);

    render_bottom(vm, theme, cols, rows);
}

/// Renders the search layout (browse layout plus the 3-line search box).
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    current_row = render_grid_headers(current_row, theme, cols);
    let _current_row = render_grid_rows(current_row, &vm.cards, theme, cols);

    render_bottom(vm, theme, cols, rows);
}

/// Renders the detail layout for an open product.
pub fn render_detail_mode(
    vm: &UIViewModel,
    detail_view: &DetailView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_detail(current_row + 1, detail_view, theme, cols);

    render_bottom(vm, theme, cols, rows);
}

/// Renders the empty layout (loading, failed load, or no matches).
pub fn render_empty_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    let _current_row = render_border(current_row, &theme.colors.border, cols);

    // The 3-line search box occupies rows 4-6; push the message below it.
    let empty_row = if let Some(search) = &vm.search_bar {
        render_search_bar(4, search, theme, cols);
        8
    } else {
        6
    };

    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty_row, empty, theme, cols);
    }

    render_bottom(vm, theme, cols, rows);
}
