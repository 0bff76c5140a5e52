//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It handles mode
//! switching (browse, search, detail, empty) and overlays the notice banner
//! last so it floats above whichever mode is active.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate rendering mode. Prints ANSI-styled output using `print!`
/// macros; does not clear the screen or manage cursor position.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
///
/// Mode precedence: detail view, then empty state, then search, then browse.
/// The notice overlay always renders last.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(detail_view) = &vm.detail {
        components::render_detail_mode(vm, detail_view, theme, cols, rows);
    } else if vm.empty_state.is_some() {
        components::render_empty_mode(vm, theme, cols, rows);
    } else if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_browse_mode(vm, theme, cols, rows);
    }

    if let Some(notice) = &vm.notice {
        components::render_notice(notice, theme, cols);
    }
}
