//! Card grid component renderer.
//!
//! Renders the filtered product view as a list of card rows with PRODUTO,
//! CATEGORIA, DESCRIÇÃO, and PREÇO columns. Selection highlights the whole
//! row; variant-priced products show their "a partir de" lower bound.

use crate::ui::helpers::{pad_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, CardMedia};

/// Width of the title column, including the 2-character media indicator.
const TITLE_COLUMN_WIDTH: usize = 37;

/// Width of the category column.
const CATEGORY_COLUMN_WIDTH: usize = 14;

/// Width of the price column (fits "a partir de R$ 1.234,56").
const PRICE_COLUMN_WIDTH: usize = 24;

/// Renders the grid column headers at the specified row.
///
/// Returns the next available row position.
pub fn render_grid_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));

    let description_width = description_width(cols);
    print!(
        "{}{}{}{:>price_width$}",
        pad_to_width("  PRODUTO", TITLE_COLUMN_WIDTH),
        pad_to_width("CATEGORIA", CATEGORY_COLUMN_WIDTH + 1),
        pad_to_width("DESCRIÇÃO", description_width + 1),
        "PREÇO",
        price_width = PRICE_COLUMN_WIDTH,
    );

    print!("{}", Theme::reset());
    row + 1
}

/// Renders all card rows starting at the specified row.
///
/// Returns the next available row position (row + number of cards).
pub fn render_grid_rows(row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card_row(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single card row.
///
/// # Styling Precedence
///
/// 1. Selection colors (full-row background) when selected
/// 2. Column colors (category badge, dim description, price) otherwise
///
/// The row is padded to the full terminal width so selection backgrounds stay
/// consistent.
fn render_card_row(row: usize, card: &CardItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let glyph = match &card.media {
        CardMedia::Image(_) => '⊡',
        CardMedia::Glyph(c) => *c,
    };
    let title_cell = format!("{glyph} {}", card.title);
    print!("{}", pad_to_width(&title_cell, TITLE_COLUMN_WIDTH));

    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.category_fg));
    }
    print!("{} ", pad_to_width(&card.category_label, CATEGORY_COLUMN_WIDTH));

    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{} ", pad_to_width(&card.description, description_width(cols)));

    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    let price_cell = if card.price.starting_from {
        format!("a partir de {}", card.price.text)
    } else {
        card.price.text.clone()
    };
    let price_len = price_cell.chars().count().min(PRICE_COLUMN_WIDTH);
    print!(
        "{}{}",
        " ".repeat(PRICE_COLUMN_WIDTH.saturating_sub(price_len)),
        price_cell
    );

    print!("{}", Theme::reset());
    row + 1
}

/// Description column width: whatever the fixed columns leave over.
fn description_width(cols: usize) -> usize {
    cols.saturating_sub(TITLE_COLUMN_WIDTH + CATEGORY_COLUMN_WIDTH + PRICE_COLUMN_WIDTH + 2)
}
