//! Detail view component renderer.
//!
//! Renders the open product's detail panel: preview media, category badge,
//! title, price for the current variant selection, the variant options list,
//! the image gallery, and the details block with the interest call-to-action
//! living in the footer hints.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardMedia, DetailView};

/// Left margin for the detail panel body.
const PANEL_MARGIN: usize = 3;

/// Renders the detail panel starting at the specified row.
///
/// Lines are emitted top-down; the caller reserves the footer rows. Returns
/// the next available row position.
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(PANEL_MARGIN * 2);
    let mut current_row = row;

    current_row = render_line(
        current_row,
        &format!("[{}]", detail.category_label),
        &Theme::fg(&theme.colors.category_fg),
    );

    current_row = render_line(
        current_row,
        &truncate_chars(&detail.title, width),
        &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal)),
    );

    let media_line = match &detail.media {
        CardMedia::Image(path) => format!("⊡ {}", truncate_chars(path, width.saturating_sub(2))),
        CardMedia::Glyph(glyph) => glyph.to_string(),
    };
    current_row = render_line(current_row, &media_line, &Theme::fg(&theme.colors.text_dim));

    current_row = render_line(
        current_row,
        &detail.price_text,
        &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.price_fg)),
    );
    current_row += 1;

    if !detail.description.is_empty() {
        current_row = render_line(
            current_row,
            &truncate_chars(&detail.description, width),
            &Theme::fg(&theme.colors.text_normal),
        );
        current_row += 1;
    }

    if !detail.variants.is_empty() {
        current_row = render_line(
            current_row,
            "Escolha a opção:",
            &Theme::fg(&theme.colors.text_normal),
        );

        for option in &detail.variants {
            let marker = if option.is_selected { "▸" } else { " " };
            let line = format!(
                "{marker} [{}] {} — {}",
                option.index + 1,
                option.label,
                option.price_text
            );
            let style = if option.is_selected {
                format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.price_fg))
            } else {
                Theme::fg(&theme.colors.text_normal)
            };
            current_row = render_line(current_row, &truncate_chars(&line, width), &style);
        }
        current_row += 1;
    }

    if !detail.gallery.is_empty() {
        let entries: Vec<String> = detail
            .gallery
            .iter()
            .enumerate()
            .map(|(i, image)| {
                if i == detail.preview_index {
                    format!("▸{image}")
                } else {
                    image.clone()
                }
            })
            .collect();
        let line = format!("Galeria: {}", entries.join("  "));
        current_row = render_line(
            current_row,
            &truncate_chars(&line, width),
            &Theme::fg(&theme.colors.text_dim),
        );
        current_row += 1;
    }

    current_row = render_line(
        current_row,
        "Detalhes do Produto",
        &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal)),
    );
    current_row = render_wrapped(current_row, &detail.details, width, theme);

    current_row
}

/// Renders one styled line at the panel margin. Returns the next row.
fn render_line(row: usize, text: &str, style: &str) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(PANEL_MARGIN));
    print!("{style}{text}{}", Theme::reset());
    row + 1
}

/// Renders dim body text naively wrapped at the panel width.
fn render_wrapped(row: usize, text: &str, width: usize, theme: &Theme) -> usize {
    if width == 0 {
        return row;
    }

    let mut current_row = row;
    let chars: Vec<char> = text.chars().collect();
    for chunk in chars.chunks(width) {
        let line: String = chunk.iter().collect();
        current_row = render_line(current_row, &line, &Theme::fg(&theme.colors.text_dim));
    }
    current_row
}
