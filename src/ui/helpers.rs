//! Shared rendering utilities and helpers.
//!
//! This module provides low-level utilities used across UI components: cursor
//! positioning, neutralization of adversarial text, and UTF-8-safe truncation.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Neutralizes characters that would break the rendering surface.
///
/// Catalog text is arbitrary external input. On a terminal the reserved,
/// injection-capable characters are the control bytes: ESC opens an ANSI
/// sequence, newlines and carriage returns break row accounting. Each control
/// character is replaced with U+FFFD so any field renders as literal text on a
/// single line. Printable characters pass through unchanged, including `&`,
/// `<`, `>`, `"` and `'`: the terminal has no entity syntax, so they already
/// render literally.
///
/// # Examples
///
/// ```
/// use vitrine::ui::helpers::sanitize;
///
/// assert_eq!(sanitize("<script>"), "<script>");
/// assert_eq!(sanitize("a\u{1b}[31mb"), "a\u{fffd}[31mb");
/// assert_eq!(sanitize("linha\nquebrada"), "linha\u{fffd}quebrada");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { '\u{fffd}' } else { c })
        .collect()
}

/// Truncates text to at most `max` characters, appending `…` when cut.
///
/// Operates on characters, not bytes, so accented text ("Decoração") never
/// splits mid-codepoint.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Pads or truncates text to exactly `width` characters.
///
/// Used for fixed-width grid columns so selection backgrounds stay aligned.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_chars(text, width);
    let len = truncated.chars().count();
    format!("{truncated}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_characters_render_literally() {
        assert_eq!(sanitize("<script>alert('x')</script>"), "<script>alert('x')</script>");
        assert_eq!(sanitize("R&D \"quote\""), "R&D \"quote\"");
    }

    #[test]
    fn control_bytes_are_neutralized() {
        assert_eq!(sanitize("\u{1b}[2J"), "\u{fffd}[2J");
        assert_eq!(sanitize("a\tb\r\n"), "a\u{fffd}b\u{fffd}\u{fffd}");
    }

    #[test]
    fn truncation_is_character_safe() {
        assert_eq!(truncate_chars("Decoração", 20), "Decoração");
        assert_eq!(truncate_chars("Decoração", 5), "Deco…");
    }

    #[test]
    fn padding_fills_to_exact_width() {
        assert_eq!(pad_to_width("abc", 5), "abc  ");
        assert_eq!(pad_to_width("abcdef", 5).chars().count(), 5);
    }
}
