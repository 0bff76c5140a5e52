//! Notice banner component renderer.
//!
//! Renders the single transient notice (load failure or interest
//! confirmation) as a right-aligned banner on the top row. At most one notice
//! is visible at a time; the handler replaces any current one.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeInfo;

/// Renders the notice banner over the top row.
///
/// Drawn after the active mode so it overlays whatever is underneath,
/// mirroring the original storefront's floating notification.
pub fn render_notice(notice: &NoticeInfo, theme: &Theme, cols: usize) {
    let text = truncate_chars(&notice.text, cols.saturating_sub(4));
    let banner = format!(" {text} ");
    let start_col = cols.saturating_sub(banner.chars().count()) + 1;

    position_cursor(1, start_col.max(1));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.notice_fg));
    print!("{}", Theme::bg(&theme.colors.notice_bg));
    print!("{banner}");
    print!("{}", Theme::reset());
}
