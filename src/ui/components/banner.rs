//! Error banner and response notices.

use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;

/// Left indent shared by the banner and the notices.
const BANNER_INDENT: usize = 2;

/// Renders the error line, if any, and one line per notice.
///
/// Returns the next free row.
pub fn render_banner(
    row: usize,
    error: Option<&str>,
    notices: &[String],
    theme: &Theme,
    cols: usize,
) -> usize {
    let width = cols.saturating_sub(BANNER_INDENT * 2);
    let mut current_row = row;

    if let Some(error) = error {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(BANNER_INDENT));
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.error_fg));
        print!("{}", truncate_to_width(&format!("✗ {error}"), width));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    for notice in notices {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(BANNER_INDENT));
        print!("{}", Theme::fg(&theme.colors.notice_fg));
        print!("{}", truncate_to_width(&format!("• {notice}"), width));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
