//! Search bar component renderer.
//!
//! Draws the query box with the search button inside its right edge:
//!
//! ```text
//! [margin] ┌──────────────────────────────────┐ [margin]
//! [margin] │ tolkien hobbit        [ Search ] │ [margin]
//! [margin] └──────────────────────────────────┘ [margin]
//! ```

use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line search box at `row`. Returns the next free row.
///
/// A disabled button is drawn dimmed without a background. Placeholder text
/// is dimmed; typed text keeps the normal color.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let button = format!("[ {} ]", search.button_label);
    let button_len = button.chars().count();
    // one space before the text, one between text and button, one after the button
    let text_width = inner_width.saturating_sub(button_len + 3);
    let text = truncate_to_width(&search.text, text_width);
    let text_len = text.chars().count();

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│ ");

    if search.is_placeholder {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(text_width.saturating_sub(text_len) + 1));

    if search.can_search {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.button_disabled_fg));
    }
    print!("{button}");
    print!("{}", Theme::reset());

    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!(" │");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
