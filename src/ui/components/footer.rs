//! Footer component renderer.

use crate::ui::helpers::{centered_padding, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints, centered and dimmed, at `row`.
///
/// Text wider than the pane is truncated. Returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_to_width(&footer.keybindings, cols);
    let text_len = help_text.chars().count();
    let padding = centered_padding(text_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
