//! Header component renderer: centered title and subtitle.

use crate::ui::helpers::{centered_padding, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title and subtitle starting at `row`.
///
/// Both lines are centered and padded to the full pane width. Returns the
/// next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate_to_width(&header.title, cols);
    let title_len = title.chars().count();
    let padding = centered_padding(title_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    let subtitle = truncate_to_width(&header.subtitle, cols);
    let subtitle_len = subtitle.chars().count();
    let padding = centered_padding(subtitle_len, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.subtitle_fg));
    print!("{}", " ".repeat(padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + subtitle_len)));
    print!("{}", Theme::reset());

    row + 2
}
