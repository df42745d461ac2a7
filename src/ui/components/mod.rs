//! Composable UI component renderers.
//!
//! - [`header`]: title and subtitle
//! - [`search`]: query box with the search button
//! - [`banner`]: error line and response notices
//! - [`results`]: candidate cards or the empty-state message
//! - [`footer`]: keybinding hints
//!
//! Every renderer takes the row to start at and returns the next free row.

mod banner;
mod footer;
mod header;
mod results;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use banner::render_banner;
use footer::render_footer;
use header::render_header;
use results::render_results;
use search::render_search_bar;

/// Renders a horizontal border line at `row`. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout.
///
/// ```text
/// [blank line]
/// [Title]
/// [Subtitle]
/// [Border]
/// [Search box - 3 lines]
/// [blank line]
/// [Error banner, if any]
/// [Notices, one per line]
/// [Results]
/// [padding]
/// [Border]
/// [Footer]
/// ```
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_banner(current_row + 1, vm.error.as_deref(), &vm.notices, theme, cols);
    let _current_row = render_results(current_row, &vm.body, theme, cols);

    let footer_start = rows;
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
