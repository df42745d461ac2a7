//! Results area: candidate cards or a centered empty-state message.

use crate::app::state::CARD_INDENT;
use crate::ui::helpers::{centered_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CandidateCard, EmptyState, ResultsBody};

/// Renders the results body starting at `row`. Returns the next free row.
pub fn render_results(row: usize, body: &ResultsBody, theme: &Theme, cols: usize) -> usize {
    match body {
        ResultsBody::Empty(empty) => render_empty_state(row, empty, theme, cols),
        ResultsBody::Candidates { cards, hidden } => {
            let mut current_row = row;
            for card in cards {
                current_row = render_card(current_row, card, theme);
            }
            if *hidden > 0 {
                position_cursor(current_row, 1);
                print!("{}", " ".repeat(CARD_INDENT));
                print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
                print!("+{hidden} more");
                print!("{}", Theme::reset());
                current_row += 1;
            }
            current_row
        }
    }
}

/// Draws one card: title, byline, optional cover link, explanation, then a
/// blank row.
fn render_card(row: usize, card: &CandidateCard, theme: &Theme) -> usize {
    let indent = " ".repeat(CARD_INDENT);

    position_cursor(row, 1);
    print!("{indent}");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.card_title_fg));
    print!("{}", card.title);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{indent}");
    print!("{}", Theme::fg(&theme.colors.card_meta_fg));
    print!("{}", card.byline);
    print!("{}", Theme::reset());

    let mut next = row + 2;
    if let Some(cover) = &card.cover {
        position_cursor(next, 1);
        print!("{indent}");
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("{cover}");
        print!("{}", Theme::reset());
        next += 1;
    }

    position_cursor(next, 1);
    print!("{indent}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", card.explanation);
    print!("{}", Theme::reset());

    row + card.height()
}

/// Draws a single centered message one row below `row`.
fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = empty.message.chars().count();
    let padding = centered_padding(msg_len, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(padding + msg_len)));
    print!("{}", Theme::reset());

    row + 2
}
