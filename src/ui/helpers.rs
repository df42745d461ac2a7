//! Shared rendering utilities.

/// Ellipsis appended to truncated text.
const ELLIPSIS: &str = "...";

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` characters.
///
/// Text that is cut ends with `...`. Counts characters, not bytes, so
/// multi-byte text is never split inside a code point.
///
/// ```rust
/// use shelfscout::ui::helpers::truncate_to_width;
///
/// assert_eq!(truncate_to_width("The Hobbit", 20), "The Hobbit");
/// assert_eq!(truncate_to_width("The Fellowship of the Ring", 12), "The Fello...");
/// ```
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    if width <= ellipsis_len {
        return text.chars().take(width).collect();
    }

    let mut truncated: String = text.chars().take(width - ellipsis_len).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Left padding that centers `len` characters in `cols` columns.
#[must_use]
pub const fn centered_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_to_width("Dune", 4), "Dune");
    }

    #[test]
    fn long_text_ends_with_ellipsis() {
        let out = truncate_to_width(&"A".repeat(100), 32);
        assert_eq!(out.chars().count(), 32);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        assert_eq!(truncate_to_width("Légendes d'été", 8), "Légen...");
    }

    #[test]
    fn tiny_widths_skip_the_ellipsis() {
        assert_eq!(truncate_to_width("Hobbit", 2), "Ho");
        assert_eq!(truncate_to_width("Hobbit", 0), "");
    }

    #[test]
    fn padding_centers_text() {
        assert_eq!(centered_padding(10, 80), 35);
        assert_eq!(centered_padding(100, 80), 0);
    }
}
