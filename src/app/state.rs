//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin UI. It is never
//! mutated in place: the reducer builds a fresh value for every message and
//! the program loop swaps it in. View models are computed on demand from a
//! state snapshot and the current pane size.
//!
//! # Example
//!
//! ```rust
//! use shelfscout::app::AppState;
//!
//! let state = AppState::new();
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.search_bar.button_label, "Search");
//! ```

use crate::domain::{Candidate, SearchResponse};
use crate::ui::helpers::truncate_to_width;
use crate::ui::viewmodel::{
    CandidateCard, EmptyState, FooterInfo, HeaderInfo, ResultsBody, SearchBarInfo, UIViewModel,
};

/// Placeholder shown in the search box while the input is empty.
pub const INPUT_PLACEHOLDER: &str = "Try: tolkien hobbit illustrated 1937";

/// Rows taken by a candidate card without a cover line (three text lines and
/// a gap).
pub const CARD_HEIGHT: usize = 4;

/// Columns left free on both sides of card text.
pub const CARD_INDENT: usize = 4;

/// Rows used by everything except notices, the error banner and the results:
/// blank, title, subtitle, border, search box (3), gap, footer border, footer.
const CHROME_ROWS: usize = 10;

/// Everything the UI needs to render at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Current text box contents, exactly as typed.
    pub input: String,

    /// Last successful discovery response.
    ///
    /// Kept when a later search fails, so stale results stay visible next to
    /// the new error.
    pub response: Option<SearchResponse>,

    /// Last validation or gateway error message.
    pub error: Option<String>,

    /// True while a discovery call issued by `Search` is outstanding.
    pub is_loading: bool,
}

impl AppState {
    /// Creates the initial state: empty input, no response, no error, idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a `Search` would currently issue a discovery call and the
    /// search button should be enabled.
    #[must_use]
    pub fn can_search(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    ///
    /// # Results Body
    ///
    /// 1. A response is present: its candidates as cards, or
    ///    "No candidates found." when the list is empty. This holds even
    ///    while a newer search is loading.
    /// 2. No response but loading: "Searching Open Library...".
    /// 3. Otherwise: a prompt to enter a query.
    ///
    /// Cards that do not fit below the chrome are dropped and counted in
    /// [`ResultsBody::Candidates::hidden`].
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let notices = self
            .response
            .as_ref()
            .map(|response| response.messages.clone())
            .unwrap_or_default();

        let body = match &self.response {
            Some(response) if response.candidates.is_empty() => ResultsBody::Empty(EmptyState {
                message: "No candidates found.".to_string(),
            }),
            Some(response) => {
                let available_rows = self.calculate_available_rows(rows, notices.len());
                self.compute_cards(&response.candidates, available_rows, cols)
            }
            None if self.is_loading => ResultsBody::Empty(EmptyState {
                message: "Searching Open Library...".to_string(),
            }),
            None => ResultsBody::Empty(EmptyState {
                message: "Enter a query to find a likely match.".to_string(),
            }),
        };

        UIViewModel {
            header: Self::compute_header(),
            search_bar: self.compute_search_bar(),
            error: self.error.clone(),
            notices,
            body,
            footer: self.compute_footer(),
        }
    }

    /// Lays out as many candidate cards as fit into `available_rows`.
    ///
    /// Cards with a cover line are one row taller. One row is reserved for
    /// the "+N more" line whenever not every card fits.
    fn compute_cards(&self, candidates: &[Candidate], available_rows: usize, cols: usize) -> ResultsBody {
        let width = cols.saturating_sub(CARD_INDENT * 2);
        let mut cards: Vec<CandidateCard> = candidates
            .iter()
            .map(|candidate| Self::compute_card(candidate, width))
            .collect();

        let total_rows: usize = cards.iter().map(CandidateCard::height).sum();
        if total_rows > available_rows {
            let budget = available_rows.saturating_sub(1);
            let mut used = 0;
            let visible = cards
                .iter()
                .take_while(|card| {
                    used += card.height();
                    used <= budget
                })
                .count();
            cards.truncate(visible);
        }

        tracing::trace!(
            total = candidates.len(),
            visible = cards.len(),
            loading = self.is_loading,
            "candidate cards computed"
        );

        ResultsBody::Candidates {
            hidden: candidates.len() - cards.len(),
            cards,
        }
    }

    fn compute_card(candidate: &Candidate, width: usize) -> CandidateCard {
        let byline = match candidate.first_publish_year {
            Some(year) => format!("{}  First published: {year}", candidate.author),
            None => candidate.author.clone(),
        };

        CandidateCard {
            title: truncate_to_width(&candidate.work_title, width),
            byline: truncate_to_width(&byline, width),
            cover: candidate
                .cover_url
                .as_deref()
                .map(|url| truncate_to_width(&format!("Cover: {url}"), width)),
            explanation: truncate_to_width(&candidate.explanation, width),
        }
    }

    fn compute_header() -> HeaderInfo {
        HeaderInfo {
            title: " Shelfscout ".to_string(),
            subtitle: "Paste a messy query with a title, an author or keywords, and get the most likely book."
                .to_string(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let is_placeholder = self.input.is_empty();
        SearchBarInfo {
            text: if is_placeholder {
                INPUT_PLACEHOLDER.to_string()
            } else {
                self.input.clone()
            },
            is_placeholder,
            button_label: if self.is_loading { "Searching..." } else { "Search" }.to_string(),
            can_search: self.can_search(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.is_loading {
            "Type to edit  Ctrl+u: clear  Esc: close  (search in progress)"
        } else {
            "Enter: search  Backspace: delete  Ctrl+u: clear  Esc: close"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for candidate cards after the chrome, the error banner and
    /// one row per notice.
    const fn calculate_available_rows(&self, total_rows: usize, notice_count: usize) -> usize {
        let error_rows = if self.error.is_some() { 1 } else { 0 };
        total_rows.saturating_sub(CHROME_ROWS + error_rows + notice_count)
    }
}
