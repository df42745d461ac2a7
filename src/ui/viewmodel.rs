//! View model types representing renderable UI state.
//!
//! View models are created by [`AppState::compute_viewmodel`] and consumed by
//! the renderer. They hold display-ready strings only: truncation, labels and
//! layout decisions are already made, so the components just print.
//!
//! [`AppState::compute_viewmodel`]: crate::app::AppState::compute_viewmodel

use crate::app::state::CARD_HEIGHT;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title and subtitle.
    pub header: HeaderInfo,

    /// Query box and search button.
    pub search_bar: SearchBarInfo,

    /// Error banner text, shown above the results when present.
    pub error: Option<String>,

    /// Informational notices from the last response, one per line.
    pub notices: Vec<String>,

    /// The results area.
    pub body: ResultsBody,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, centered and bold.
    pub title: String,
    /// One-line description under the title.
    pub subtitle: String,
}

/// Search box and button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Text inside the box: the input, or the placeholder when input is empty.
    pub text: String,

    /// Whether `text` is the placeholder and should be dimmed.
    pub is_placeholder: bool,

    /// "Search", or "Searching..." while a call is outstanding.
    pub button_label: String,

    /// Whether the button is enabled.
    pub can_search: bool,
}

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsBody {
    /// A single centered message instead of results.
    Empty(EmptyState),

    /// Candidate cards, best match first.
    Candidates {
        /// Cards that fit into the pane.
        cards: Vec<CandidateCard>,
        /// Number of candidates left out for lack of space.
        hidden: usize,
    },
}

/// Centered message for an empty results area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Message text.
    pub message: String,
}

/// One candidate, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCard {
    /// Work title.
    pub title: String,
    /// Author, followed by "First published: <year>" when the year is known.
    pub byline: String,
    /// "Cover: <url>", if the service returned a cover image.
    pub cover: Option<String>,
    /// Why the service picked this candidate.
    pub explanation: String,
}

impl CandidateCard {
    /// Rows this card takes when rendered, including the gap below it.
    #[must_use]
    pub fn height(&self) -> usize {
        CARD_HEIGHT + usize::from(self.cover.is_some())
    }
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
