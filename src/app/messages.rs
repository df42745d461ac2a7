//! The closed set of events that can change application state.

use crate::domain::SearchResponse;

/// Events describing user intent or the outcome of a discovery call.
///
/// The reducer matches on this enum exhaustively, so a new variant is a
/// compile error everywhere it has to be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Replaces the query text box contents.
    SetInput(String),

    /// Submits the current input. Carries no payload: the reducer trims and
    /// validates `AppState::input` itself.
    Search,

    /// A discovery call completed with a response.
    SearchSucceeded(SearchResponse),

    /// A discovery call failed; the payload is the user-facing error text.
    SearchFailed(String),
}

impl Message {
    /// Short variant name used in tracing spans.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetInput(_) => "SetInput",
            Self::Search => "Search",
            Self::SearchSucceeded(_) => "SearchSucceeded",
            Self::SearchFailed(_) => "SearchFailed",
        }
    }
}
