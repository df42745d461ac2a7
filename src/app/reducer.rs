//! The state transition function.
//!
//! [`transition`] turns a [`Message`] and the current [`AppState`] into the
//! next state plus at most one [`Command`]. It is pure and synchronous: it
//! performs no I/O, never blocks, and handles every message variant.
//!
//! | Message              | Next state                                          | Command   |
//! |----------------------|-----------------------------------------------------|-----------|
//! | `SetInput(text)`     | `input = text`                                      | none      |
//! | `Search`, blank      | `error = BLANK_QUERY_ERROR`, `is_loading` untouched | none      |
//! | `Search`, non-blank  | `error = None`, `is_loading = true`                 | `Search`  |
//! | `SearchSucceeded(r)` | `response = r`, `error = None`, not loading         | none      |
//! | `SearchFailed(m)`    | `error = m`, not loading, `response` kept           | none      |
//!
//! # Example
//!
//! ```rust
//! use shelfscout::app::{transition, AppState, Command, Message};
//!
//! let (state, _) = transition(Message::SetInput("  hobbit ".into()), &AppState::new());
//! let (state, command) = transition(Message::Search, &state);
//! assert!(state.is_loading);
//! assert!(matches!(command, Some(Command::Search(request)) if request.query == "hobbit"));
//! ```

use super::{AppState, Command, Message};
use crate::domain::SearchRequest;

/// Error shown when `Search` is submitted with blank input.
pub const BLANK_QUERY_ERROR: &str = "Enter a title, author, or keywords.";

/// Computes the next state and the side effect to run, if any.
///
/// Fields not named in the transition table are carried over unchanged. In
/// particular `input` is never cleared by a search, and a blank `Search`
/// leaves `is_loading` exactly as it was.
#[must_use]
pub fn transition(message: Message, state: &AppState) -> (AppState, Option<Command>) {
    let _span = tracing::debug_span!("transition", message = message.name()).entered();

    match message {
        Message::SetInput(input) => {
            tracing::trace!(input_len = input.len(), "input updated");
            (AppState { input, ..state.clone() }, None)
        }
        Message::Search => {
            let query = state.input.trim();

            if query.is_empty() {
                tracing::debug!("blank query rejected");
                return (
                    AppState {
                        error: Some(BLANK_QUERY_ERROR.to_string()),
                        ..state.clone()
                    },
                    None,
                );
            }

            tracing::debug!(query = %query, already_loading = state.is_loading, "search requested");
            let command = Command::Search(SearchRequest::new(query));

            (
                AppState {
                    error: None,
                    is_loading: true,
                    ..state.clone()
                },
                Some(command),
            )
        }
        Message::SearchSucceeded(response) => {
            tracing::debug!(
                candidates = response.candidates.len(),
                notices = response.messages.len(),
                "search succeeded"
            );
            (
                AppState {
                    input: state.input.clone(),
                    response: Some(response),
                    error: None,
                    is_loading: false,
                },
                None,
            )
        }
        Message::SearchFailed(error) => {
            tracing::debug!(error = %error, kept_response = state.response.is_some(), "search failed");
            (
                AppState {
                    error: Some(error),
                    is_loading: false,
                    ..state.clone()
                },
                None,
            )
        }
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use crate::domain::{Candidate, ExtractedQueryDetail, SearchRequest, SearchResponse};
    use proptest::prelude::*;

    fn candidate_strategy() -> impl Strategy<Value = Candidate> {
        (".{0,20}", ".{0,12}", proptest::option::of(1500i32..2030)).prop_map(|(title, author, year)| {
            Candidate {
                work_title: title,
                work_id: "/works/OL1W".to_string(),
                author,
                author_id: "/authors/OL1A".to_string(),
                first_publish_year: year,
                cover_url: None,
                explanation: "matched".to_string(),
            }
        })
    }

    fn response_strategy() -> impl Strategy<Value = SearchResponse> {
        (
            proptest::collection::vec(candidate_strategy(), 0..4),
            proptest::collection::vec(".{0,16}", 0..3),
        )
            .prop_map(|(candidates, messages)| SearchResponse {
                normalized_query: ExtractedQueryDetail::default(),
                candidates,
                messages,
            })
    }

    fn state_strategy() -> impl Strategy<Value = AppState> {
        (
            ".{0,24}",
            proptest::option::of(response_strategy()),
            proptest::option::of(".{0,16}"),
            any::<bool>(),
        )
            .prop_map(|(input, response, error, is_loading)| AppState {
                input,
                response,
                error,
                is_loading,
            })
    }

    /// Input made only of whitespace, including the empty string.
    fn blank_input_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r')], 0..6)
            .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn set_input_only_touches_input(state in state_strategy(), text in ".{0,32}") {
            let (next, command) = transition(Message::SetInput(text.clone()), &state);

            prop_assert_eq!(&next.input, &text);
            prop_assert_eq!(next.response, state.response);
            prop_assert_eq!(next.error, state.error);
            prop_assert_eq!(next.is_loading, state.is_loading);
            prop_assert!(command.is_none());
        }

        #[test]
        fn blank_search_only_sets_validation_error(
            state in state_strategy(),
            blank in blank_input_strategy(),
        ) {
            let state = AppState { input: blank, ..state };
            let (next, command) = transition(Message::Search, &state);

            prop_assert_eq!(next.error.as_deref(), Some(BLANK_QUERY_ERROR));
            prop_assert_eq!(next.is_loading, state.is_loading);
            prop_assert_eq!(next.response, state.response);
            prop_assert_eq!(next.input, state.input);
            prop_assert!(command.is_none());
        }

        #[test]
        fn non_blank_search_issues_one_trimmed_command(
            state in state_strategy(),
            word in "[a-z0-9]{1,12}",
            padding in blank_input_strategy(),
        ) {
            let state = AppState { input: format!("{padding}{word}{padding}"), ..state };
            let (next, command) = transition(Message::Search, &state);

            prop_assert!(next.is_loading);
            prop_assert!(next.error.is_none());
            prop_assert_eq!(&next.input, &state.input);
            prop_assert_eq!(next.response, state.response);
            prop_assert_eq!(command, Some(Command::Search(SearchRequest::new(word))));
        }

        #[test]
        fn success_replaces_response_and_clears_error(
            state in state_strategy(),
            response in response_strategy(),
        ) {
            let (next, command) = transition(Message::SearchSucceeded(response.clone()), &state);

            prop_assert_eq!(next.response, Some(response));
            prop_assert!(next.error.is_none());
            prop_assert!(!next.is_loading);
            prop_assert_eq!(next.input, state.input);
            prop_assert!(command.is_none());
        }

        #[test]
        fn failure_keeps_response(state in state_strategy(), message in ".{0,32}") {
            let (next, command) = transition(Message::SearchFailed(message.clone()), &state);

            prop_assert_eq!(next.error, Some(message));
            prop_assert!(!next.is_loading);
            prop_assert_eq!(next.response, state.response);
            prop_assert_eq!(next.input, state.input);
            prop_assert!(command.is_none());
        }

        #[test]
        fn search_button_matches_reducer(state in state_strategy()) {
            let (_, command) = transition(Message::Search, &state);
            let viewmodel = state.compute_viewmodel(24, 80);

            // An enabled button always leads to a command; a blank input never does.
            if viewmodel.search_bar.can_search {
                prop_assert!(command.is_some());
            }
            if state.input.trim().is_empty() {
                prop_assert!(command.is_none());
            }
        }
    }
}
