//! Side effects requested by the reducer.
//!
//! The reducer never performs I/O. When a transition needs the discovery
//! service it returns a [`Command`] describing the call, and the command
//! runner in [`crate::gateway`] carries it out and reports back with a
//! [`Message`](crate::app::Message).

use crate::domain::SearchRequest;

/// A side effect for the command runner to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Call the discovery service. Completes with `SearchSucceeded` or
    /// `SearchFailed`.
    Search(SearchRequest),
}
