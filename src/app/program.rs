//! The program loop: serial message processing over the reducer.
//!
//! [`Program`] owns the current [`AppState`] and a [`CommandRunner`]. Every
//! message, whether it comes from a key press or a completed discovery call,
//! goes through [`Program::dispatch`], which applies [`transition`] and hands
//! any resulting command to the runner. Messages are processed one at a time
//! in arrival order; a message produced while another is being processed is
//! queued behind it.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use shelfscout::app::{Message, Program};
//! use shelfscout::gateway::{CommandRunner, DiscoveryGateway, Endpoint, Transport};
//!
//! struct Discard;
//!
//! impl Transport for Discard {
//!     fn post(
//!         &mut self,
//!         _url: &str,
//!         _headers: BTreeMap<String, String>,
//!         _body: Vec<u8>,
//!         _context: BTreeMap<String, String>,
//!     ) {
//!     }
//! }
//!
//! let runner = CommandRunner::new(DiscoveryGateway::new(&Endpoint::default()), Discard);
//! let mut program = Program::new(runner);
//! program.dispatch(Message::SetInput("dune".into()));
//! program.dispatch(Message::Search);
//! assert!(program.state().is_loading);
//! ```

use super::{transition, AppState, Message};
use crate::gateway::{Access, CommandRunner, Transport, WebResponse};
use std::collections::VecDeque;

/// State holder and dispatcher for the search UI.
#[derive(Debug)]
pub struct Program<T: Transport> {
    state: AppState,
    runner: CommandRunner<T>,
}

impl<T: Transport> Program<T> {
    /// Starts a program from the initial state.
    #[must_use]
    pub fn new(runner: CommandRunner<T>) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    /// The current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The command runner, for inspecting outstanding calls.
    #[must_use]
    pub const fn runner(&self) -> &CommandRunner<T> {
        &self.runner
    }

    /// Records whether the host granted web access.
    ///
    /// A denial fails every call still outstanding; those failures go
    /// through the loop like any other message. Returns `true` if the state
    /// changed.
    pub fn set_access(&mut self, access: Access) -> bool {
        let failures = self.runner.set_access(access);
        self.drain(failures.into())
    }

    /// Processes `message` and every message it causes synchronously.
    ///
    /// Returns `true` if the state changed and the UI should re-render.
    pub fn dispatch(&mut self, message: Message) -> bool {
        self.drain(VecDeque::from([message]))
    }

    /// Feeds a transport completion into the loop.
    ///
    /// Completions that do not belong to an outstanding call are dropped.
    /// Returns `true` if the state changed.
    pub fn on_web_response(&mut self, response: WebResponse) -> bool {
        match self.runner.complete(response) {
            Some(message) => self.dispatch(message),
            None => false,
        }
    }

    fn drain(&mut self, mut queue: VecDeque<Message>) -> bool {
        let mut changed = false;

        while let Some(message) = queue.pop_front() {
            let (next, command) = transition(message, &self.state);

            if next != self.state {
                changed = true;
                self.state = next;
            }

            if let Some(command) = command {
                if let Some(follow_up) = self.runner.run(command) {
                    queue.push_back(follow_up);
                }
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{DiscoveryGateway, Endpoint, TICKET_KEY};
    use std::collections::BTreeMap;

    /// One captured `Transport::post` call.
    #[derive(Debug, Clone)]
    struct Post {
        url: String,
        headers: BTreeMap<String, String>,
        body: Vec<u8>,
        context: BTreeMap<String, String>,
    }

    #[derive(Debug, Default)]
    struct Outbox {
        posts: Vec<Post>,
    }

    impl Transport for Outbox {
        fn post(
            &mut self,
            url: &str,
            headers: BTreeMap<String, String>,
            body: Vec<u8>,
            context: BTreeMap<String, String>,
        ) {
            self.posts.push(Post {
                url: url.to_string(),
                headers,
                body,
                context,
            });
        }
    }

    fn program() -> Program<Outbox> {
        let runner = CommandRunner::new(DiscoveryGateway::new(&Endpoint::default()), Outbox::default());
        Program::new(runner)
    }

    fn posts(program: &Program<Outbox>) -> &[Post] {
        &program.runner().transport().posts
    }

    fn search(program: &mut Program<Outbox>, query: &str) -> Post {
        program.dispatch(Message::SetInput(query.to_string()));
        program.dispatch(Message::Search);
        posts(program).last().cloned().expect("search should have posted")
    }

    fn body_with_title(title: &str) -> Vec<u8> {
        format!(
            r#"{{
                "normalizedQuery": {{"titleOpt": "{title}", "authorOpt": null, "keywords": [], "yearOpt": null, "ambiguity": null}},
                "candidates": [{{
                    "workTitle": "{title}",
                    "workId": "/works/OL1W",
                    "author": "Someone",
                    "authorId": "/authors/OL1A",
                    "firstPublishYear": 1937,
                    "coverUrl": null,
                    "explanation": "title match"
                }}],
                "messages": []
            }}"#
        )
        .into_bytes()
    }

    fn first_title(program: &Program<Outbox>) -> Option<&str> {
        program
            .state()
            .response
            .as_ref()
            .map(|r| r.candidates[0].work_title.as_str())
    }

    const DENIED: &str = "web access was not granted to the plugin";

    #[test]
    fn set_input_reports_change() {
        let mut program = program();
        assert!(program.dispatch(Message::SetInput("a".to_string())));
        assert!(!program.dispatch(Message::SetInput("a".to_string())));
    }

    #[test]
    fn search_posts_trimmed_query_to_discover_route() {
        let mut program = program();
        let post = search(&mut program, "  tolkien hobbit  ");

        assert_eq!(post.url, "http://localhost:5000/api/LibraryDiscovery/discover");
        assert_eq!(post.body, br#"{"query":"tolkien hobbit"}"#.to_vec());
        assert_eq!(
            post.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(post.context[TICKET_KEY], "1");
        assert_eq!(program.runner().in_flight(), 1);
        assert!(program.state().is_loading);
    }

    #[test]
    fn blank_search_posts_nothing() {
        let mut program = program();
        program.dispatch(Message::SetInput("   ".to_string()));
        program.dispatch(Message::Search);

        assert!(posts(&program).is_empty());
        assert_eq!(
            program.state().error.as_deref(),
            Some("Enter a title, author, or keywords.")
        );
    }

    #[test]
    fn successful_round_trip_shows_candidates() {
        let mut program = program();
        let post = search(&mut program, "hobbit");

        assert!(program.on_web_response(WebResponse::new(200, body_with_title("The Hobbit"), post.context)));

        let state = program.state();
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        let response = state.response.as_ref().expect("response stored");
        assert_eq!(response.normalized_query.title.as_deref(), Some("The Hobbit"));
        assert_eq!(first_title(&program), Some("The Hobbit"));
        assert_eq!(program.state().input, "hobbit");
    }

    #[test]
    fn server_error_keeps_previous_results() {
        let mut program = program();
        let first = search(&mut program, "hobbit");
        program.on_web_response(WebResponse::new(200, body_with_title("The Hobbit"), first.context));

        let second = search(&mut program, "silmarillion");
        program.on_web_response(WebResponse::new(502, b"Bad Gateway".to_vec(), second.context));

        assert_eq!(
            program.state().error.as_deref(),
            Some("discovery service returned HTTP 502: Bad Gateway")
        );
        assert!(!program.state().is_loading);
        assert_eq!(first_title(&program), Some("The Hobbit"));
    }

    #[test]
    fn malformed_body_becomes_one_failure() {
        let mut program = program();
        let post = search(&mut program, "hobbit");

        assert!(program.on_web_response(WebResponse::new(200, b"not json".to_vec(), post.context.clone())));
        assert!(program
            .state()
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("could not read discovery response")));

        // The same completion delivered twice is not reported again.
        let before = program.state().clone();
        assert!(!program.on_web_response(WebResponse::new(200, b"not json".to_vec(), post.context)));
        assert_eq!(program.state(), &before);
    }

    #[test]
    fn unknown_completion_changes_nothing() {
        let mut program = program();
        let before = program.state().clone();
        assert!(!program.on_web_response(WebResponse::new(200, Vec::new(), BTreeMap::new())));
        assert_eq!(program.state(), &before);
    }

    #[test]
    fn slower_earlier_search_wins_the_race() {
        let mut program = program();
        let first = search(&mut program, "hobbit");
        let second = search(&mut program, "dune");
        assert_eq!(program.runner().in_flight(), 2);

        // The later search answers first...
        program.on_web_response(WebResponse::new(200, body_with_title("Dune"), second.context));
        assert!(!program.state().is_loading);

        // ...and the earlier, slower one overwrites it.
        program.on_web_response(WebResponse::new(200, body_with_title("The Hobbit"), first.context));

        assert_eq!(first_title(&program), Some("The Hobbit"));
        assert_eq!(program.state().input, "dune");
        assert_eq!(program.runner().in_flight(), 0);
    }

    #[test]
    fn denied_access_fails_in_the_same_dispatch() {
        let mut program = program();
        assert!(!program.set_access(Access::Denied));
        program.dispatch(Message::SetInput("hobbit".to_string()));
        program.dispatch(Message::Search);

        assert!(!program.state().is_loading);
        assert_eq!(program.state().error.as_deref(), Some(DENIED));
        assert!(posts(&program).is_empty());
    }

    #[test]
    fn denial_after_search_fails_the_pending_call() {
        let mut program = program();
        search(&mut program, "hobbit");
        assert!(program.state().is_loading);

        assert!(program.set_access(Access::Denied));

        assert!(!program.state().is_loading);
        assert_eq!(program.state().error.as_deref(), Some(DENIED));
        assert_eq!(program.runner().in_flight(), 0);
        assert_eq!(posts(&program).len(), 1);
    }

    #[test]
    fn granted_access_after_denial_allows_searching() {
        let mut program = program();
        program.set_access(Access::Denied);
        assert!(!program.set_access(Access::Granted));

        let post = search(&mut program, "hobbit");
        assert_eq!(post.body, br#"{"query":"hobbit"}"#.to_vec());
        assert!(program.state().is_loading);
    }
}
