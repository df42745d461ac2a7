//! Command runner: executes reducer commands and reports their outcome.
//!
//! The runner owns the gateway client and the transport. Running a
//! [`Command::Search`] starts one call and records a ticket for it; when the
//! transport reports a completion carrying that ticket, the runner decodes it
//! into exactly one `SearchSucceeded` or `SearchFailed` message.
//!
//! Tickets only identify the runner's own calls and time them. They do not
//! decide which completion wins: if two searches overlap, both completions are
//! reported, in the order they arrive.

use super::client::DiscoveryGateway;
use super::transport::{Transport, WebResponse};
use crate::app::{Command, Message};
use crate::domain::{GatewayError, SearchRequest};
use std::collections::BTreeMap;

/// Context key under which a call's ticket travels with the request.
pub const TICKET_KEY: &str = "shelfscout_ticket";

/// Whether the host granted the plugin web access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// No answer to the permission request yet. Calls are still attempted.
    #[default]
    Pending,
    /// Web access granted.
    Granted,
    /// Web access denied. Calls fail immediately.
    Denied,
}

/// Bookkeeping for a call that has been posted but not completed.
#[derive(Debug, Clone)]
struct InFlight {
    query: String,
    issued_at_ms: i64,
}

/// Executes commands against the discovery gateway.
#[derive(Debug)]
pub struct CommandRunner<T: Transport> {
    gateway: DiscoveryGateway,
    transport: T,
    access: Access,
    next_ticket: u64,
    in_flight: BTreeMap<u64, InFlight>,
}

impl<T: Transport> CommandRunner<T> {
    /// Creates a runner that issues calls through `transport`.
    #[must_use]
    pub const fn new(gateway: DiscoveryGateway, transport: T) -> Self {
        Self {
            gateway,
            transport,
            access: Access::Pending,
            next_ticket: 1,
            in_flight: BTreeMap::new(),
        }
    }

    /// Records the outcome of the web access permission request.
    ///
    /// The host drops requests from a plugin without web access, so on
    /// `Denied` every outstanding call is abandoned and reported as one
    /// `SearchFailed` each, in the order they were issued.
    pub fn set_access(&mut self, access: Access) -> Vec<Message> {
        tracing::debug!(access = ?access, in_flight = self.in_flight.len(), "web access updated");
        self.access = access;

        if access != Access::Denied {
            return Vec::new();
        }

        std::mem::take(&mut self.in_flight)
            .into_iter()
            .map(|(ticket, call)| {
                tracing::warn!(ticket = ticket, query = %call.query, "search abandoned without web access");
                Self::failed(&GatewayError::AccessDenied)
            })
            .collect()
    }

    /// Number of calls posted and not yet completed.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Executes a command.
    ///
    /// Returns a message only when the command fails before anything is
    /// sent; that message is a `SearchFailed` and must be dispatched like any
    /// other. Otherwise the outcome arrives later through [`Self::complete`].
    pub fn run(&mut self, command: Command) -> Option<Message> {
        match command {
            Command::Search(request) => self.run_search(&request),
        }
    }

    fn run_search(&mut self, request: &SearchRequest) -> Option<Message> {
        let _span = tracing::debug_span!("run_search", query = %request.query).entered();

        if self.access == Access::Denied {
            tracing::warn!("search attempted without web access");
            return Some(Self::failed(&GatewayError::AccessDenied));
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let context = BTreeMap::from([(TICKET_KEY.to_string(), ticket.to_string())]);

        match self.gateway.search(&mut self.transport, request, context) {
            Ok(()) => {
                self.in_flight.insert(
                    ticket,
                    InFlight {
                        query: request.query.clone(),
                        issued_at_ms: chrono::Utc::now().timestamp_millis(),
                    },
                );
                tracing::debug!(ticket = ticket, in_flight = self.in_flight.len(), "search issued");
                None
            }
            Err(e) => {
                tracing::warn!(ticket = ticket, error = %e, "search could not be issued");
                Some(Self::failed(&e))
            }
        }
    }

    /// Turns a transport completion into a message.
    ///
    /// Returns `None` when the completion does not belong to one of this
    /// runner's outstanding calls.
    pub fn complete(&mut self, response: WebResponse) -> Option<Message> {
        let Some(ticket) = response
            .context
            .get(TICKET_KEY)
            .and_then(|raw| raw.parse::<u64>().ok())
        else {
            tracing::debug!(status = response.status, "ignoring web response without a ticket");
            return None;
        };

        let Some(call) = self.in_flight.remove(&ticket) else {
            tracing::debug!(ticket = ticket, "ignoring web response for unknown ticket");
            return None;
        };

        let elapsed_ms = chrono::Utc::now().timestamp_millis() - call.issued_at_ms;
        let _span = tracing::debug_span!(
            "complete_search",
            ticket = ticket,
            query = %call.query,
            status = response.status,
            elapsed_ms = elapsed_ms
        )
        .entered();

        match DiscoveryGateway::decode(response.status, &response.body) {
            Ok(search_response) => {
                tracing::debug!(
                    candidates = search_response.candidates.len(),
                    still_in_flight = self.in_flight.len(),
                    "search completed"
                );
                Some(Message::SearchSucceeded(search_response))
            }
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                Some(Self::failed(&e))
            }
        }
    }

    fn failed(error: &GatewayError) -> Message {
        Message::SearchFailed(error.to_string())
    }
}
