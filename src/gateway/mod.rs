//! Search gateway: the only part of the crate that talks to the network.
//!
//! - [`route`]: endpoint validation and route building
//! - [`client`]: request encoding and response decoding
//! - [`transport`]: the seam over the host's HTTP facility
//! - [`runner`]: executes reducer commands and turns completions into messages
//! - [`trace`]: `traceparent` propagation

pub mod client;
pub mod route;
pub mod runner;
pub mod trace;
pub mod transport;

pub use client::DiscoveryGateway;
pub use route::{build_route, Endpoint, DEFAULT_BASE_URL, DEFAULT_METHOD, DEFAULT_SERVICE};
pub use runner::{Access, CommandRunner, TICKET_KEY};
pub use trace::{TraceContext, TRACEPARENT_HEADER};
pub use transport::{Transport, WebResponse};
