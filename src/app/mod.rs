//! Application layer: state, messages, the reducer and the program loop.
//!
//! Data flows in one direction:
//!
//! ```text
//! Key press / web response
//!         │
//!         ▼
//!     Message ──► transition(message, &state) ──► (AppState, Option<Command>)
//!         ▲                                                      │
//!         │                                                      ▼
//!         └───────────── SearchSucceeded / SearchFailed ◄── CommandRunner
//! ```
//!
//! # Modules
//!
//! - [`messages`]: the closed set of [`Message`] variants
//! - [`command`]: side effects requested by the reducer
//! - [`reducer`]: the pure [`transition`] function
//! - [`state`]: [`AppState`] and view model computation
//! - [`program`]: the serial dispatch loop
//! - [`keys`]: key press mapping

pub mod command;
pub mod keys;
pub mod messages;
pub mod program;
pub mod reducer;
pub mod state;

pub use command::Command;
pub use keys::{map_key, KeyIntent};
pub use messages::Message;
pub use program::Program;
pub use reducer::{transition, BLANK_QUERY_ERROR};
pub use state::AppState;
