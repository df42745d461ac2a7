//! Domain layer for the Shelfscout plugin.
//!
//! Holds the discovery service's data shapes and the error types, independent
//! of Zellij APIs and of the UI.
//!
//! # Organization
//!
//! - [`discovery`]: request and response shapes of the discovery service
//! - [`error`]: error types and result aliases

pub mod discovery;
pub mod error;

pub use discovery::{Candidate, ExtractedQueryDetail, SearchRequest, SearchResponse};
pub use error::{GatewayError, Result, ShelfscoutError};
