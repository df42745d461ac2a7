//! Error types for the Shelfscout plugin.
//!
//! Two layers of errors live here. [`GatewayError`] describes everything that
//! can go wrong with a single discovery call; its `Display` text is exactly what
//! the user sees in the error banner. [`ShelfscoutError`] is the crate-level
//! error for configuration, theme and I/O problems, with a [`Result`] alias.

use thiserror::Error;

/// Longest body excerpt carried in a [`GatewayError::Status`] message.
const MAX_DETAIL_CHARS: usize = 200;

/// Failure of one discovery call.
///
/// Every variant is recovered into a `SearchFailed` message by the command
/// runner; none of them abort the event loop.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The search request could not be serialized.
    #[error("could not encode search request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The discovery service answered with a non-success HTTP status.
    ///
    /// `detail` is a trimmed, bounded excerpt of the response body.
    #[error("discovery service returned HTTP {status}: {detail}")]
    Status {
        /// HTTP status code reported by the host.
        status: u16,
        /// Human-readable excerpt of the response body.
        detail: String,
    },

    /// The service answered successfully but the body was not a valid response.
    #[error("could not read discovery response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The user did not grant the plugin web access.
    #[error("web access was not granted to the plugin")]
    AccessDenied,
}

impl GatewayError {
    /// Builds a [`GatewayError::Status`] from a raw response body.
    ///
    /// Invalid UTF-8 is replaced, whitespace runs are collapsed and the excerpt
    /// is cut at [`MAX_DETAIL_CHARS`] characters. An empty body becomes
    /// `"no response body"`.
    #[must_use]
    pub fn status(status: u16, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

        let detail = if collapsed.is_empty() {
            "no response body".to_string()
        } else if collapsed.chars().count() > MAX_DETAIL_CHARS {
            let cut: String = collapsed.chars().take(MAX_DETAIL_CHARS).collect();
            format!("{cut}...")
        } else {
            collapsed
        };

        Self::Status { status, detail }
    }
}

/// The crate-level error type.
#[derive(Debug, Error)]
pub enum ShelfscoutError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Shelfscout operations.
pub type Result<T> = std::result::Result<T, ShelfscoutError>;
