//! The seam between the gateway and whatever physically sends HTTP requests.
//!
//! In the plugin the transport is Zellij's `web_request` host command, whose
//! completion arrives later as a `WebRequestResult` event. Tests plug in an
//! in-memory recorder instead.

use std::collections::BTreeMap;

/// Fire-and-forget HTTP POST.
///
/// Implementations must eventually report the outcome of every post as a
/// [`WebResponse`] carrying the same `context` map, or never report it at all
/// (a call that never resolves). They must not block.
pub trait Transport {
    /// Starts a POST to `url`.
    fn post(
        &mut self,
        url: &str,
        headers: BTreeMap<String, String>,
        body: Vec<u8>,
        context: BTreeMap<String, String>,
    );
}

/// Completion of a transport post, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
    /// The context map given to [`Transport::post`].
    pub context: BTreeMap<String, String>,
}

impl WebResponse {
    /// Bundles the parts of a `WebRequestResult` event.
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>, context: BTreeMap<String, String>) -> Self {
        Self { status, body, context }
    }
}
