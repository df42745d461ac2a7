//! Discovery service client: request encoding and response decoding.
//!
//! The client knows the wire format and the route, but not how bytes travel.
//! [`DiscoveryGateway::search`] hands an encoded request to a [`Transport`];
//! [`DiscoveryGateway::decode`] interprets whatever the transport reports back.

use super::route::Endpoint;
use super::trace::{TraceContext, TRACEPARENT_HEADER};
use super::transport::Transport;
use crate::domain::{GatewayError, SearchRequest, SearchResponse};
use std::collections::BTreeMap;

/// Client for the library discovery service.
#[derive(Debug, Clone)]
pub struct DiscoveryGateway {
    url: String,
}

impl DiscoveryGateway {
    /// Creates a client for the given endpoint.
    #[must_use]
    pub fn new(endpoint: &Endpoint) -> Self {
        Self { url: endpoint.url() }
    }

    /// Full URL that searches are posted to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Encodes `request` and starts the call on `transport`.
    ///
    /// `context` is passed through untouched and comes back with the
    /// completion, so the caller can recognise it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Encode`] if the request cannot be serialized.
    /// Nothing is posted in that case.
    pub fn search<T: Transport>(
        &self,
        transport: &mut T,
        request: &SearchRequest,
        context: BTreeMap<String, String>,
    ) -> Result<(), GatewayError> {
        let body = serde_json::to_vec(request).map_err(GatewayError::Encode)?;

        tracing::debug!(url = %self.url, body_len = body.len(), "posting search request");
        transport.post(&self.url, Self::headers(), body, context);

        Ok(())
    }

    /// Interprets a completed call.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::Status`] for any status outside `200..300`
    /// - [`GatewayError::Decode`] if a successful body is not a valid response
    pub fn decode(status: u16, body: &[u8]) -> Result<SearchResponse, GatewayError> {
        if !(200..300).contains(&status) {
            return Err(GatewayError::status(status, body));
        }

        serde_json::from_slice(body).map_err(GatewayError::Decode)
    }

    fn headers() -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(trace_context) = TraceContext::from_current() {
            headers.insert(TRACEPARENT_HEADER.to_string(), trace_context.to_traceparent());
        }

        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        posts: Vec<(String, BTreeMap<String, String>, Vec<u8>, BTreeMap<String, String>)>,
    }

    impl Transport for Recorder {
        fn post(
            &mut self,
            url: &str,
            headers: BTreeMap<String, String>,
            body: Vec<u8>,
            context: BTreeMap<String, String>,
        ) {
            self.posts.push((url.to_string(), headers, body, context));
        }
    }

    #[test]
    fn search_posts_json_body_to_route() {
        let gateway = DiscoveryGateway::new(&Endpoint::default());
        let mut recorder = Recorder::default();
        let context = BTreeMap::from([("ticket".to_string(), "7".to_string())]);

        gateway
            .search(&mut recorder, &SearchRequest::new("tolkien hobbit"), context.clone())
            .unwrap();

        assert_eq!(recorder.posts.len(), 1);
        let (url, headers, body, sent_context) = &recorder.posts[0];
        assert_eq!(url, "http://localhost:5000/api/LibraryDiscovery/discover");
        assert_eq!(headers.get("Content-Type").map(String::as_str), Some("application/json"));
        assert_eq!(body.as_slice(), br#"{"query":"tolkien hobbit"}"#);
        assert_eq!(sent_context, &context);
    }

    #[test]
    fn decode_accepts_success_body() {
        let response = DiscoveryGateway::decode(
            200,
            br#"{"normalizedQuery":{"keywords":[]},"candidates":[],"messages":["ok"]}"#,
        )
        .unwrap();
        assert_eq!(response.messages, vec!["ok"]);
    }

    #[test]
    fn decode_rejects_error_status() {
        let err = DiscoveryGateway::decode(503, b"Service Unavailable").unwrap_err();
        assert_eq!(
            err.to_string(),
            "discovery service returned HTTP 503: Service Unavailable"
        );
    }

    #[test]
    fn decode_rejects_malformed_body() {
        let err = DiscoveryGateway::decode(200, b"<html>").unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
        assert!(err.to_string().starts_with("could not read discovery response"));
    }
}
