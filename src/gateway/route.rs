//! Route building for the discovery service.
//!
//! The service exposes each method at `/api/<ServiceName>/<MethodName>`
//! relative to its base URL.

use crate::domain::{Result, ShelfscoutError};

/// Base URL used when the plugin configuration does not name one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Service name of the library discovery API.
pub const DEFAULT_SERVICE: &str = "LibraryDiscovery";

/// Method called for a search.
pub const DEFAULT_METHOD: &str = "discover";

/// Builds the path of a service method.
///
/// ```rust
/// use shelfscout::gateway::build_route;
///
/// assert_eq!(build_route("LibraryDiscovery", "discover"), "/api/LibraryDiscovery/discover");
/// ```
#[must_use]
pub fn build_route(service: &str, method: &str) -> String {
    format!("/api/{service}/{method}")
}

/// A validated discovery endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    service: String,
    method: String,
}

impl Endpoint {
    /// Validates and builds an endpoint.
    ///
    /// Trailing slashes on `base_url` are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfscoutError::Config`] when `base_url` is not an `http://`
    /// or `https://` URL with a host, or when `service` or `method` is empty
    /// or contains a `/`.
    pub fn parse(base_url: &str, service: &str, method: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');

        let host = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"))
            .ok_or_else(|| {
                ShelfscoutError::Config(format!(
                    "endpoint must start with http:// or https://, got '{base_url}'"
                ))
            })?;

        if host.is_empty() {
            return Err(ShelfscoutError::Config(format!(
                "endpoint '{base_url}' has no host"
            )));
        }

        for (name, segment) in [("service", service), ("method", method)] {
            if segment.is_empty() || segment.contains('/') {
                return Err(ShelfscoutError::Config(format!(
                    "{name} must be a single non-empty path segment, got '{segment}'"
                )));
            }
        }

        Ok(Self {
            base_url: base_url.to_string(),
            service: service.to_string(),
            method: method.to_string(),
        })
    }

    /// Full URL of the configured method.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, build_route(&self.service, &self.method))
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            method: DEFAULT_METHOD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_points_at_discover() {
        assert_eq!(
            Endpoint::default().url(),
            "http://localhost:5000/api/LibraryDiscovery/discover"
        );
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        let endpoint = Endpoint::parse("https://books.example.com/", "LibraryDiscovery", "discover").unwrap();
        assert_eq!(
            endpoint.url(),
            "https://books.example.com/api/LibraryDiscovery/discover"
        );
    }

    #[test]
    fn non_http_urls_are_rejected() {
        let err = Endpoint::parse("ftp://books", DEFAULT_SERVICE, DEFAULT_METHOD).unwrap_err();
        assert!(matches!(err, ShelfscoutError::Config(_)));
    }

    #[test]
    fn missing_host_is_rejected() {
        assert!(Endpoint::parse("http://", DEFAULT_SERVICE, DEFAULT_METHOD).is_err());
    }

    #[test]
    fn nested_method_is_rejected() {
        assert!(Endpoint::parse(DEFAULT_BASE_URL, DEFAULT_SERVICE, "a/b").is_err());
        assert!(Endpoint::parse(DEFAULT_BASE_URL, "", DEFAULT_METHOD).is_err());
    }
}
