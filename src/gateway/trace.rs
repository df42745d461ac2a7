//! Trace context propagation for outgoing discovery calls.
//!
//! When the current `tracing` span is backed by a valid OpenTelemetry span,
//! its ids are sent to the service as a W3C `traceparent` header so the
//! server side can join the same trace.

/// Header name defined by the W3C Trace Context recommendation.
pub const TRACEPARENT_HEADER: &str = "traceparent";

/// Trace and span ids of the span that issued a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as 32 hex characters.
    pub trace_id: String,

    /// Span ID of the issuing span as 16 hex characters.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the ids of the current span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span
    /// context is invalid.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Formats the context as a sampled `traceparent` header value.
    #[must_use]
    pub fn to_traceparent(&self) -> String {
        format!("00-{}-{}-01", self.trace_id, self.parent_span_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traceparent_uses_version_zero_and_sampled_flag() {
        let context = TraceContext {
            trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".to_string(),
            parent_span_id: "00f067aa0ba902b7".to_string(),
        };
        assert_eq!(
            context.to_traceparent(),
            "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"
        );
    }

    #[test]
    fn no_context_without_a_subscriber() {
        assert!(TraceContext::from_current().is_none());
    }
}
