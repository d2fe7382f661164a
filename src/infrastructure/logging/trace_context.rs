use axum::http::HeaderMap;

/// Header carrying the trace id across service boundaries.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Trace id creation and propagation.
pub struct TraceContext;

impl TraceContext {
    /// Generate a fresh trace id (UUID v4).
    pub fn new_trace_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Pull the trace id from request headers, generating one if absent.
    pub fn extract_or_generate(headers: &HeaderMap) -> String {
        headers
            .get(TRACE_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(Self::new_trace_id)
    }
}
