use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

use crate::infrastructure::logging::{TraceContext, TRACE_ID_HEADER};

/// Attach a trace id to the request and echo it on the response.
///
/// An incoming x-trace-id header wins; otherwise a fresh id is generated.
pub async fn propagate_trace_id(mut request: Request, next: Next) -> Response {
    let trace_id = TraceContext::extract_or_generate(request.headers());

    // Expose the id to downstream handlers via request extensions
    request.extensions_mut().insert(trace_id.clone());

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_ID_HEADER, header_value);
    }

    response
}
