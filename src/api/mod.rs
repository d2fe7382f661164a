mod health;
pub mod middleware;

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::infrastructure::logging::{Timer, TraceContext};
use crate::state::AppContext;

/// Assemble the service router with middleware applied.
pub fn app_router(context: AppContext) -> Router {
    Router::new()
        .route("/check", get(health::check))
        .fallback(not_found)
        .layer(from_fn(middleware::propagate_trace_id))
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}

/// JSON body for unknown routes.
async fn not_found(
    State(ctx): State<AppContext>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let trace_id = TraceContext::extract_or_generate(&headers);
    let timer = Timer::start();
    let path = uri.path().to_string();

    ctx.logger.api_entry(&trace_id, method.as_str(), &path);
    ctx.logger
        .api_exit(&trace_id, method.as_str(), &path, timer.elapsed_ms(), 404);

    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "detail": "Not Found" })),
    )
}
