use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::infrastructure::logging::{Timer, TraceContext};
use crate::state::{AppContext, SERVICE_NAME};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /check - liveness probe
pub async fn check(State(ctx): State<AppContext>, headers: HeaderMap) -> impl IntoResponse {
    let trace_id = TraceContext::extract_or_generate(&headers);
    let timer = Timer::start();

    ctx.logger.api_entry(&trace_id, "GET", "/check");

    let response = HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    };

    ctx.logger
        .api_exit(&trace_id, "GET", "/check", timer.elapsed_ms(), 200);

    (StatusCode::OK, Json(response))
}
