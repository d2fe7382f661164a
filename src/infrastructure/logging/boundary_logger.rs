use std::time::Instant;

use tracing::info;

/// Structured logging at the HTTP boundary.
///
/// Every record carries the trace id, method and path; exit records add the
/// elapsed time and response status.
#[derive(Clone)]
pub struct BoundaryLogger;

impl BoundaryLogger {
    pub fn new() -> Self {
        Self
    }

    /// Request reached a handler.
    pub fn api_entry(&self, trace_id: &str, method: &str, path: &str) {
        info!(
            trace_id = %trace_id,
            method = %method,
            path = %path,
            stage = "ENTRY",
            "[{}] {} {} [ENTRY]",
            trace_id, method, path
        );
    }

    /// Handler produced a response.
    pub fn api_exit(&self, trace_id: &str, method: &str, path: &str, duration_ms: f64, status: u16) {
        info!(
            trace_id = %trace_id,
            method = %method,
            path = %path,
            stage = "DONE",
            duration_ms = %duration_ms,
            status = %status,
            "[{}] {} {} [DONE] {:.2}ms status={}",
            trace_id, method, path, duration_ms, status
        );
    }
}

impl Default for BoundaryLogger {
    fn default() -> Self {
        Self::new()
    }
}

/// Elapsed-time helper for exit records.
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}
