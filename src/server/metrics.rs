//! Prometheus metrics endpoint.
//!
//! Renders the text exposition format by hand; the two gauges below are
//! all a load-generator run needs to correlate against.

use axum::{extract::State, http::header, response::IntoResponse};
use std::sync::atomic::Ordering;

use super::handlers::AppState;

pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut output = String::new();

    let request_count = state.request_counter.load(Ordering::Relaxed);
    output.push_str("# HELP benchd_http_requests_total Total number of workload requests processed\n");
    output.push_str("# TYPE benchd_http_requests_total counter\n");
    output.push_str(&format!("benchd_http_requests_total {}\n\n", request_count));

    let uptime_secs = state.startup_time.elapsed().as_secs_f64();
    output.push_str("# HELP benchd_uptime_seconds Time since server started in seconds\n");
    output.push_str("# TYPE benchd_uptime_seconds gauge\n");
    output.push_str(&format!("benchd_uptime_seconds {:.3}\n", uptime_secs));

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        output,
    )
}
