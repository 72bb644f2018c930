use axum::http::Method;
use axum::{routing::get, Router};
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::*;
use super::metrics::metrics_handler;
use crate::periodic::DataSourceClient;

pub fn create_router(data_source: DataSourceClient) -> Router {
    let state = AppState {
        data_source,
        startup_time: Instant::now(),
        request_counter: Arc::new(AtomicU64::new(0)),
    };

    Router::new()
        // Pi workload
        .route("/", get(compute_pi))
        // Periodic-table projector
        .route("/api/v1/periodic-table/element", get(get_element))
        .route("/api/v1/periodic-table/shells", get(get_shells))
        // Operational endpoints
        .route("/_health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
}
