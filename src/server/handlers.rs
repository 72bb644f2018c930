use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::error::ApiError;
use crate::periodic::{DataSourceClient, ElectronShells, ElementSummary};
use crate::pi;

#[derive(Clone)]
pub struct AppState {
    pub data_source: DataSourceClient,
    pub startup_time: Instant,
    pub request_counter: Arc<AtomicU64>,
}

// ==================== Request Types ====================

#[derive(Debug, Deserialize)]
pub struct PiQuery {
    pub iterations: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
}

// ==================== Pi Workload ====================

/// GET /?iterations=N
///
/// Missing or empty `iterations` runs zero iterations; a value that is not
/// an integer is a client error; negative values clamp to zero. The loop
/// runs synchronously on the worker, which is the point of the workload.
pub async fn compute_pi(
    State(state): State<AppState>,
    Query(params): Query<PiQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state.request_counter.fetch_add(1, Ordering::Relaxed);

    let iterations = match params.iterations.as_deref() {
        None | Some("") => 0,
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ApiError::InvalidIterations(raw.to_string()))?
            .max(0) as u64,
    };

    let series = pi::compute(iterations);
    Ok(series.encode())
}

// ==================== Periodic-Table Projector ====================

fn require_symbol(params: SymbolQuery) -> Result<String, ApiError> {
    match params.symbol {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ApiError::MissingParameter("symbol".to_string())),
    }
}

/// GET /api/v1/periodic-table/element?symbol=S
pub async fn get_element(
    State(state): State<AppState>,
    Query(params): Query<SymbolQuery>,
) -> Result<Json<ElementSummary>, ApiError> {
    state.request_counter.fetch_add(1, Ordering::Relaxed);

    let symbol = require_symbol(params)?;
    let element = state.data_source.element(&symbol).await?;
    Ok(Json(element.into()))
}

/// GET /api/v1/periodic-table/shells?symbol=S
pub async fn get_shells(
    State(state): State<AppState>,
    Query(params): Query<SymbolQuery>,
) -> Result<Json<ElectronShells>, ApiError> {
    state.request_counter.fetch_add(1, Ordering::Relaxed);

    let symbol = require_symbol(params)?;
    let element = state.data_source.element(&symbol).await?;
    Ok(Json(element.into()))
}

// ==================== Health Check ====================

/// Simple liveness endpoint for load-generator warmup checks.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_secs": state.startup_time.elapsed().as_secs(),
    }))
}
