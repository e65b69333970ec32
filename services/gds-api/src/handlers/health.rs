//! Health and metrics handlers.

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub metadata_rows: usize,
    pub time_labels: usize,
    pub cached_objects: usize,
    pub cache_capacity: usize,
    /// Percentage of object reads served from the cache.
    pub cache_hit_rate: f64,
}

/// GET /health - Basic health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready - Readiness check (metadata tables loaded and non-empty)
pub async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let cache = state.cache.stats().await;
    let response = ReadyResponse {
        ready: state.catalog.row_count() > 0,
        metadata_rows: state.catalog.row_count(),
        time_labels: state.catalog.time_labels().len(),
        cached_objects: cache.entries,
        cache_capacity: state.cache.capacity(),
        cache_hit_rate: cache.hit_rate(),
    };

    let status = if response.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response)).into_response()
}

/// GET /metrics - Prometheus metrics
pub async fn metrics_handler(
    Extension(handle): Extension<Option<PrometheusHandle>>,
) -> Response {
    let body = handle.map(|h| h.render()).unwrap_or_default();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn test_metrics_without_recorder_is_empty() {
        let response = metrics_handler(Extension(None)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
