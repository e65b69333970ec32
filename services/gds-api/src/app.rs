//! Router construction.

use axum::{
    routing::{get, post},
    Extension, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the application router.
///
/// `prometheus` is `None` when no recorder is installed (tests); `/metrics`
/// then returns an empty body.
pub fn create_app(state: Arc<AppState>, prometheus: Option<PrometheusHandle>) -> Router {
    Router::new()
        // Wells
        .route(
            "/api/geologic-times",
            get(handlers::geology::geologic_times_handler),
        )
        .route("/api/wells", get(handlers::wells::wells_handler))
        .route(
            "/api/wells/:name/curve",
            get(handlers::wells::curve_handler),
        )
        .route(
            "/api/wells/:name/las",
            get(handlers::wells::well_las_handler),
        )
        // Dashboard
        .route(
            "/api/dashboard",
            post(handlers::dashboard::dashboard_handler),
        )
        // Downloads
        .route("/api/las", get(handlers::downloads::las_download_handler))
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(Extension(prometheus))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
