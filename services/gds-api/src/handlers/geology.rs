//! Geologic-time vocabulary handler.

use axum::{extract::Extension, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GeologicTimesResponse {
    /// Controlled vocabulary from the geology table.
    pub labels: Vec<String>,
    /// Initial filter value (every label).
    pub default: Vec<String>,
}

/// GET /api/geologic-times
pub async fn geologic_times_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<GeologicTimesResponse> {
    metrics::record_request("geologic_times");

    let labels = state.catalog.time_labels().to_vec();
    Json(GeologicTimesResponse {
        default: labels.clone(),
        labels,
    })
}
