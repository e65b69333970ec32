//! Dashboard handler.

use axum::{extract::Extension, Json};
use std::sync::Arc;

use crate::dashboard::{build_dashboard, DashboardRequest, DashboardView};
use crate::metrics;
use crate::state::AppState;

/// POST /api/dashboard
///
/// Per-well failures are reported inside the view, so this never errors.
pub async fn dashboard_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<DashboardRequest>,
) -> Json<DashboardView> {
    metrics::record_request("dashboard");
    Json(build_dashboard(&state, &request).await)
}
