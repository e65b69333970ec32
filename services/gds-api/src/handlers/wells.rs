//! Map and per-well handlers.

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use gds_common::{BoundingBox, GdsError, TimeSelection};

use super::ApiError;
use crate::catalog::WellSelection;
use crate::curves::CurveOutcome;
use crate::dashboard::{map_view, MapView};
use crate::las::LasOutcome;
use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WellsQuery {
    /// Comma-separated labels. Absent means every label; empty means none.
    pub times: Option<String>,
    /// `min_lon,min_lat,max_lon,max_lat`
    pub bbox: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WellsResponse {
    pub selected_times: Vec<String>,
    pub map: MapView,
    pub selection: WellSelection,
}

/// GET /api/wells
pub async fn wells_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<WellsQuery>,
) -> Result<Json<WellsResponse>, ApiError> {
    metrics::record_request("wells");

    let bbox = params
        .bbox
        .as_deref()
        .map(BoundingBox::from_query_string)
        .transpose()
        .map_err(GdsError::from)?;

    let times = match params.times.as_deref() {
        Some(raw) => TimeSelection::from_query_string(raw),
        None => state.catalog.default_selection(),
    };

    let selection = state.catalog.select(&times, bbox.as_ref(), None);

    Ok(Json(WellsResponse {
        selected_times: times.sorted_labels(),
        map: map_view(&state, &times),
        selection,
    }))
}

/// GET /api/wells/:name/curve
pub async fn curve_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<CurveOutcome>, ApiError> {
    metrics::record_request("curve");

    let curve_type = state
        .catalog
        .curve_type(&name)
        .ok_or_else(|| GdsError::WellNotFound(name.clone()))?;

    match state.curves.resolve(&name, curve_type).await? {
        CurveOutcome::NotFound { well, curve_type } => {
            Err(GdsError::CurveNotFound { well, curve_type }.into())
        }
        outcome => Ok(Json(outcome)),
    }
}

#[derive(Debug, Serialize)]
pub struct WellLasResponse {
    pub well: String,
    pub downloads: Vec<LasOutcome>,
}

/// GET /api/wells/:name/las
pub async fn well_las_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<WellLasResponse>, ApiError> {
    metrics::record_request("well_las");

    if !state.catalog.contains_well(&name) {
        return Err(GdsError::WellNotFound(name).into());
    }

    let rows = state.catalog.rows_for(std::slice::from_ref(&name));
    let downloads = state.las.resolve(&rows).await?;

    Ok(Json(WellLasResponse {
        well: name,
        downloads,
    }))
}
