//! Dashboard view-model assembly.
//!
//! One request carries the whole UI state (time filter, box-selection,
//! picked wells); the response is everything the client renders. Steps
//! run in order: filter, select, curves, downloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use gds_common::{BoundingBox, TimeSelection, WellRecord};

use crate::catalog::{MapPoint, WellSelection};
use crate::curves::CurveOutcome;
use crate::las::LasOutcome;
use crate::state::AppState;

/// UI state sent by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardRequest {
    /// Selected geologic-time labels; absent means all known labels.
    #[serde(default)]
    pub times: Option<Vec<String>>,

    /// Map box-selection, if one was drawn.
    #[serde(default)]
    pub bbox: Option<BoundingBox>,

    /// Current value of the well picker; authoritative when present.
    #[serde(default)]
    pub wells: Option<Vec<String>>,
}

/// Map layer: filtered wells and display settings.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub style: String,
    pub zoom: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub wells: Vec<MapPoint>,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub generated_at: DateTime<Utc>,
    pub time_options: Vec<String>,
    pub selected_times: Vec<String>,
    pub map: MapView,
    pub selection: WellSelection,
    /// No wells selected: nothing below the map is shown.
    pub idle: bool,
    /// Curve-index rows of the selected wells.
    pub table: Vec<WellRecord>,
    /// One entry per selected well.
    pub curves: Vec<CurveOutcome>,
    /// One entry per table row.
    pub downloads: Vec<LasOutcome>,
}

/// Build the map layer for a time selection.
pub fn map_view(state: &AppState, selection: &TimeSelection) -> MapView {
    let wells = state
        .catalog
        .map_wells(selection)
        .iter()
        .map(MapPoint::from)
        .collect();

    let map = &state.config.map;
    MapView {
        style: map.style.clone(),
        zoom: map.zoom,
        access_token: map.access_token.clone(),
        wells,
    }
}

/// Run the full pipeline for one request.
#[instrument(skip_all)]
pub async fn build_dashboard(state: &AppState, request: &DashboardRequest) -> DashboardView {
    let catalog = &state.catalog;
    let times = catalog.selection_from(request.times.as_deref());
    let map = map_view(state, &times);

    let selection = catalog.select(&times, request.bbox.as_ref(), request.wells.as_deref());
    debug!(
        map_wells = map.wells.len(),
        selected = selection.wells.len(),
        "Resolved selection"
    );

    let table = catalog.rows_for(&selection.wells);

    let mut curves = Vec::with_capacity(selection.wells.len());
    for well in &selection.wells {
        if let Some(curve_type) = catalog.curve_type(well) {
            curves.push(state.curves.resolve_or_report(well, curve_type).await);
        }
    }

    let downloads = state.las.resolve_or_report(&table).await;

    DashboardView {
        generated_at: Utc::now(),
        time_options: catalog.time_labels().to_vec(),
        selected_times: times.sorted_labels(),
        map,
        idle: selection.wells.is_empty(),
        selection,
        table,
        curves,
        downloads,
    }
}
