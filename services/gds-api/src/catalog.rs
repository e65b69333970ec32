//! Well metadata: loading the reference tables and the views built on them.

use serde::Serialize;
use tracing::{info, instrument};

use gds_common::{
    box_select, curve_type_for, dedup_by_location, filter_by_time, parse_curve_index,
    parse_geology_table, reconcile_selection, rows_for_wells, unique_time_labels, BoundingBox,
    GdsResult, GeologyRow, TimeSelection, WellRecord,
};
use storage::{ObjectCache, ObjectStorage};

use crate::config::MetadataFilesConfig;

/// Loads the curve index and geology table from the metadata bucket.
pub struct MetadataLoader;

impl MetadataLoader {
    #[instrument(skip_all, fields(bucket = %storage.bucket()))]
    pub async fn load(
        storage: &ObjectStorage,
        cache: &ObjectCache,
        files: &MetadataFilesConfig,
    ) -> GdsResult<WellCatalog> {
        let curve_bytes = cache.get_or_fetch(storage, &files.curve_index).await?;
        let curve_index = parse_curve_index(&curve_bytes, &files.curve_index)?;

        let geology_bytes = cache.get_or_fetch(storage, &files.geology).await?;
        let geology = parse_geology_table(&geology_bytes, &files.geology)?;

        let catalog = WellCatalog::new(curve_index, geology);
        info!(
            rows = catalog.curve_index.len(),
            wells = catalog.map_wells.len(),
            time_labels = catalog.time_labels.len(),
            "Loaded well metadata"
        );
        Ok(catalog)
    }
}

/// In-memory view of the metadata tables. Read-only after load.
#[derive(Debug, Clone)]
pub struct WellCatalog {
    curve_index: Vec<WellRecord>,
    time_labels: Vec<String>,
    /// Curve index deduplicated by location.
    map_wells: Vec<WellRecord>,
}

/// A well as shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub age: String,
}

impl From<&WellRecord> for MapPoint {
    fn from(r: &WellRecord) -> Self {
        Self {
            name: r.name.clone(),
            lat: r.lat,
            lon: r.lon,
            age: r.age.clone(),
        }
    }
}

/// Reconciled well selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WellSelection {
    /// Wells enclosed by the box-selection, if one was drawn.
    pub box_selected: Vec<String>,
    /// Wells to visualize.
    pub wells: Vec<String>,
}

impl WellCatalog {
    pub fn new(curve_index: Vec<WellRecord>, geology: Vec<GeologyRow>) -> Self {
        let time_labels = unique_time_labels(&geology);
        let map_wells = dedup_by_location(&curve_index);
        Self {
            curve_index,
            time_labels,
            map_wells,
        }
    }

    /// Geologic-time vocabulary, in table order.
    pub fn time_labels(&self) -> &[String] {
        &self.time_labels
    }

    /// All known labels; the initial filter value.
    pub fn default_selection(&self) -> TimeSelection {
        TimeSelection::new(self.time_labels.iter().cloned())
    }

    /// Selection from an optional list of labels; `None` means the default.
    pub fn selection_from(&self, labels: Option<&[String]>) -> TimeSelection {
        match labels {
            Some(labels) => TimeSelection::new(labels.iter().cloned()),
            None => self.default_selection(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.curve_index.len()
    }

    /// Map wells whose ages intersect `selection`.
    pub fn map_wells(&self, selection: &TimeSelection) -> Vec<WellRecord> {
        filter_by_time(&self.map_wells, selection)
    }

    /// Reconcile box-selection and explicit picks over the filtered wells.
    pub fn select(
        &self,
        selection: &TimeSelection,
        bbox: Option<&BoundingBox>,
        explicit: Option<&[String]>,
    ) -> WellSelection {
        let filtered = self.map_wells(selection);
        let box_selected = bbox
            .map(|b| box_select(&filtered, b))
            .unwrap_or_default();
        let wells = reconcile_selection(&box_selected, explicit, Some(filtered.as_slice()));
        WellSelection {
            box_selected,
            wells,
        }
    }

    /// Curve-index rows of the selected wells (table view).
    pub fn rows_for(&self, wells: &[String]) -> Vec<WellRecord> {
        rows_for_wells(&self.curve_index, wells)
    }

    /// Curve type of a well (its first index row).
    pub fn curve_type(&self, well: &str) -> Option<&str> {
        curve_type_for(&self.curve_index, well)
    }

    pub fn contains_well(&self, well: &str) -> bool {
        self.curve_index.iter().any(|r| r.name == well)
    }
}
