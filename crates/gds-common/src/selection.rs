//! Well selection from the picklist and from map box-selection.

use std::collections::HashSet;

use crate::{BoundingBox, WellRecord};

/// Names of wells whose location lies inside `bbox`, in input order.
pub fn box_select(records: &[WellRecord], bbox: &BoundingBox) -> Vec<String> {
    dedup_names(
        records
            .iter()
            .filter(|r| bbox.contains_point(r.lon, r.lat))
            .map(|r| r.name.clone()),
    )
}

/// Reconcile the box selection with the explicit picklist.
///
/// The box selection only seeds the picker; once the picker has a value
/// it is authoritative, so wells can be added or removed after a
/// box-select. When `available` is given, names outside it are dropped.
pub fn reconcile_selection(
    box_selected: &[String],
    explicit: Option<&[String]>,
    available: Option<&[WellRecord]>,
) -> Vec<String> {
    let source = explicit.unwrap_or(box_selected);
    let known: Option<HashSet<&str>> =
        available.map(|rows| rows.iter().map(|r| r.name.as_str()).collect());

    dedup_names(
        source
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .filter(|n| known.as_ref().map_or(true, |k| k.contains(n)))
            .map(str::to_string),
    )
}

fn dedup_names(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names.filter(|n| seen.insert(n.clone())).collect()
}
