//! End-to-end tests of the pure well-view pipeline:
//! parse tables, filter by geologic time, dedupe for the map, select, key.

use gds_common::{
    box_select, dedup_by_location, filter_by_time, parse_curve_index, parse_geology_table,
    reconcile_selection, rows_for_wells, unique_time_labels, BoundingBox, LasKey, TimeSelection,
};

const CURVES: &str = "\
Name,lat,lon,Age,Type,Depth_start,Depth_finish
WellA,42.1,-93.5,Triassic_Cretaceous,Gamma,100.0,200.0
WellA,42.1,-93.5,Triassic_Cretaceous,Gamma,200.0,350.5
WellB,43.0,-94.0,Jurassic,Resistivity,50.0,75.0
WellC,30.5,-100.25,Permian,Gamma,10.0,20.0
";

const GEOLOGY: &str = "\
Geological_Time
Triassic
Jurassic
Triassic
";

fn names(rows: &[gds_common::WellRecord]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_default_selection_is_all_labels() {
    let geology = parse_geology_table(GEOLOGY.as_bytes(), "geology").unwrap();
    let labels = unique_time_labels(&geology);
    assert_eq!(labels, vec!["Triassic", "Jurassic"]);

    let curves = parse_curve_index(CURVES.as_bytes(), "curves").unwrap();
    let map = filter_by_time(&dedup_by_location(&curves), &TimeSelection::new(labels));

    // WellC is Permian, outside the vocabulary default
    assert_eq!(names(&map), vec!["WellA", "WellB"]);
}

#[test]
fn test_map_size_equals_distinct_locations() {
    let curves = parse_curve_index(CURVES.as_bytes(), "curves").unwrap();
    let wells = dedup_by_location(&curves);
    assert_eq!(wells.len(), 3);
    assert_eq!(dedup_by_location(&wells).len(), 3);
}

#[test]
fn test_box_selection_then_picker_edit() {
    let curves = parse_curve_index(CURVES.as_bytes(), "curves").unwrap();
    let map = filter_by_time(
        &dedup_by_location(&curves),
        &TimeSelection::new(["Triassic", "Jurassic"]),
    );

    let boxed = box_select(&map, &BoundingBox::new(-95.0, 41.0, -92.0, 44.0));
    assert_eq!(boxed, vec!["WellA", "WellB"]);

    let seeded = reconcile_selection(&boxed, None, Some(map.as_slice()));
    assert_eq!(seeded, boxed);

    let edited = vec!["WellB".to_string()];
    let selected = reconcile_selection(&boxed, Some(edited.as_slice()), Some(map.as_slice()));
    assert_eq!(selected, vec!["WellB"]);
}

#[test]
fn test_table_rows_and_las_keys_per_segment() {
    let curves = parse_curve_index(CURVES.as_bytes(), "curves").unwrap();
    let rows = rows_for_wells(&curves, &["WellA".to_string()]);
    let keys: Vec<String> = rows.iter().map(|r| LasKey::for_record(r).to_string()).collect();
    assert_eq!(
        keys,
        vec![
            "42.1_-93.5_100.0_200.0_WellA",
            "42.1_-93.5_200.0_350.5_WellA",
        ]
    );
}

#[test]
fn test_no_selection_is_idle() {
    let curves = parse_curve_index(CURVES.as_bytes(), "curves").unwrap();
    let selected = reconcile_selection(&[], None, None);
    assert!(selected.is_empty());
    assert!(rows_for_wells(&curves, &selected).is_empty());
}
