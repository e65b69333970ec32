//! CSV table parsing for the metadata tables and curve-data files.

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{CurvePoint, CurveSeries, GdsError, GdsResult, GeologyRow, WellRecord};

/// Column holding the well name in curve-data files.
pub const WELL_NAME_COLUMN: &str = "Well_name";

/// Column holding depth in curve-data files.
pub const DEPTH_COLUMN: &str = "DEPTH";

/// Parse the curve index (one row per well segment).
pub fn parse_curve_index(data: &[u8], source_name: &str) -> GdsResult<Vec<WellRecord>> {
    parse_rows(data, source_name)
}

/// Parse the geology table.
pub fn parse_geology_table(data: &[u8], source_name: &str) -> GdsResult<Vec<GeologyRow>> {
    parse_rows(data, source_name)
}

fn parse_rows<T: DeserializeOwned>(data: &[u8], source_name: &str) -> GdsResult<Vec<T>> {
    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(data);

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<T>().enumerate() {
        let row = result.map_err(|e| GdsError::TableParse {
            source_name: source_name.to_string(),
            message: format!("row {}: {}", idx + 1, e),
        })?;
        rows.push(row);
    }

    debug!(source = source_name, rows = rows.len(), "Parsed table");
    Ok(rows)
}

/// Extract one well's `(value, depth)` series from a curve-data file.
///
/// Values come from the named `value_column`; rows with a non-numeric
/// value or depth are skipped.
pub fn parse_curve_series(
    data: &[u8],
    source_name: &str,
    well: &str,
    curve_type: &str,
    value_column: &str,
) -> GdsResult<CurveSeries> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let well_idx = column_index(&headers, WELL_NAME_COLUMN, source_name)?;
    let depth_idx = column_index(&headers, DEPTH_COLUMN, source_name)?;
    let value_idx = column_index(&headers, value_column, source_name)?;

    let mut points = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| GdsError::TableParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

        if record.get(well_idx).map(str::trim) != Some(well) {
            continue;
        }

        match (parse_cell(&record, value_idx), parse_cell(&record, depth_idx)) {
            (Some(value), Some(depth)) => points.push(CurvePoint { value, depth }),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(source = source_name, well, skipped, "Skipped non-numeric curve rows");
    }

    Ok(CurveSeries::new(well, curve_type, value_column, points).with_source_key(source_name))
}

fn column_index(headers: &StringRecord, column: &str, source_name: &str) -> GdsResult<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| GdsError::MissingColumn {
            column: column.to_string(),
            source_name: source_name.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(","),
        })
}

fn parse_cell(record: &StringRecord, idx: usize) -> Option<f64> {
    record
        .get(idx)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVE_INDEX: &str = "\
Name,lat,lon,Age,Type,Depth_start,Depth_finish,Operator
WellA,42.1,-93.5,Triassic_Cretaceous,Gamma,100.0,200.0,Acme
WellB,43.0,-94.0,Jurassic,Resistivity,50.5,75.25,Acme
";

    const CURVE_FILE: &str = "\
Well_name,GR,DEPTH
WellA,45.2,100.0
WellB,12.0,100.0
WellA,47.9,100.5
WellA,,101.0
WellA,50.1,101.5
";

    #[test]
    fn test_parse_curve_index() {
        let rows = parse_curve_index(CURVE_INDEX.as_bytes(), "List_of_curves.csv").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "WellA");
        assert_eq!(rows[0].lat, 42.1);
        assert_eq!(rows[0].age, "Triassic_Cretaceous");
        assert_eq!(rows[1].curve_type, "Resistivity");
        assert_eq!(rows[1].depth_finish, 75.25);
    }

    #[test]
    fn test_parse_curve_index_reports_bad_row() {
        let bad = "Name,lat,lon,Age,Type,Depth_start,Depth_finish\nW,abc,1,T,G,0,1\n";
        let err = parse_curve_index(bad.as_bytes(), "List_of_curves.csv").unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_parse_geology_table() {
        let data = "Geological_Time,Era\nTriassic,Mesozoic\nJurassic,Mesozoic\n";
        let rows = parse_geology_table(data.as_bytes(), "geo").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].geological_time, "Jurassic");
    }

    #[test]
    fn test_parse_curve_series_filters_well() {
        let series =
            parse_curve_series(CURVE_FILE.as_bytes(), "csv/Gamma/a.csv", "WellA", "Gamma", "GR")
                .unwrap();
        assert_eq!(series.points.len(), 3);
        assert_eq!(series.points[0], CurvePoint { value: 45.2, depth: 100.0 });
        assert_eq!(series.points[2].depth, 101.5);
        assert_eq!(series.source_key, "csv/Gamma/a.csv");
        assert_eq!(series.value_column, "GR");
    }

    #[test]
    fn test_parse_curve_series_missing_column() {
        let err = parse_curve_series(CURVE_FILE.as_bytes(), "f", "WellA", "Gamma", "Gamma")
            .unwrap_err();
        assert!(matches!(err, GdsError::MissingColumn { ref column, .. } if column == "Gamma"));
        assert!(err.to_string().contains("(columns: Well_name,GR,DEPTH)"));

        let no_depth = "Well_name,GR\nWellA,1.0\n";
        assert!(parse_curve_series(no_depth.as_bytes(), "f", "WellA", "Gamma", "GR").is_err());
    }

    #[test]
    fn test_parse_curve_series_unknown_well_is_empty() {
        let series =
            parse_curve_series(CURVE_FILE.as_bytes(), "f", "Nope", "Gamma", "GR").unwrap();
        assert!(series.is_empty());
    }
}
