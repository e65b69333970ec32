//! Well metadata rows and the projections built from them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{GdsError, GdsResult};

/// One row of the curve index (`List_of_curves.csv`).
///
/// A well may span several rows, one per logged segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellRecord {
    #[serde(rename = "Name")]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Underscore-delimited geologic-time labels, e.g. "Triassic_Jurassic".
    #[serde(rename = "Age", default)]
    pub age: String,
    /// Curve category used to locate the curve-data file.
    #[serde(rename = "Type")]
    pub curve_type: String,
    #[serde(rename = "Depth_start")]
    pub depth_start: f64,
    #[serde(rename = "Depth_finish")]
    pub depth_finish: f64,
}

impl WellRecord {
    /// Split `Age` into its geologic-time labels.
    ///
    /// Tokens are kept verbatim: `"Triassic _Jurassic"` yields `"Triassic "`,
    /// which does not match the label `Triassic`. A blank `Age` is an error
    /// rather than an empty set so that a broken row never looks like a
    /// well with no ages.
    pub fn age_tokens(&self) -> GdsResult<HashSet<&str>> {
        let tokens: HashSet<&str> = self
            .age
            .split('_')
            .filter(|t| !t.trim().is_empty())
            .collect();

        if tokens.is_empty() {
            return Err(GdsError::MalformedAge {
                well: self.name.clone(),
                value: self.age.clone(),
            });
        }
        Ok(tokens)
    }
}

/// One row of the geology table (`List_of_data-new.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeologyRow {
    #[serde(rename = "Geological_Time")]
    pub geological_time: String,
}

/// Keep the first record for every distinct `(lat, lon)` pair.
pub fn dedup_by_location(records: &[WellRecord]) -> Vec<WellRecord> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert((r.lat.to_bits(), r.lon.to_bits())))
        .cloned()
        .collect()
}

/// All index rows belonging to the named wells, in index order.
pub fn rows_for_wells(records: &[WellRecord], names: &[String]) -> Vec<WellRecord> {
    let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
    records
        .iter()
        .filter(|r| wanted.contains(r.name.as_str()))
        .cloned()
        .collect()
}

/// Curve type of a well, taken from its first index row.
pub fn curve_type_for<'a>(records: &'a [WellRecord], name: &str) -> Option<&'a str> {
    records
        .iter()
        .find(|r| r.name == name)
        .map(|r| r.curve_type.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, lat: f64, lon: f64, curve_type: &str) -> WellRecord {
        WellRecord {
            name: name.to_string(),
            lat,
            lon,
            age: "Triassic".to_string(),
            curve_type: curve_type.to_string(),
            depth_start: 0.0,
            depth_finish: 100.0,
        }
    }

    #[test]
    fn test_age_tokens() {
        let mut r = record("W1", 0.0, 0.0, "Gamma");
        r.age = "Triassic_Cretaceous".to_string();
        let tokens = r.age_tokens().unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("Triassic"));
        assert!(tokens.contains("Cretaceous"));
    }

    #[test]
    fn test_age_tokens_drops_empty_segments() {
        let mut r = record("W1", 0.0, 0.0, "Gamma");
        r.age = "Triassic__Jurassic_".to_string();
        assert_eq!(r.age_tokens().unwrap().len(), 2);
    }

    #[test]
    fn test_age_tokens_are_not_trimmed() {
        let mut r = record("W1", 0.0, 0.0, "Gamma");
        r.age = "Triassic _Jurassic".to_string();
        let tokens = r.age_tokens().unwrap();
        assert!(tokens.contains("Triassic "));
        assert!(!tokens.contains("Triassic"));
        assert!(tokens.contains("Jurassic"));
    }

    #[test]
    fn test_blank_age_is_malformed() {
        let mut r = record("W1", 0.0, 0.0, "Gamma");
        r.age = "  ".to_string();
        assert!(matches!(r.age_tokens(), Err(GdsError::MalformedAge { .. })));
        r.age = "_".to_string();
        assert!(r.age_tokens().is_err());
    }

    #[test]
    fn test_dedup_by_location() {
        let records = vec![
            record("A", 1.0, 2.0, "Gamma"),
            record("A", 1.0, 2.0, "Resistivity"),
            record("B", 3.0, 4.0, "Gamma"),
            record("C", 1.0, 2.0, "Gamma"),
        ];
        let wells = dedup_by_location(&records);
        assert_eq!(wells.len(), 2);
        assert_eq!(wells[0].name, "A");
        assert_eq!(wells[0].curve_type, "Gamma");
        assert_eq!(wells[1].name, "B");

        // Idempotent
        assert_eq!(dedup_by_location(&wells), wells);
    }

    #[test]
    fn test_rows_for_wells_keeps_all_segments() {
        let records = vec![
            record("A", 1.0, 2.0, "Gamma"),
            record("B", 3.0, 4.0, "Gamma"),
            record("A", 1.0, 2.0, "Resistivity"),
        ];
        let rows = rows_for_wells(&records, &["A".to_string()]);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.name == "A"));
        assert!(rows_for_wells(&records, &[]).is_empty());
    }

    #[test]
    fn test_curve_type_uses_first_row() {
        let records = vec![
            record("A", 1.0, 2.0, "Gamma"),
            record("A", 1.0, 2.0, "Resistivity"),
        ];
        assert_eq!(curve_type_for(&records, "A"), Some("Gamma"));
        assert_eq!(curve_type_for(&records, "Z"), None);
    }
}
