//! Depth-indexed curve series.

use serde::{Deserialize, Serialize};

/// A single sample: measured value at a depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub value: f64,
    pub depth: f64,
}

/// A curve for one well and one curve type, ready for a line chart.
///
/// Depth is the y-axis and is displayed inverted (shallow at top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    pub well: String,
    pub curve_type: String,
    /// Chart title, e.g. "Gamma Curve for WellA".
    pub title: String,
    /// Column the values were read from.
    pub value_column: String,
    /// Object key the series was read from.
    pub source_key: String,
    pub points: Vec<CurvePoint>,
    pub depth_axis_inverted: bool,
}

impl CurveSeries {
    pub fn new(
        well: impl Into<String>,
        curve_type: impl Into<String>,
        value_column: impl Into<String>,
        points: Vec<CurvePoint>,
    ) -> Self {
        let well: String = well.into();
        let curve_type: String = curve_type.into();
        Self {
            title: format!("{} Curve for {}", curve_type, well),
            well,
            curve_type,
            value_column: value_column.into(),
            source_key: String::new(),
            points,
            depth_axis_inverted: true,
        }
    }

    pub fn with_source_key(mut self, key: impl Into<String>) -> Self {
        self.source_key = key.into();
        self
    }

    /// (shallowest, deepest) depth, or None for an empty series.
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.depth, p.depth)),
            Some((lo, hi)) => Some((lo.min(p.depth), hi.max(p.depth))),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_range() {
        let series = CurveSeries::new(
            "W1",
            "Gamma",
            "GR",
            vec![
                CurvePoint { value: 1.0, depth: 120.0 },
                CurvePoint { value: 2.0, depth: 100.0 },
                CurvePoint { value: 3.0, depth: 140.5 },
            ],
        );
        assert_eq!(series.depth_range(), Some((100.0, 140.5)));
        assert!(series.depth_axis_inverted);
        assert_eq!(series.title, "Gamma Curve for W1");
    }

    #[test]
    fn test_empty_series() {
        let series = CurveSeries::new("W1", "Gamma", "GR", vec![]);
        assert!(series.is_empty());
        assert_eq!(series.depth_range(), None);
    }
}
