//! Geologic-time filtering.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::well::{GeologyRow, WellRecord};

/// A user-chosen set of geologic-time labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSelection {
    labels: HashSet<String>,
}

impl TimeSelection {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated query value. An empty string is an
    /// empty selection, not "everything".
    pub fn from_query_string(s: &str) -> Self {
        Self::new(s.split(',').map(str::trim).filter(|t| !t.is_empty()))
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Labels in sorted order, for stable responses.
    pub fn sorted_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.labels.iter().cloned().collect();
        labels.sort();
        labels
    }

    /// True iff the record's ages intersect this selection.
    ///
    /// A record with a malformed `Age` never matches.
    pub fn matches(&self, record: &WellRecord) -> bool {
        if self.labels.is_empty() {
            return false;
        }
        match record.age_tokens() {
            Ok(tokens) => tokens.iter().any(|t| self.labels.contains(*t)),
            Err(e) => {
                warn!(well = %record.name, error = %e, "Excluding well from time filter");
                false
            }
        }
    }
}

/// Stable filter of `records` by `selection`.
pub fn filter_by_time(records: &[WellRecord], selection: &TimeSelection) -> Vec<WellRecord> {
    records
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect()
}

/// Distinct `Geological_Time` labels in first-seen order.
pub fn unique_time_labels(rows: &[GeologyRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .map(|r| r.geological_time.trim())
        .filter(|label| !label.is_empty())
        .filter(|label| seen.insert(*label))
        .map(str::to_string)
        .collect()
}
