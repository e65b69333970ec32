//! Curve resolution: well -> curve type -> curve file -> depth series.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use gds_common::{parse_curve_series, CurveSeries, GdsResult};
use storage::{KeyMatch, ObjectCache, ObjectStorage};

use crate::config::CurvesConfig;
use crate::metrics;

/// Result of resolving one well's curve.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CurveOutcome {
    Found {
        series: CurveSeries,
        #[serde(rename = "match")]
        key_match: KeyMatch,
    },
    /// No curve file carries the well's type; the chart is omitted.
    NotFound { well: String, curve_type: String },
    /// Listing, fetch or parse failed; other wells are unaffected.
    Failed { well: String, message: String },
}

impl CurveOutcome {
    pub fn well(&self) -> &str {
        match self {
            CurveOutcome::Found { series, .. } => &series.well,
            CurveOutcome::NotFound { well, .. } | CurveOutcome::Failed { well, .. } => well,
        }
    }
}

/// Locates and reads curve files in the visualization bucket.
pub struct CurveResolver {
    storage: Arc<ObjectStorage>,
    cache: Arc<ObjectCache>,
    config: CurvesConfig,
}

impl CurveResolver {
    pub fn new(storage: Arc<ObjectStorage>, cache: Arc<ObjectCache>, config: CurvesConfig) -> Self {
        Self {
            storage,
            cache,
            config,
        }
    }

    /// Resolve the curve file for `curve_type` and extract `well`'s series.
    ///
    /// Lists `<prefix><curve_type>` and takes the first key containing the
    /// type. An empty listing is `NotFound`, not an error.
    #[instrument(skip(self), fields(bucket = %self.storage.bucket()))]
    pub async fn resolve(&self, well: &str, curve_type: &str) -> GdsResult<CurveOutcome> {
        let prefix = format!("{}{}", self.config.prefix, curve_type);
        let keys = self.storage.list_prefix(&prefix).await?;
        let key_match = KeyMatch::resolve(&keys, curve_type);

        let Some(key) = key_match.selected().map(str::to_string) else {
            info!(well, curve_type, "Curve file not found");
            metrics::record_curve_not_found();
            return Ok(CurveOutcome::NotFound {
                well: well.to_string(),
                curve_type: curve_type.to_string(),
            });
        };

        if let KeyMatch::Ambiguous { candidates, .. } = &key_match {
            warn!(
                curve_type,
                selected = %key,
                candidates = candidates.len(),
                "Several curve files match; using the first listed"
            );
        }

        let data = self.cache.get_or_fetch(&self.storage, &key).await?;
        let value_column = self.config.value_column_for(curve_type);
        let series = parse_curve_series(&data, &key, well, curve_type, value_column)?;

        debug!(
            well,
            key = %key,
            points = series.points.len(),
            depth_range = ?series.depth_range(),
            "Resolved curve"
        );
        Ok(CurveOutcome::Found { series, key_match })
    }

    /// Like [`resolve`](Self::resolve) but never fails: errors become
    /// [`CurveOutcome::Failed`].
    pub async fn resolve_or_report(&self, well: &str, curve_type: &str) -> CurveOutcome {
        match self.resolve(well, curve_type).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(well, curve_type, error = %e, "Curve resolution failed");
                CurveOutcome::Failed {
                    well: well.to_string(),
                    message: e.to_string(),
                }
            }
        }
    }
}
