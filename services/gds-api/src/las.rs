//! LAS file resolution and download.
//!
//! Each curve-index row maps to one archived LAS file whose key contains
//! the row's composite key. Downloads go through a time-limited retrieval
//! URL and a plain HTTP GET; there is no retry and no integrity check.

use anyhow::Context;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use gds_common::{GdsError, GdsResult, LasKey, WellRecord};
use storage::{KeyMatch, ObjectStorage};

use crate::config::LasConfig;
use crate::metrics;

/// Result of resolving one curve-index row to a LAS file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LasOutcome {
    Available {
        well: String,
        key: String,
        file_name: String,
        label: String,
        ambiguous: bool,
    },
    NotFound {
        well: String,
        composite_key: String,
        warning: String,
    },
    Failed {
        well: String,
        message: String,
    },
}

/// Locates and fetches LAS files in the download bucket.
pub struct LasResolver {
    storage: Arc<ObjectStorage>,
    config: LasConfig,
    http: Client,
}

impl LasResolver {
    pub fn new(storage: Arc<ObjectStorage>, config: LasConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            storage,
            config,
            http,
        })
    }

    /// Resolve every row against a single listing of the LAS prefix.
    ///
    /// No rows means no listing request.
    #[instrument(skip_all, fields(bucket = %self.storage.bucket(), rows = rows.len()))]
    pub async fn resolve(&self, rows: &[WellRecord]) -> GdsResult<Vec<LasOutcome>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let keys = self.storage.list_prefix(&self.config.prefix).await?;
        debug!(listed = keys.len(), "Listed LAS files");

        Ok(rows.iter().map(|row| Self::match_row(&keys, row)).collect())
    }

    /// Like [`resolve`](Self::resolve) but a failed listing becomes one
    /// [`LasOutcome::Failed`] per row.
    pub async fn resolve_or_report(&self, rows: &[WellRecord]) -> Vec<LasOutcome> {
        match self.resolve(rows).await {
            Ok(outcomes) => outcomes,
            Err(e) => {
                warn!(error = %e, "LAS listing failed");
                rows.iter()
                    .map(|row| LasOutcome::Failed {
                        well: row.name.clone(),
                        message: e.to_string(),
                    })
                    .collect()
            }
        }
    }

    fn match_row(keys: &[String], row: &WellRecord) -> LasOutcome {
        let composite = LasKey::for_record(row);

        match KeyMatch::resolve(keys, composite.as_str()) {
            KeyMatch::NotFound => {
                info!(well = %row.name, composite = %composite, "LAS file not found");
                metrics::record_las_not_found();
                LasOutcome::NotFound {
                    well: row.name.clone(),
                    composite_key: composite.to_string(),
                    warning: format!("LAS file not found for {}", row.name),
                }
            }
            found => LasOutcome::Available {
                well: row.name.clone(),
                key: found.selected().unwrap_or_default().to_string(),
                file_name: composite.file_name(),
                label: format!("Download LAS file for {}", row.name),
                ambiguous: found.is_ambiguous(),
            },
        }
    }

    /// Fetch the bytes of a LAS file.
    ///
    /// Only keys under the configured prefix are served.
    #[instrument(skip(self), fields(bucket = %self.storage.bucket()))]
    pub async fn fetch(&self, key: &str) -> GdsResult<Bytes> {
        if !key.starts_with(&self.config.prefix) || key.contains("..") {
            return Err(GdsError::InvalidParameter {
                param: "key".to_string(),
                message: format!("must be under '{}'", self.config.prefix),
            });
        }

        let url = self
            .storage
            .retrieval_url(key, self.config.url_expiry())
            .await?;

        let Some(url) = url else {
            return self.storage.get(key).await;
        };

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GdsError::DownloadError(format!("{}: {}", key, e)))?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => {
                return Err(GdsError::ObjectNotFound(key.to_string()))
            }
            status if !status.is_success() => {
                return Err(GdsError::DownloadError(format!("{}: HTTP {}", key, status)))
            }
            _ => {}
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GdsError::DownloadError(format!("{}: {}", key, e)))?;

        debug!(size = bytes.len(), "Downloaded LAS file");
        Ok(bytes)
    }
}
