//! LAS file download handler.

use axum::{
    extract::{Extension, Query},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use gds_common::GdsError;

use super::ApiError;
use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    /// Object key in the download bucket.
    pub key: Option<String>,
    /// Suggested file name; defaults to the key's last segment.
    pub name: Option<String>,
}

/// GET /api/las?key=...&name=...
pub async fn las_download_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    metrics::record_request("las_download");

    let key = params
        .key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| GdsError::MissingParameter("key".to_string()))?;

    let bytes = state.las.fetch(&key).await.map_err(|e| match e {
        GdsError::ObjectNotFound(key) => GdsError::LasNotFound(key),
        other => other,
    })?;

    let file_name = params
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| default_file_name(&key));

    info!(key = %key, size = bytes.len(), "Serving LAS file");
    metrics::record_las_download(bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&file_name)),
        ],
        bytes,
    )
        .into_response())
}

fn default_file_name(key: &str) -> String {
    key.rsplit('/').next().unwrap_or(key).to_string()
}

fn content_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control() && !matches!(c, '"' | '\\'))
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name("las/2023/WellB_v1.las"), "WellB_v1.las");
        assert_eq!(default_file_name("WellB.las"), "WellB.las");
    }

    #[test]
    fn test_content_disposition_strips_quotes() {
        assert_eq!(
            content_disposition("a\"b.las"),
            "attachment; filename=\"ab.las\""
        );
    }
}
