//! Error types for the GDS viewer.

use thiserror::Error;

/// Result type alias using GdsError.
pub type GdsResult<T> = Result<T, GdsError>;

/// Primary error type for well-log operations.
#[derive(Debug, Error)]
pub enum GdsError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Well not found: {0}")]
    WellNotFound(String),

    // === Data Errors ===
    #[error("Malformed Age for well '{well}': {value:?}")]
    MalformedAge { well: String, value: String },

    #[error("Missing column '{column}' in {source_name} (columns: {available})")]
    MissingColumn {
        column: String,
        source_name: String,
        available: String,
    },

    #[error("Failed to parse {source_name}: {message}")]
    TableParse { source_name: String, message: String },

    #[error("Curve file not found for type '{curve_type}' (well {well})")]
    CurveNotFound { well: String, curve_type: String },

    #[error("LAS file not found: {0}")]
    LasNotFound(String),

    // === Storage Errors ===
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Download failed: {0}")]
    DownloadError(String),
}

impl GdsError {
    /// Short machine-readable code used in JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            GdsError::MissingParameter(_) => "MissingParameter",
            GdsError::InvalidParameter { .. } => "InvalidParameter",
            GdsError::WellNotFound(_) => "WellNotFound",
            GdsError::MalformedAge { .. } => "MalformedAge",
            GdsError::MissingColumn { .. } => "MissingColumn",
            GdsError::TableParse { .. } => "TableParse",
            GdsError::CurveNotFound { .. } => "CurveNotFound",
            GdsError::LasNotFound(_) => "LasNotFound",
            GdsError::ObjectNotFound(_) => "ObjectNotFound",
            GdsError::StorageError(_) => "StorageError",
            GdsError::DownloadError(_) => "DownloadError",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            GdsError::MissingParameter(_) | GdsError::InvalidParameter { .. } => 400,

            GdsError::WellNotFound(_)
            | GdsError::CurveNotFound { .. }
            | GdsError::LasNotFound(_)
            | GdsError::ObjectNotFound(_) => 404,

            GdsError::DownloadError(_) => 502,

            _ => 500,
        }
    }
}

impl From<csv::Error> for GdsError {
    fn from(err: csv::Error) -> Self {
        GdsError::TableParse {
            source_name: "csv".to_string(),
            message: err.to_string(),
        }
    }
}
