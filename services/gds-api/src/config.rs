//! Service configuration loading and types.
//!
//! Every field has a default matching the published buckets, so the
//! service runs without a config file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use storage::ObjectStorageConfig;

/// GDS viewer configuration loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GdsConfig {
    #[serde(default)]
    pub buckets: BucketsConfig,

    #[serde(default)]
    pub metadata: MetadataFilesConfig,

    #[serde(default)]
    pub curves: CurvesConfig,

    #[serde(default)]
    pub las: LasConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub storage: StorageConnectionConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl GdsConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file does not exist, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;

        let config: GdsConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse: {:?}", path))?;

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Connection settings for one of the configured buckets.
    pub fn bucket_storage(&self, bucket: &str) -> ObjectStorageConfig {
        ObjectStorageConfig {
            endpoint: self.storage.endpoint.clone(),
            bucket: bucket.to_string(),
            region: self.storage.region.clone(),
            anonymous: self.storage.anonymous,
            access_key_id: self.storage.access_key_id.clone(),
            secret_access_key: self.storage.secret_access_key.clone(),
            allow_http: self.storage.allow_http,
        }
    }
}

/// Bucket names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketsConfig {
    /// Holds the two metadata tables.
    #[serde(default = "default_metadata_bucket")]
    pub metadata: String,

    /// Holds curve CSVs under `curves.prefix`.
    #[serde(default = "default_visualization_bucket")]
    pub visualization: String,

    /// Holds archived LAS files under `las.prefix`.
    #[serde(default = "default_download_bucket")]
    pub download: String,
}

impl Default for BucketsConfig {
    fn default() -> Self {
        Self {
            metadata: default_metadata_bucket(),
            visualization: default_visualization_bucket(),
            download: default_download_bucket(),
        }
    }
}

fn default_metadata_bucket() -> String {
    "for-metadata".to_string()
}
fn default_visualization_bucket() -> String {
    "transformed-for-visualization-data-1".to_string()
}
fn default_download_bucket() -> String {
    "transformed-for-download-data".to_string()
}

/// Object keys of the metadata tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataFilesConfig {
    #[serde(default = "default_curve_index")]
    pub curve_index: String,

    #[serde(default = "default_geology")]
    pub geology: String,
}

impl Default for MetadataFilesConfig {
    fn default() -> Self {
        Self {
            curve_index: default_curve_index(),
            geology: default_geology(),
        }
    }
}

fn default_curve_index() -> String {
    "List_of_curves.csv".to_string()
}
fn default_geology() -> String {
    "List_of_data-new.csv".to_string()
}

/// Curve-file lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvesConfig {
    /// Listing prefix; the curve type is appended.
    #[serde(default = "default_curves_prefix")]
    pub prefix: String,

    /// Column holding measured values, per curve type. Types not listed
    /// use a column named like the type itself.
    #[serde(default)]
    pub value_columns: HashMap<String, String>,
}

impl Default for CurvesConfig {
    fn default() -> Self {
        Self {
            prefix: default_curves_prefix(),
            value_columns: HashMap::new(),
        }
    }
}

impl CurvesConfig {
    pub fn value_column_for<'a>(&'a self, curve_type: &'a str) -> &'a str {
        self.value_columns
            .get(curve_type)
            .map(String::as_str)
            .unwrap_or(curve_type)
    }
}

fn default_curves_prefix() -> String {
    "csv/".to_string()
}

/// LAS-file lookup and download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LasConfig {
    #[serde(default = "default_las_prefix")]
    pub prefix: String,

    /// Lifetime of signed retrieval URLs.
    #[serde(default = "default_url_expiry_secs")]
    pub url_expiry_secs: u64,
}

impl Default for LasConfig {
    fn default() -> Self {
        Self {
            prefix: default_las_prefix(),
            url_expiry_secs: default_url_expiry_secs(),
        }
    }
}

impl LasConfig {
    pub fn url_expiry(&self) -> Duration {
        Duration::from_secs(self.url_expiry_secs)
    }
}

fn default_las_prefix() -> String {
    "las/".to_string()
}
fn default_url_expiry_secs() -> u64 {
    3600
}

/// Map display settings passed through to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_map_style")]
    pub style: String,

    #[serde(default = "default_map_zoom")]
    pub zoom: u8,

    /// Tile-provider access token, if the style needs one.
    #[serde(default)]
    pub access_token: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: default_map_style(),
            zoom: default_map_zoom(),
            access_token: None,
        }
    }
}

fn default_map_style() -> String {
    "satellite".to_string()
}
fn default_map_zoom() -> u8 {
    4
}

/// Connection settings shared by all buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConnectionConfig {
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_region")]
    pub region: String,

    /// Unsigned requests; the published buckets are public.
    #[serde(default = "default_anonymous")]
    pub anonymous: bool,

    #[serde(default)]
    pub access_key_id: Option<String>,

    #[serde(default)]
    pub secret_access_key: Option<String>,

    #[serde(default)]
    pub allow_http: bool,
}

impl Default for StorageConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            region: default_region(),
            anonymous: default_anonymous(),
            access_key_id: None,
            secret_access_key: None,
            allow_http: false,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}
fn default_anonymous() -> bool {
    true
}

/// Object cache sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached objects.
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_capacity() -> usize {
    64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_published_buckets() {
        let config = GdsConfig::default();
        assert_eq!(config.buckets.metadata, "for-metadata");
        assert_eq!(
            config.buckets.visualization,
            "transformed-for-visualization-data-1"
        );
        assert_eq!(config.buckets.download, "transformed-for-download-data");
        assert_eq!(config.metadata.curve_index, "List_of_curves.csv");
        assert_eq!(config.metadata.geology, "List_of_data-new.csv");
        assert_eq!(config.curves.prefix, "csv/");
        assert_eq!(config.las.prefix, "las/");
        assert_eq!(config.map.style, "satellite");
        assert!(config.storage.anonymous);
    }

    #[test]
    fn test_value_column_falls_back_to_type() {
        let mut curves = CurvesConfig::default();
        curves
            .value_columns
            .insert("Resistivity".to_string(), "ILD".to_string());

        assert_eq!(curves.value_column_for("Resistivity"), "ILD");
        assert_eq!(curves.value_column_for("Gamma"), "Gamma");
    }

    #[test]
    fn test_config_yaml_parsing() {
        let yaml = r#"
buckets:
  visualization: my-curves
curves:
  value_columns:
    Gamma: GR
las:
  url_expiry_secs: 60
storage:
  endpoint: http://localhost:9000
  allow_http: true
  anonymous: false
  access_key_id: minioadmin
  secret_access_key: minioadmin
"#;

        let config: GdsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.buckets.visualization, "my-curves");
        assert_eq!(config.buckets.metadata, "for-metadata");
        assert_eq!(config.curves.value_column_for("Gamma"), "GR");
        assert_eq!(config.las.url_expiry(), Duration::from_secs(60));

        let download = config.bucket_storage(&config.buckets.download);
        assert_eq!(download.bucket, "transformed-for-download-data");
        assert_eq!(download.endpoint.as_deref(), Some("http://localhost:9000"));
        assert!(!download.anonymous);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "map:\n  zoom: 6\n  access_token: abc").unwrap();

        let config = GdsConfig::load(file.path()).unwrap();
        assert_eq!(config.map.zoom, 6);
        assert_eq!(config.map.access_token.as_deref(), Some("abc"));
        assert_eq!(config.map.style, "satellite");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GdsConfig::load(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.cache.capacity, 64);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "map: [not, a, mapping").unwrap();
        assert!(GdsConfig::load(file.path()).is_err());
    }
}
