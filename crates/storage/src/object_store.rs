//! Object storage interface for well-log data (S3 compatible).

use bytes::Bytes;
use object_store::{aws::AmazonS3Builder, path::Path, signer::Signer, ObjectStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use gds_common::{GdsError, GdsResult};

/// Configuration for one bucket connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectStorageConfig {
    /// Custom S3 endpoint URL (unset for AWS)
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bucket name
    pub bucket: String,
    /// AWS region
    #[serde(default = "default_region")]
    pub region: String,
    /// Send unsigned requests (public buckets)
    #[serde(default = "default_anonymous")]
    pub anonymous: bool,
    /// Access key ID (ignored when anonymous)
    #[serde(default)]
    pub access_key_id: Option<String>,
    /// Secret access key (ignored when anonymous)
    #[serde(default)]
    pub secret_access_key: Option<String>,
    /// Allow HTTP (for local S3 emulators)
    #[serde(default)]
    pub allow_http: bool,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_anonymous() -> bool {
    true
}

impl ObjectStorageConfig {
    /// Anonymous AWS access to `bucket` with everything else defaulted.
    pub fn public(bucket: impl Into<String>) -> Self {
        Self {
            endpoint: None,
            bucket: bucket.into(),
            region: default_region(),
            anonymous: true,
            access_key_id: None,
            secret_access_key: None,
            allow_http: false,
        }
    }

    /// Base URL objects of this bucket are publicly reachable under.
    fn public_base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), self.bucket),
            None => format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region),
        }
    }
}

/// Read-only object storage client for one bucket.
pub struct ObjectStorage {
    store: Arc<dyn ObjectStore>,
    signer: Option<Arc<dyn Signer>>,
    public_base_url: Option<String>,
    bucket: String,
}

impl ObjectStorage {
    /// Create a new object storage client from config.
    pub fn new(config: &ObjectStorageConfig) -> GdsResult<Self> {
        let mut builder = AmazonS3Builder::new()
            .with_bucket_name(&config.bucket)
            .with_region(&config.region);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        if config.allow_http {
            builder = builder.with_allow_http(true);
        }

        if config.anonymous {
            builder = builder.with_skip_signature(true);
        } else {
            if let Some(key) = &config.access_key_id {
                builder = builder.with_access_key_id(key);
            }
            if let Some(secret) = &config.secret_access_key {
                builder = builder.with_secret_access_key(secret);
            }
        }

        let s3 = Arc::new(builder.build().map_err(|e| {
            GdsError::StorageError(format!("Failed to create S3 client: {}", e))
        })?);

        let (signer, public_base_url): (Option<Arc<dyn Signer>>, _) = if config.anonymous {
            (None, Some(config.public_base_url()))
        } else {
            (Some(s3.clone()), None)
        };

        Ok(Self {
            store: s3,
            signer,
            public_base_url,
            bucket: config.bucket.clone(),
        })
    }

    /// Wrap an existing store, e.g. `object_store::memory::InMemory`.
    ///
    /// Such stores have no URL form, so `retrieval_url` returns `None`.
    pub fn from_store(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            signer: None,
            public_base_url: None,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Read bytes from a key.
    #[instrument(skip(self), fields(bucket = %self.bucket, key = %key))]
    pub async fn get(&self, key: &str) -> GdsResult<Bytes> {
        let location = Path::from(key);

        let result = self.store.get(&location).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => {
                GdsError::ObjectNotFound(format!("{}/{}", self.bucket, key))
            }
            e => GdsError::StorageError(format!("Failed to read {}: {}", key, e)),
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| GdsError::StorageError(format!("Failed to read bytes: {}", e)))?;

        debug!(size = bytes.len(), "Read object");
        Ok(bytes)
    }

    /// List keys that start with `prefix`, in listing order.
    ///
    /// Matches S3 string-prefix semantics: `csv/Gamma` also finds
    /// `csv/Gamma_v2.csv`, not only keys under `csv/Gamma/`. An empty
    /// listing is an empty vector.
    #[instrument(skip(self), fields(bucket = %self.bucket, prefix = %prefix))]
    pub async fn list_prefix(&self, prefix: &str) -> GdsResult<Vec<String>> {
        use futures::TryStreamExt;

        let dir = prefix.rfind('/').map(|idx| Path::from(&prefix[..idx]));

        let mut keys = Vec::new();
        let mut stream = self.store.list(dir.as_ref());
        while let Some(meta) = stream
            .try_next()
            .await
            .map_err(|e| GdsError::StorageError(format!("List failed: {}", e)))?
        {
            let key = meta.location.to_string();
            if key.starts_with(prefix) {
                keys.push(key);
            }
        }

        debug!(count = keys.len(), "Listed objects");
        Ok(keys)
    }

    /// Time-limited URL for fetching `key` over plain HTTP.
    ///
    /// Keyed buckets get a presigned URL. Anonymous buckets get the public
    /// object URL, which needs no signature. Stores without a URL form
    /// return `None` and must be read with [`ObjectStorage::get`].
    pub async fn retrieval_url(&self, key: &str, expires_in: Duration) -> GdsResult<Option<String>> {
        if let Some(signer) = &self.signer {
            let url = signer
                .signed_url(http::Method::GET, &Path::from(key), expires_in)
                .await
                .map_err(|e| GdsError::StorageError(format!("Failed to sign {}: {}", key, e)))?;
            return Ok(Some(url.to_string()));
        }

        Ok(self
            .public_base_url
            .as_ref()
            .map(|base| format!("{}/{}", base, encode_key(key))))
    }
}

/// Percent-encode an object key for use in a URL path, keeping `/`.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for b in key.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    async fn seeded(keys: &[&str]) -> ObjectStorage {
        let store = Arc::new(InMemory::new());
        for key in keys {
            store
                .put(&Path::from(*key), Bytes::from_static(b"x").into())
                .await
                .unwrap();
        }
        ObjectStorage::from_store(store, "test-bucket")
    }

    #[tokio::test]
    async fn test_list_prefix_string_semantics() {
        let storage = seeded(&[
            "csv/Gamma/well1.csv",
            "csv/Gamma_v2.csv",
            "csv/Resistivity/well1.csv",
            "las/a.las",
        ])
        .await;

        let mut keys = storage.list_prefix("csv/Gamma").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["csv/Gamma/well1.csv", "csv/Gamma_v2.csv"]);

        let las = storage.list_prefix("las/").await.unwrap();
        assert_eq!(las, vec!["las/a.las"]);
    }

    #[tokio::test]
    async fn test_empty_listing_is_empty() {
        let storage = seeded(&[]).await;
        assert!(storage.list_prefix("csv/Gamma").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_maps_missing_to_not_found() {
        let storage = seeded(&["meta/a.csv"]).await;
        assert_eq!(storage.get("meta/a.csv").await.unwrap(), Bytes::from_static(b"x"));
        assert!(matches!(
            storage.get("meta/b.csv").await,
            Err(GdsError::ObjectNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_in_memory_has_no_url() {
        let storage = seeded(&["las/a.las"]).await;
        let url = storage
            .retrieval_url("las/a.las", Duration::from_secs(60))
            .await
            .unwrap();
        assert!(url.is_none());
    }

    #[test]
    fn test_public_base_url() {
        let config = ObjectStorageConfig::public("transformed-for-download-data");
        assert_eq!(
            config.public_base_url(),
            "https://transformed-for-download-data.s3.us-east-1.amazonaws.com"
        );

        let local = ObjectStorageConfig {
            endpoint: Some("http://localhost:9000/".to_string()),
            ..ObjectStorageConfig::public("bucket")
        };
        assert_eq!(local.public_base_url(), "http://localhost:9000/bucket");
    }

    #[test]
    fn test_encode_key() {
        assert_eq!(encode_key("las/a b+c.las"), "las/a%20b%2Bc.las");
        assert_eq!(encode_key("las/42.1_-93.5_W.las"), "las/42.1_-93.5_W.las");
    }
}
