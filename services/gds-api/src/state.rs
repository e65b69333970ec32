//! Application state for the GDS API.

use anyhow::{Context, Result};
use std::sync::Arc;

use storage::{ObjectCache, ObjectStorage};

use crate::catalog::{MetadataLoader, WellCatalog};
use crate::config::GdsConfig;
use crate::curves::CurveResolver;
use crate::las::LasResolver;

/// The three buckets the viewer reads from.
pub struct Buckets {
    pub metadata: ObjectStorage,
    pub visualization: ObjectStorage,
    pub download: ObjectStorage,
}

impl Buckets {
    /// S3 clients for the configured buckets.
    pub fn from_config(config: &GdsConfig) -> Result<Self> {
        let open = |bucket: &str| {
            ObjectStorage::new(&config.bucket_storage(bucket))
                .with_context(|| format!("Failed to open bucket {}", bucket))
        };

        Ok(Self {
            metadata: open(&config.buckets.metadata)?,
            visualization: open(&config.buckets.visualization)?,
            download: open(&config.buckets.download)?,
        })
    }
}

/// Shared application state. Everything in it is read-only after startup.
pub struct AppState {
    pub config: GdsConfig,

    /// Metadata tables, loaded once at startup.
    pub catalog: WellCatalog,

    pub curves: CurveResolver,

    pub las: LasResolver,

    /// Read-through cache shared by metadata and curve reads.
    pub cache: Arc<ObjectCache>,
}

impl AppState {
    /// Connect to the configured buckets and load the metadata tables.
    pub async fn new(config: GdsConfig) -> Result<Self> {
        let buckets = Buckets::from_config(&config)?;
        Self::with_buckets(config, buckets).await
    }

    /// Build state over already-opened buckets (e.g. in-memory stores).
    pub async fn with_buckets(config: GdsConfig, buckets: Buckets) -> Result<Self> {
        let cache = Arc::new(ObjectCache::new(config.cache.capacity));

        let catalog = MetadataLoader::load(&buckets.metadata, &cache, &config.metadata)
            .await
            .context("Failed to load well metadata")?;

        let curves = CurveResolver::new(
            Arc::new(buckets.visualization),
            Arc::clone(&cache),
            config.curves.clone(),
        );
        let las = LasResolver::new(Arc::new(buckets.download), config.las.clone())?;

        Ok(Self {
            config,
            catalog,
            curves,
            las,
            cache,
        })
    }
}
