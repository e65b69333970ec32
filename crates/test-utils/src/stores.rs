//! In-memory object stores seeded with fixture objects.

use bytes::Bytes;
use object_store::{memory::InMemory, path::Path, ObjectStore};
use std::sync::Arc;

use crate::fixtures::{curves, las, metadata};

/// Build an in-memory store holding `objects` as `(key, contents)` pairs.
pub async fn seed_store(objects: &[(&str, &str)]) -> Arc<InMemory> {
    let store = Arc::new(InMemory::new());
    for (key, contents) in objects {
        store
            .put(&Path::from(*key), Bytes::copy_from_slice(contents.as_bytes()).into())
            .await
            .expect("seeding in-memory store");
    }
    store
}

/// Metadata bucket with both tables.
pub async fn metadata_store() -> Arc<InMemory> {
    seed_store(&[
        (metadata::CURVE_INDEX_KEY, metadata::CURVE_INDEX),
        (metadata::GEOLOGY_KEY, metadata::GEOLOGY),
    ])
    .await
}

/// Visualization bucket with Gamma (two files) and Resistivity curves.
pub async fn visualization_store() -> Arc<InMemory> {
    seed_store(&[
        (curves::GAMMA_KEY, curves::GAMMA),
        (curves::GAMMA_SECOND_KEY, curves::GAMMA),
        (curves::RESISTIVITY_KEY, curves::RESISTIVITY),
    ])
    .await
}

/// Download bucket with LAS files for WellA's first segment and WellB.
pub async fn download_store() -> Arc<InMemory> {
    seed_store(&[
        (las::WELL_A_FIRST_KEY, las::WELL_A_FIRST),
        (las::WELL_B_KEY, las::WELL_B),
    ])
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_metadata_is_readable() {
        let store = metadata_store().await;
        let bytes = store
            .get(&Path::from(metadata::CURVE_INDEX_KEY))
            .await
            .unwrap()
            .bytes()
            .await
            .unwrap();
        assert!(bytes.starts_with(b"Name,lat,lon"));
    }

    #[test]
    fn test_seed_store_without_runtime() {
        let store = tokio_test::block_on(seed_store(&[("las/a.las", "x")]));
        let head = tokio_test::block_on(store.head(&Path::from("las/a.las"))).unwrap();
        assert_eq!(head.size, 1);
    }
}
