//! Storage abstractions for the GDS viewer services.
//!
//! Provides read-only interfaces for:
//! - Object storage (S3 compatible, anonymous or keyed) for metadata, curve and LAS files
//! - An in-process read-through cache for immutable objects
//! - Substring resolution of object keys against a listing

pub mod key_match;
pub mod object_cache;
pub mod object_store;

pub use self::object_store::{ObjectStorage, ObjectStorageConfig};
pub use key_match::KeyMatch;
pub use object_cache::{CacheStats, ObjectCache};
