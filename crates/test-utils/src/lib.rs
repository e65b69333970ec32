//! Shared test utilities for the gds-viewer workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Sample metadata, curve and LAS fixtures
//! - Helpers that seed in-memory object stores with those fixtures
//! - Float comparison macros
//!
//! # Usage
//!
//! ```ignore
//! use test_utils::{fixtures, seed_store};
//!
//! let store = seed_store(&[(fixtures::metadata::CURVE_INDEX_KEY, fixtures::metadata::CURVE_INDEX)]).await;
//! ```

pub mod fixtures;
pub mod stores;

pub use fixtures::*;
pub use stores::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}
