//! HTTP request handlers for the GDS API.

pub mod dashboard;
pub mod downloads;
pub mod error;
pub mod geology;
pub mod health;
pub mod wells;

pub use error::ApiError;
