//! GDS API Service Library
//!
//! HTTP service behind the well-log viewer: geologic-time filtering of
//! wells, curve extraction and LAS file downloads from S3 buckets.

pub mod app;
pub mod catalog;
pub mod config;
pub mod curves;
pub mod dashboard;
pub mod handlers;
pub mod las;
pub mod metrics;
pub mod state;
