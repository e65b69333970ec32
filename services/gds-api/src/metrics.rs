//! Prometheus counters for the viewer.
//!
//! Counters go through the `metrics` facade; without an installed
//! recorder (unit tests) they are no-ops.

use metrics::counter;

/// Record an API request.
pub fn record_request(endpoint: &'static str) {
    counter!("gds_requests_total", "endpoint" => endpoint).increment(1);
}

/// Record a well whose curve file could not be located.
pub fn record_curve_not_found() {
    counter!("gds_curve_not_found_total").increment(1);
}

/// Record a curve-index row without a LAS file.
pub fn record_las_not_found() {
    counter!("gds_las_not_found_total").increment(1);
}

/// Record a served LAS download.
pub fn record_las_download(bytes: usize) {
    counter!("gds_las_downloads_total").increment(1);
    counter!("gds_las_download_bytes_total").increment(bytes as u64);
}
