//! Composite keys used to locate archival LAS files.
//!
//! Archived files are stored as `las/<prefix><lat>_<lon>_<start>_<finish>_<name><suffix>`,
//! so the composite key is matched as an infix of the stored key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::WellRecord;

/// `"{lat}_{lon}_{Depth_start:.1}_{Depth_finish:.1}_{Name}"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LasKey(String);

impl LasKey {
    pub fn new(lat: f64, lon: f64, depth_start: f64, depth_finish: f64, name: &str) -> Self {
        Self(format!(
            "{}_{}_{:.1}_{:.1}_{}",
            float_repr(lat),
            float_repr(lon),
            depth_start,
            depth_finish,
            name
        ))
    }

    pub fn for_record(record: &WellRecord) -> Self {
        Self::new(
            record.lat,
            record.lon,
            record.depth_start,
            record.depth_finish,
            &record.name,
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if a stored object key carries this composite key.
    pub fn matches(&self, object_key: &str) -> bool {
        object_key.contains(&self.0)
    }

    /// Download file name offered to the user.
    pub fn file_name(&self) -> String {
        format!("{}.las", self.0)
    }
}

impl fmt::Display for LasKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shortest round-trip representation that always carries a fractional
/// part or an exponent: `42.0`, `-93.5`, `1e-05`, `1e+16`.
///
/// This is the spelling the archive used when the files were named.
fn float_repr(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{:e}", v);
        return match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let exp: i32 = exp.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            None => sci,
        };
    }

    let plain = format!("{}", v);
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}
