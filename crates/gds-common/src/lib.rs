//! Common types and logic shared by the GDS viewer services.
//!
//! Everything here is pure: rows come in as parsed tables and views
//! go out as new vectors. Nothing talks to object storage.

pub mod bbox;
pub mod curve;
pub mod error;
pub mod las;
pub mod selection;
pub mod tables;
pub mod time;
pub mod well;

pub use bbox::BoundingBox;
pub use curve::{CurvePoint, CurveSeries};
pub use error::{GdsError, GdsResult};
pub use las::LasKey;
pub use selection::{box_select, reconcile_selection};
pub use tables::{parse_curve_index, parse_curve_series, parse_geology_table};
pub use time::{filter_by_time, unique_time_labels, TimeSelection};
pub use well::{curve_type_for, dedup_by_location, rows_for_wells, GeologyRow, WellRecord};
