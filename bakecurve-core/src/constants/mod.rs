//! Constants for Bakecurve Core
//!
//! Default values for every tunable threshold, plus the fixed limits the
//! engine relies on. Thresholds here only seed
//! [`SegmenterConfig`](crate::SegmenterConfig) presets; the scan itself reads
//! the configuration, never these constants directly.
//!
//! ## Organization
//!
//! - **Thresholds**: start/end/validation defaults for both presets
//! - **Time**: unit conversions and the nominal probe sampling interval
//! - **Quality**: plausibility limits for advisory data checks

/// Detection and validation threshold defaults.
pub mod thresholds;

/// Time unit conversions and sampling intervals.
pub mod time;

/// Plausibility limits used by [`quality`](crate::quality).
pub mod quality;

pub use thresholds::{
    MIN_COOLING_RATE_C_PER_MIN, MIN_DURATION_MINUTES, MIN_PEAK_TEMP_C, MULTI_CURVE_FALLBACK_DROP_C,
    MULTI_CURVE_PRIMARY_DROP_C, RISE_THRESHOLD_C, SINGLE_CURVE_FALLBACK_DROP_C,
    SINGLE_CURVE_PRIMARY_DROP_C,
};

pub use time::{MS_PER_SECOND, NOMINAL_SAMPLE_INTERVAL_S, SECONDS_PER_MINUTE};
