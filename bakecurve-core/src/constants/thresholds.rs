//! Detection and Validation Thresholds
//!
//! Two presets share most values and differ only in how large a drop from
//! peak ends a curve. Finding one session's end tolerates a small drop;
//! telling several sessions apart needs a drop large enough that normal
//! in-oven oscillation cannot trigger it.

// ===== START DETECTION =====

/// Rise above the local baseline that marks a thermal start (°C).
///
/// Probe insertion into a warm product, or a loaded tray entering the oven,
/// moves the core reading several degrees within a few samples. Room-temperature
/// drift never does.
pub const RISE_THRESHOLD_C: f64 = 5.0;

/// Samples ahead of the candidate index inspected for the rise.
///
/// 3 samples = 15 seconds at the nominal interval.
pub const RISE_LOOKAHEAD_SAMPLES: usize = 3;

/// Samples averaged into the local baseline.
pub const BASELINE_WINDOW_SAMPLES: usize = 3;

/// Upper bound for the baseline window (fixed ring buffer capacity).
pub const MAX_BASELINE_WINDOW_SAMPLES: usize = 32;

/// Upper bound for the rise look-ahead.
pub const MAX_RISE_LOOKAHEAD_SAMPLES: usize = 120;

// ===== END DETECTION =====

/// Primary drop from peak that proposes an end, single-curve preset (°C).
pub const SINGLE_CURVE_PRIMARY_DROP_C: f64 = 5.0;

/// Fallback drop accepted without rate confirmation, single-curve preset (°C).
pub const SINGLE_CURVE_FALLBACK_DROP_C: f64 = 10.0;

/// Primary drop from peak that proposes an end, multi-curve preset (°C).
///
/// Oven spring and door openings produce dips of several degrees inside a
/// single bake; 20°C is well clear of them.
pub const MULTI_CURVE_PRIMARY_DROP_C: f64 = 20.0;

/// Fallback drop accepted without rate confirmation, multi-curve preset (°C).
pub const MULTI_CURVE_FALLBACK_DROP_C: f64 = 20.0;

/// Cooling rate that confirms a removal (°C/min).
///
/// A product pulled from the oven sheds heat at several degrees per minute.
/// Slow drift below this rate is a plateau, not a removal.
pub const MIN_COOLING_RATE_C_PER_MIN: f64 = 1.0;

// ===== VALIDATION =====

/// Shortest accepted bake (minutes).
pub const MIN_DURATION_MINUTES: f64 = 5.0;

/// Lowest accepted peak core temperature (°C).
///
/// Anything that never clears 80°C is an idle or near-ambient stretch,
/// not a bake.
pub const MIN_PEAK_TEMP_C: f64 = 80.0;
