//! Time-Related Constants

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: f64 = 1000.0;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: f64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

// ===== SAMPLING =====

/// Nominal probe logging interval (seconds).
///
/// The probe exports one row every 5 seconds, i.e. 12 samples per minute
/// and 60 samples for the 5 minute minimum bake duration.
pub const NOMINAL_SAMPLE_INTERVAL_S: f64 = 5.0;

/// Relative deviation from the series' first interval tolerated before the
/// sampling is reported as irregular.
pub const SAMPLE_INTERVAL_TOLERANCE: f64 = 0.5;
