//! Plausibility Limits for Probe Readings
//!
//! Readings outside these bounds are almost certainly sensor faults or
//! unit mix-ups rather than food temperatures. They are reported, not
//! rejected.

/// Lowest plausible probe reading (°C).
///
/// Frozen dough straight from a blast freezer sits around -40°C.
pub const PLAUSIBLE_MIN_C: f64 = -50.0;

/// Highest plausible probe reading (°C).
///
/// Above deck-oven temperatures; a probe reading this is reporting garbage.
pub const PLAUSIBLE_MAX_C: f64 = 300.0;
