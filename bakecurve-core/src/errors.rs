//! Error Types for Series Ingestion and Configuration
//!
//! ## What Is (and Is Not) an Error
//!
//! Segmentation is heuristic, so most "failures" are ordinary outcomes:
//!
//! - **No start signal fires**: the scan simply ends. The caller receives an
//!   empty [`Segmentation`](crate::Segmentation) with a diagnostic note.
//! - **A candidate fails validation**: it is discarded (multi-curve) or the
//!   whole series becomes the curve (single-curve). Recorded in
//!   [`ScanDiagnostics`](crate::ScanDiagnostics), never returned as `Err`.
//!
//! Only two things are errors:
//!
//! ### Malformed Input ([`SegmentError`])
//! The engine refuses to run on absent or non-numeric data. A missing core
//! temperature column, a null or NaN core reading, or timestamps that go
//! backwards are all rejected before any scan begins. The optional
//! `PredictionState` column is the exception: without it the start detector
//! falls back to the thermal-rise signal alone.
//!
//! ### Invalid Configuration ([`ConfigError`])
//! Thresholds that cannot produce a meaningful scan (NaN, negative, a fallback
//! drop tighter than the primary drop, a zero-sample look-ahead).
//!
//! ## Handling Strategy
//!
//! ```rust
//! use bakecurve_core::{Sample, Segmenter, SegmentError, Series};
//!
//! let samples = vec![Sample::new(0.0, 21.0), Sample::new(5.0, f64::NAN)];
//! match Series::new(samples) {
//!     Ok(series) => {
//!         let _ = Segmenter::multi_curve().segment(&series);
//!     }
//!     Err(SegmentError::NonFiniteTemperature { index, .. }) => {
//!         assert_eq!(index, 1);
//!     }
//!     Err(other) => panic!("unexpected: {other}"),
//! }
//! ```

use alloc::string::String;

use thiserror_no_std::Error;

/// Result type for ingestion and segmentation
pub type SegmentResult<T> = Result<T, SegmentError>;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Malformed input. Surfaced to the caller immediately.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    /// The series has no samples at all
    #[error("Series is empty")]
    EmptySeries,

    /// A required column is absent from the input frame
    #[error("Required column '{name}' is missing")]
    MissingColumn {
        /// Column name (or the list of accepted names) that was looked up
        name: String,
    },

    /// A column that must be numeric holds text
    #[error("Column '{name}' is not numeric")]
    NonNumericColumn {
        /// Offending column
        name: String,
    },

    /// A required numeric cell is null
    #[error("Column '{column}' has no value at row {index}")]
    MissingValue {
        /// Offending column
        column: String,
        /// Row index
        index: usize,
    },

    /// Core temperature is NaN or infinite
    #[error("Core temperature at row {index} is not a finite number ({value})")]
    NonFiniteTemperature {
        /// Row index
        index: usize,
        /// The raw value
        value: f64,
    },

    /// Timestamp is not finite or goes backwards
    #[error("Timestamp at row {index} ({timestamp}) does not follow {previous}")]
    NonMonotonicTimestamp {
        /// Row index
        index: usize,
        /// Timestamp at `index`
        timestamp: f64,
        /// Timestamp at `index - 1`
        previous: f64,
    },

    /// Columns in a frame disagree on row count
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        /// Offending column
        column: String,
        /// Row count of the timestamp column
        expected: usize,
        /// Row count of the offending column
        found: usize,
    },

    /// Configuration was rejected before the scan
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected segmenter configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A threshold is NaN, infinite, zero or negative
    #[error("Threshold '{name}' must be a positive finite number, got {value}")]
    InvalidThreshold {
        /// Field name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Fallback drop must be at least as large as the primary drop
    #[error("Fallback drop {fallback}°C is tighter than primary drop {primary}°C")]
    FallbackTighterThanPrimary {
        /// Primary drop threshold
        primary: f64,
        /// Fallback drop threshold
        fallback: f64,
    },

    /// A window length is outside its supported range
    #[error("Window '{name}' must be within [{min}, {max}] samples, got {value}")]
    WindowOutOfRange {
        /// Field name
        name: &'static str,
        /// Rejected value
        value: usize,
        /// Smallest accepted value
        min: usize,
        /// Largest accepted value
        max: usize,
    },

    /// `max_curves` of zero would never emit anything
    #[error("max_curves must be at least 1")]
    ZeroMaxCurves,

    /// JSON configuration could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}
