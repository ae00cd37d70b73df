//! Baking curve segmentation engine
//!
//! Splits a continuous probe recording into discrete baking curves: the
//! episodes in which a product is probed, heated and taken out. A recording
//! may hold idle periods, several unrelated bakes and long cooling tails;
//! the engine finds where each bake starts and ends, drops candidates that
//! are too short or never got hot, and returns the rest re-based to t = 0.
//!
//! Key constraints:
//! - Pure and synchronous; the series is borrowed, curves are owned copies
//! - Every threshold is configuration, never a literal in the scan
//! - `no_std + alloc` without the default `std` feature
//!
//! ```rust
//! use bakecurve_core::{Sample, Segmenter, Series};
//!
//! let mut samples = Vec::new();
//! for i in 0..600 {
//!     let (temp, state) = match i {
//!         0..=99 => (22.0, "Probe Not Inserted"),
//!         100..=399 => (22.0 + (i - 99) as f64 * 0.25, "Predicting"),
//!         _ => (97.0 - (i - 399) as f64 * 0.5, "Probe Not Inserted"),
//!     };
//!     samples.push(Sample::new(i as f64 * 5.0, temp).with_state(state));
//! }
//! let series = Series::new(samples)?;
//!
//! let result = Segmenter::multi_curve().segment(&series);
//! assert_eq!(result.count(), 1);
//! let curve = result.curve(1).unwrap();
//! assert_eq!(curve.start_idx, 100);
//! assert_eq!(curve.data[0].timestamp, 0.0);
//! # Ok::<(), bakecurve_core::SegmentError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod buffer;
pub mod config;
pub mod constants;
pub mod curve;
pub mod cursor;
pub mod detect;
pub mod errors;
pub mod frame;
pub mod quality;
pub mod segmenter;
pub mod series;
pub mod state;
pub mod summary;
pub mod time;
pub mod traits;
pub mod validate;

// Public API
pub use config::{SegmentationMode, SegmenterConfig};
pub use curve::{Curve, CurveOrigin, CurveSample};
pub use cursor::CurveCursor;
pub use detect::{
    EndDetector, EndHit, EndOutcome, EndReason, Peak, SignalHit, StartDetector, StartHit,
    StateTransitionSignal, ThermalRiseSignal,
};
pub use errors::{ConfigError, ConfigResult, SegmentError, SegmentResult};
pub use frame::{Column, ColumnNames, Frame};
pub use quality::{inspect, SeriesIssue};
pub use segmenter::{RejectedCandidate, ScanDiagnostics, Segmentation, Segmenter, StopReason};
pub use series::{Sample, Series};
pub use state::ProbeState;
pub use summary::{CurveSummary, RunSummary};
pub use time::{TimeUnit, Timestamp};
pub use traits::{SignalKind, StartSignal};
pub use validate::{Rejection, SegmentValidator, ValidatedSegment};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
