//! Human-readable run report
//!
//! ```text
//! Curve 1:
//!   Duration: 32.1 minutes
//!   Samples: 386
//!   Max temperature: 95.0°C
//!   Original timestamp range: 1500.0s - 3425.0s
//! Total curves found: 1
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::config::SegmentationMode;
use crate::curve::{Curve, CurveOrigin};
use crate::detect::EndReason;
use crate::segmenter::{Segmentation, StopReason};
use crate::time::{TimeUnit, Timestamp};

/// Per-curve line of a [`RunSummary`]
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSummary {
    /// 1-based curve number
    pub curve_number: usize,
    /// Elapsed minutes
    pub duration_minutes: f64,
    /// Sample count
    pub sample_count: usize,
    /// Highest core temperature (°C)
    pub max_core_temp: f64,
    /// Original start timestamp
    pub start_time: Timestamp,
    /// Original end timestamp
    pub end_time: Timestamp,
    /// End criterion
    pub end_reason: EndReason,
    /// Detected or fallback
    pub origin: CurveOrigin,
}

impl From<&Curve> for CurveSummary {
    fn from(curve: &Curve) -> Self {
        Self {
            curve_number: curve.curve_number,
            duration_minutes: curve.duration_minutes,
            sample_count: curve.sample_count,
            max_core_temp: curve.max_core_temp,
            start_time: curve.start_time,
            end_time: curve.end_time,
            end_reason: curve.end_reason,
            origin: curve.origin,
        }
    }
}

/// Report over a whole [`Segmentation`]
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Mode of the run
    pub mode: SegmentationMode,
    /// One entry per curve
    pub curves: Vec<CurveSummary>,
    /// Candidates discarded by validation
    pub rejected: usize,
    /// Why the scan ended
    pub stop_reason: StopReason,
    /// Unit used for the timestamp range
    pub time_unit: TimeUnit,
}

impl RunSummary {
    /// Total duration of all curves (minutes)
    pub fn total_minutes(&self) -> f64 {
        self.curves.iter().map(|c| c.duration_minutes).sum()
    }
}

impl From<&Segmentation> for RunSummary {
    fn from(segmentation: &Segmentation) -> Self {
        Self {
            mode: segmentation.mode(),
            curves: segmentation.curves().iter().map(CurveSummary::from).collect(),
            rejected: segmentation.diagnostics().rejections.len(),
            stop_reason: segmentation.diagnostics().stop_reason,
            time_unit: segmentation.time_unit(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.curves.is_empty() {
            return writeln!(f, "No valid baking curves found");
        }

        let unit = self.time_unit.suffix();
        for curve in &self.curves {
            write!(f, "Curve {}:", curve.curve_number)?;
            if curve.origin == CurveOrigin::FullSeriesFallback {
                write!(f, " (full series)")?;
            }
            writeln!(f)?;
            writeln!(f, "  Duration: {:.1} minutes", curve.duration_minutes)?;
            writeln!(f, "  Samples: {}", curve.sample_count)?;
            writeln!(f, "  Max temperature: {:.1}°C", curve.max_core_temp)?;
            writeln!(
                f,
                "  Original timestamp range: {:.1}{unit} - {:.1}{unit}",
                curve.start_time, curve.end_time
            )?;
        }
        writeln!(f, "Total curves found: {}", self.curves.len())
    }
}
