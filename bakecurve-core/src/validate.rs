//! Segment validation gate
//!
//! A candidate `(start, end)` pair becomes a curve only if it spans strictly
//! more than `min_duration_minutes` and peaks strictly above `min_peak_c`.
//! Duration comes from the timestamps, so it stays correct when the probe
//! drops samples.

use core::fmt;

use crate::config::SegmenterConfig;
use crate::series::Series;

/// Why a candidate was discarded
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rejection {
    /// `end_idx` is not after `start_idx` (or out of range)
    Degenerate,
    /// Duration not above the minimum
    TooShort {
        /// Measured duration (minutes)
        duration_minutes: f64,
        /// Configured minimum (minutes)
        min_minutes: f64,
    },
    /// Peak not above the minimum
    PeakTooLow {
        /// Highest core temperature in the candidate (°C)
        peak_c: f64,
        /// Configured minimum (°C)
        min_peak_c: f64,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Degenerate => f.write_str("degenerate range"),
            Rejection::TooShort {
                duration_minutes,
                min_minutes,
            } => write!(f, "too short ({duration_minutes:.1} <= {min_minutes:.1} min)"),
            Rejection::PeakTooLow { peak_c, min_peak_c } => {
                write!(f, "peak too low ({peak_c:.1} <= {min_peak_c:.1}°C)")
            }
        }
    }
}

/// Candidate that passed the gate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedSegment {
    /// First sample (original index)
    pub start_idx: usize,
    /// Last sample, inclusive (original index)
    pub end_idx: usize,
    /// Elapsed minutes between the boundary timestamps
    pub duration_minutes: f64,
    /// Index of the highest core temperature (earliest on ties)
    pub peak_idx: usize,
    /// Highest core temperature (°C)
    pub peak_c: f64,
}

/// Duration and peak gate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentValidator {
    min_duration_minutes: f64,
    min_peak_c: f64,
}

impl SegmentValidator {
    /// Validator with explicit limits
    pub fn new(min_duration_minutes: f64, min_peak_c: f64) -> Self {
        Self {
            min_duration_minutes,
            min_peak_c,
        }
    }

    /// Validator configured from `config`
    pub fn from_config(config: &SegmenterConfig) -> Self {
        Self::new(config.min_duration_minutes, config.min_peak_c)
    }

    /// Check the candidate `start_idx..=end_idx`
    ///
    /// Duration is checked before the peak, so a short low candidate reports
    /// [`Rejection::TooShort`].
    pub fn validate(
        &self,
        series: &Series,
        start_idx: usize,
        end_idx: usize,
    ) -> Result<ValidatedSegment, Rejection> {
        if end_idx <= start_idx || end_idx >= series.len() {
            return Err(Rejection::Degenerate);
        }

        let duration_minutes = series.minutes_between(start_idx, end_idx);
        if duration_minutes <= self.min_duration_minutes {
            return Err(Rejection::TooShort {
                duration_minutes,
                min_minutes: self.min_duration_minutes,
            });
        }

        let (peak_idx, peak_c) = series
            .peak_in(start_idx..=end_idx)
            .ok_or(Rejection::Degenerate)?;
        if peak_c <= self.min_peak_c {
            return Err(Rejection::PeakTooLow {
                peak_c,
                min_peak_c: self.min_peak_c,
            });
        }

        Ok(ValidatedSegment {
            start_idx,
            end_idx,
            duration_minutes,
            peak_idx,
            peak_c,
        })
    }
}
