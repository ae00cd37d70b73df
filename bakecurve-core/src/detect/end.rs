//! End detection
//!
//! After a start, the detector tracks the running peak of the core
//! temperature. A bake is over once the reading has fallen more than
//! `primary_drop_c` below that peak *and* the fall is fast enough to be real
//! cooling rather than a plateau wobble. A larger `fallback_drop_c` ends the
//! bake without the rate check, so slow cooling still terminates.
//!
//! ```text
//!  temp
//!   │        peak
//!   │       ╭──╮
//!   │      ╱    ╲  ← drop > primary, rate > min → CoolingConfirmed
//!   │     ╱      ╲___
//!   │    ╱           ╲___ ← drop > fallback     → FallbackDrop
//!   │───╯
//!   └──────────────────────────── time
//! ```

use core::fmt;

use crate::config::SegmenterConfig;
use crate::series::Series;
use crate::time::Timestamp;

/// Why a curve ended where it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EndReason {
    /// Primary drop exceeded at a cooling rate above the minimum
    CoolingConfirmed,
    /// Fallback drop exceeded, rate not confirmed
    FallbackDrop,
    /// The series ran out before any drop criterion held
    EndOfData,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EndReason::CoolingConfirmed => "cooling confirmed",
            EndReason::FallbackDrop => "fallback drop",
            EndReason::EndOfData => "end of data",
        };
        f.write_str(text)
    }
}

/// Running maximum of the core temperature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Sample index (earliest on ties)
    pub index: usize,
    /// Core temperature at `index`
    pub temperature: f64,
    /// Timestamp at `index`
    pub timestamp: Timestamp,
}

impl Peak {
    fn at(series: &Series, index: usize) -> Self {
        Self {
            index,
            temperature: series.core(index),
            timestamp: series.timestamp(index),
        }
    }
}

/// Located end boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndHit {
    /// Index of the first sample satisfying a drop criterion
    pub index: usize,
    /// Peak the drop is measured from
    pub peak: Peak,
    /// Fall below the peak at `index` (°C)
    pub drop_c: f64,
    /// Average cooling rate from the peak to `index` (°C/min)
    pub cooling_rate_c_per_min: f64,
    /// Which criterion held
    pub reason: EndReason,
}

/// Result of an end search
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndOutcome {
    /// A drop criterion held
    Found(EndHit),
    /// The series ended first; `peak` is the maximum seen after the start
    Exhausted {
        /// Running peak at end of data
        peak: Peak,
    },
}

/// Peak-tracking drop detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndDetector {
    primary_drop_c: f64,
    fallback_drop_c: f64,
    min_cooling_rate_c_per_min: f64,
}

impl EndDetector {
    /// Detector with explicit thresholds
    pub fn new(primary_drop_c: f64, fallback_drop_c: f64, min_cooling_rate_c_per_min: f64) -> Self {
        Self {
            primary_drop_c,
            fallback_drop_c,
            min_cooling_rate_c_per_min,
        }
    }

    /// Detector configured from `config`
    pub fn from_config(config: &SegmenterConfig) -> Self {
        Self::new(
            config.primary_drop_c,
            config.fallback_drop_c,
            config.min_cooling_rate_c_per_min,
        )
    }

    /// First index after `start_idx` where the bake has ended
    ///
    /// A new maximum resets the peak, so a temporary dip followed by further
    /// heating is measured against the higher peak. Zero elapsed time between
    /// peak and candidate counts as an infinite cooling rate.
    pub fn detect(&self, series: &Series, start_idx: usize) -> EndOutcome {
        let start_idx = start_idx.min(series.last_index());
        let mut peak = Peak::at(series, start_idx);

        for j in start_idx + 1..series.len() {
            let temp = series.core(j);
            if temp > peak.temperature {
                peak = Peak::at(series, j);
                continue;
            }

            let drop_c = peak.temperature - temp;
            if drop_c <= self.primary_drop_c {
                continue;
            }

            let minutes = series.minutes_between(peak.index, j);
            let rate = if minutes > 0.0 {
                drop_c / minutes
            } else {
                f64::INFINITY
            };

            let reason = if rate > self.min_cooling_rate_c_per_min {
                EndReason::CoolingConfirmed
            } else if drop_c > self.fallback_drop_c {
                EndReason::FallbackDrop
            } else {
                continue;
            };

            log_debug!(
                "end at {} ({}): peak {:.1}°C at {}, drop {:.1}°C, rate {:.2}°C/min",
                j,
                reason,
                peak.temperature,
                peak.index,
                drop_c,
                rate
            );
            return EndOutcome::Found(EndHit {
                index: j,
                peak,
                drop_c,
                cooling_rate_c_per_min: rate,
                reason,
            });
        }

        EndOutcome::Exhausted { peak }
    }
}
