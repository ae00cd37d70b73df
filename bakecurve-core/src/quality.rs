//! Advisory data-quality checks
//!
//! [`inspect`] looks for problems that do not stop segmentation but make its
//! output less trustworthy: readings no probe could produce, gaps or jitter
//! in the logging interval, repeated timestamps and a missing prediction
//! state column. It never fails; callers decide what to do with the issues.

use alloc::vec::Vec;
use core::fmt;

use crate::constants::quality::{PLAUSIBLE_MAX_C, PLAUSIBLE_MIN_C};
use crate::constants::time::SAMPLE_INTERVAL_TOLERANCE;
use crate::series::Series;
use crate::time::Timestamp;

/// One finding of [`inspect`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SeriesIssue {
    /// Core readings outside the plausible range
    ImplausibleTemperature {
        /// First offending sample
        first_index: usize,
        /// Number of offending samples
        count: usize,
        /// Lowest reading in the series (°C)
        min_c: f64,
        /// Highest reading in the series (°C)
        max_c: f64,
    },
    /// Intervals deviating from the first interval beyond tolerance
    IrregularSampling {
        /// First sample whose preceding interval deviates
        first_index: usize,
        /// Number of deviating intervals
        count: usize,
        /// Reference interval, in the series' unit
        expected: Timestamp,
    },
    /// Consecutive samples sharing a timestamp
    DuplicateTimestamp {
        /// First repeated sample
        first_index: usize,
        /// Number of repeats
        count: usize,
    },
    /// No prediction state at all; start detection is thermal-only
    MissingStateColumn,
}

impl fmt::Display for SeriesIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesIssue::ImplausibleTemperature {
                first_index,
                count,
                min_c,
                max_c,
            } => write!(
                f,
                "{count} core readings outside {PLAUSIBLE_MIN_C}..{PLAUSIBLE_MAX_C}°C \
                 (first at {first_index}, range {min_c:.1}..{max_c:.1}°C)"
            ),
            SeriesIssue::IrregularSampling {
                first_index,
                count,
                expected,
            } => write!(
                f,
                "{count} sampling intervals deviate from {expected} (first at {first_index})"
            ),
            SeriesIssue::DuplicateTimestamp { first_index, count } => {
                write!(f, "{count} duplicate timestamps (first at {first_index})")
            }
            SeriesIssue::MissingStateColumn => {
                f.write_str("no prediction state column; thermal-rise detection only")
            }
        }
    }
}

#[derive(Default)]
struct Tally {
    first_index: Option<usize>,
    count: usize,
}

impl Tally {
    fn hit(&mut self, index: usize) {
        self.first_index.get_or_insert(index);
        self.count += 1;
    }
}

/// Check `series` for advisory issues
pub fn inspect(series: &Series) -> Vec<SeriesIssue> {
    let mut issues = Vec::new();

    let mut implausible = Tally::default();
    let (mut min_c, mut max_c) = (f64::INFINITY, f64::NEG_INFINITY);
    for (index, sample) in series.samples().iter().enumerate() {
        let temp = sample.core_temperature;
        min_c = min_c.min(temp);
        max_c = max_c.max(temp);
        if !(PLAUSIBLE_MIN_C..=PLAUSIBLE_MAX_C).contains(&temp) {
            implausible.hit(index);
        }
    }
    if let Some(first_index) = implausible.first_index {
        issues.push(SeriesIssue::ImplausibleTemperature {
            first_index,
            count: implausible.count,
            min_c,
            max_c,
        });
    }

    let expected = (1..series.len())
        .map(|i| series.timestamp(i) - series.timestamp(i - 1))
        .find(|interval| *interval > 0.0);
    let mut irregular = Tally::default();
    let mut duplicates = Tally::default();
    for i in 1..series.len() {
        let interval = series.timestamp(i) - series.timestamp(i - 1);
        if interval == 0.0 {
            duplicates.hit(i);
            continue;
        }
        if let Some(expected) = expected {
            if libm::fabs(interval - expected) > expected * SAMPLE_INTERVAL_TOLERANCE {
                irregular.hit(i);
            }
        }
    }
    if let (Some(first_index), Some(expected)) = (irregular.first_index, expected) {
        issues.push(SeriesIssue::IrregularSampling {
            first_index,
            count: irregular.count,
            expected,
        });
    }
    if let Some(first_index) = duplicates.first_index {
        issues.push(SeriesIssue::DuplicateTimestamp {
            first_index,
            count: duplicates.count,
        });
    }

    if !series.has_state_column() {
        issues.push(SeriesIssue::MissingStateColumn);
    }

    #[cfg(feature = "log")]
    for issue in &issues {
        log_warn!("data quality: {}", issue);
    }
    issues
}
