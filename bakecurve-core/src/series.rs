//! Probe samples and the validated series the engine scans
//!
//! A [`Series`] can only be built through [`Series::new`] (or
//! [`Series::from_frame`](crate::frame)), which rejects malformed input up
//! front: empty input, non-finite core temperatures and timestamps that go
//! backwards. Once built it is immutable; detectors only ever read index
//! ranges from it.

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::errors::{SegmentError, SegmentResult};
use crate::state::ProbeState;
use crate::time::{TimeUnit, Timestamp};
use crate::traits::Scannable;

/// One row of a probe recording
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Time since recording start, in the series' [`TimeUnit`]
    pub timestamp: Timestamp,

    /// Core temperature (°C), the primary signal
    pub core_temperature: f64,

    /// Firmware prediction state, when the export carries one
    pub prediction_state: Option<ProbeState>,

    /// Virtual surface temperature (°C), passed through untouched
    pub surface_temperature: Option<f64>,

    /// Virtual ambient temperature (°C), passed through untouched
    pub ambient_temperature: Option<f64>,
}

impl Sample {
    /// Sample with only the required channels
    pub fn new(timestamp: Timestamp, core_temperature: f64) -> Self {
        Self {
            timestamp,
            core_temperature,
            prediction_state: None,
            surface_temperature: None,
            ambient_temperature: None,
        }
    }

    /// Attach a prediction state
    pub fn with_state(mut self, state: impl Into<ProbeState>) -> Self {
        self.prediction_state = Some(state.into());
        self
    }

    /// Attach virtual surface and ambient temperatures
    pub fn with_virtual_temps(mut self, surface: Option<f64>, ambient: Option<f64>) -> Self {
        self.surface_temperature = surface;
        self.ambient_temperature = ambient;
        self
    }
}

/// Validated, immutable probe recording
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
    time_unit: TimeUnit,
    has_state: bool,
}

impl Series {
    /// Build a series with timestamps in seconds
    pub fn new(samples: Vec<Sample>) -> SegmentResult<Self> {
        Self::with_unit(samples, TimeUnit::Seconds)
    }

    /// Build a series with timestamps in `time_unit`
    ///
    /// # Errors
    ///
    /// - [`SegmentError::EmptySeries`] when `samples` is empty
    /// - [`SegmentError::NonFiniteTemperature`] on a NaN/infinite core reading
    /// - [`SegmentError::NonMonotonicTimestamp`] when a timestamp is not finite
    ///   or smaller than its predecessor
    pub fn with_unit(samples: Vec<Sample>, time_unit: TimeUnit) -> SegmentResult<Self> {
        if samples.is_empty() {
            return Err(SegmentError::EmptySeries);
        }

        let mut previous: Option<Timestamp> = None;
        for (index, sample) in samples.iter().enumerate() {
            if !sample.core_temperature.is_usable() {
                return Err(SegmentError::NonFiniteTemperature {
                    index,
                    value: sample.core_temperature,
                });
            }
            let ts = sample.timestamp;
            let prev = previous.unwrap_or(ts);
            if !ts.is_finite() || ts < prev {
                return Err(SegmentError::NonMonotonicTimestamp {
                    index,
                    timestamp: ts,
                    previous: prev,
                });
            }
            previous = Some(ts);
        }

        let has_state = samples.iter().any(|s| s.prediction_state.is_some());

        Ok(Self {
            samples,
            time_unit,
            has_state,
        })
    }

    /// Number of samples (always at least one)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Index of the final sample
    pub fn last_index(&self) -> usize {
        self.samples.len() - 1
    }

    /// All samples in order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Sample at `index`
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Core temperature at `index`. Panics when out of range.
    #[inline]
    pub fn core(&self, index: usize) -> f64 {
        self.samples[index].core_temperature
    }

    /// Timestamp at `index`. Panics when out of range.
    #[inline]
    pub fn timestamp(&self, index: usize) -> Timestamp {
        self.samples[index].timestamp
    }

    /// Prediction state at `index`, if recorded
    #[inline]
    pub fn state(&self, index: usize) -> Option<&ProbeState> {
        self.samples.get(index).and_then(|s| s.prediction_state.as_ref())
    }

    /// True when at least one sample carries a prediction state
    pub fn has_state_column(&self) -> bool {
        self.has_state
    }

    /// Unit of the timestamp column
    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// Minutes elapsed between samples `from` and `to`
    pub fn minutes_between(&self, from: usize, to: usize) -> f64 {
        self.time_unit
            .minutes_between(self.timestamp(from), self.timestamp(to))
    }

    /// Index and value of the highest core temperature in `range`
    ///
    /// Ties resolve to the earliest index. Returns `None` for an empty or
    /// out-of-bounds range.
    pub fn peak_in(&self, range: RangeInclusive<usize>) -> Option<(usize, f64)> {
        let (start, end) = (*range.start(), *range.end());
        if start > end || end >= self.samples.len() {
            return None;
        }
        let mut peak = (start, self.core(start));
        for idx in start + 1..=end {
            let temp = self.core(idx);
            if temp > peak.1 {
                peak = (idx, temp);
            }
        }
        Some(peak)
    }

    /// Duration of the whole recording in minutes
    pub fn span_minutes(&self) -> f64 {
        self.minutes_between(0, self.last_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn ramp(n: usize) -> Vec<Sample> {
        (0..n)
            .map(|i| Sample::new(i as f64 * 5.0, 20.0 + i as f64))
            .collect()
    }

    #[test]
    fn builds_valid_series() {
        let series = Series::new(ramp(10)).unwrap();
        assert_eq!(series.len(), 10);
        assert_eq!(series.last_index(), 9);
        assert!(!series.has_state_column());
        assert_eq!(series.core(3), 23.0);
        assert_eq!(series.minutes_between(0, 6), 0.5);
        assert_eq!(series.span_minutes(), 0.75);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Series::new(Vec::new()), Err(SegmentError::EmptySeries));
    }

    #[test]
    fn rejects_nan_core() {
        let mut samples = ramp(5);
        samples[2].core_temperature = f64::NAN;
        let err = Series::new(samples).unwrap_err();
        assert!(matches!(err, SegmentError::NonFiniteTemperature { index: 2, .. }));
    }

    #[test]
    fn rejects_backwards_time() {
        let mut samples = ramp(5);
        samples[3].timestamp = 1.0;
        let err = Series::new(samples).unwrap_err();
        assert!(matches!(err, SegmentError::NonMonotonicTimestamp { index: 3, .. }));
    }

    #[test]
    fn detects_state_column() {
        let samples = vec![
            Sample::new(0.0, 20.0),
            Sample::new(5.0, 20.0).with_state("Probe Inserted"),
        ];
        let series = Series::new(samples).unwrap();
        assert!(series.has_state_column());
        assert_eq!(series.state(0), None);
        assert_eq!(series.state(1), Some(&ProbeState::Inserted));
    }

    #[test]
    fn peak_prefers_earliest_tie() {
        let samples = vec![
            Sample::new(0.0, 20.0),
            Sample::new(5.0, 90.0),
            Sample::new(10.0, 90.0),
            Sample::new(15.0, 40.0),
        ];
        let series = Series::new(samples).unwrap();
        assert_eq!(series.peak_in(0..=3), Some((1, 90.0)));
        assert_eq!(series.peak_in(2..=3), Some((2, 90.0)));
        assert_eq!(series.peak_in(3..=9), None);
    }
}
