//! Extracted baking curves
//!
//! A [`Curve`] owns a re-based copy of its samples: the first timestamp is
//! zero and every sample carries the elapsed minutes since the curve start.
//! Original indices and timestamps are kept alongside so a caller can map a
//! curve back onto the recording.

use alloc::vec::Vec;

use crate::detect::EndReason;
use crate::series::Series;
use crate::state::ProbeState;
use crate::time::Timestamp;
use crate::validate::ValidatedSegment;

/// How the curve was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CurveOrigin {
    /// Located by the start/end detectors and passed validation
    Detected,
    /// Single-curve mode found nothing valid; the whole series is the curve
    FullSeriesFallback,
}

/// One re-based sample of a curve
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSample {
    /// Time since the curve start, in the series' unit
    pub timestamp: Timestamp,
    /// Minutes since the curve start
    pub minutes_elapsed: f64,
    /// Core temperature (°C)
    pub core_temperature: f64,
    /// Prediction state, when recorded
    pub prediction_state: Option<ProbeState>,
    /// Virtual surface temperature (°C)
    pub surface_temperature: Option<f64>,
    /// Virtual ambient temperature (°C)
    pub ambient_temperature: Option<f64>,
}

/// An extracted baking curve
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    /// Re-based samples, first timestamp zero
    pub data: Vec<CurveSample>,
    /// First sample in the original series
    pub start_idx: usize,
    /// Last sample in the original series, inclusive
    pub end_idx: usize,
    /// Original timestamp of the first sample
    pub start_time: Timestamp,
    /// Original timestamp of the last sample
    pub end_time: Timestamp,
    /// Elapsed minutes from first to last sample
    pub duration_minutes: f64,
    /// Highest core temperature (°C)
    pub max_core_temp: f64,
    /// Original index of the highest core temperature
    pub peak_idx: usize,
    /// Original timestamp of the highest core temperature
    pub peak_time: Timestamp,
    /// 1-based position in discovery order
    pub curve_number: usize,
    /// Number of samples in `data`
    pub sample_count: usize,
    /// Which end criterion closed the curve
    pub end_reason: EndReason,
    /// Detected or full-series fallback
    pub origin: CurveOrigin,
}

impl Curve {
    /// Build a detected curve from a validated segment
    pub fn from_segment(
        series: &Series,
        segment: &ValidatedSegment,
        curve_number: usize,
        end_reason: EndReason,
    ) -> Self {
        Self::extract(
            series,
            segment.start_idx,
            segment.end_idx,
            (segment.peak_idx, segment.peak_c),
            curve_number,
            end_reason,
            CurveOrigin::Detected,
        )
    }

    /// The whole series as curve 1
    pub fn full_series(series: &Series) -> Self {
        let last = series.last_index();
        let peak = series
            .peak_in(0..=last)
            .unwrap_or((0, series.core(0)));
        Self::extract(
            series,
            0,
            last,
            peak,
            1,
            EndReason::EndOfData,
            CurveOrigin::FullSeriesFallback,
        )
    }

    fn extract(
        series: &Series,
        start_idx: usize,
        end_idx: usize,
        (peak_idx, max_core_temp): (usize, f64),
        curve_number: usize,
        end_reason: EndReason,
        origin: CurveOrigin,
    ) -> Self {
        let unit = series.time_unit();
        let start_time = series.timestamp(start_idx);
        let end_time = series.timestamp(end_idx);

        let data: Vec<CurveSample> = series.samples()[start_idx..=end_idx]
            .iter()
            .map(|sample| {
                let timestamp = sample.timestamp - start_time;
                CurveSample {
                    timestamp,
                    minutes_elapsed: unit.to_minutes(timestamp),
                    core_temperature: sample.core_temperature,
                    prediction_state: sample.prediction_state.clone(),
                    surface_temperature: sample.surface_temperature,
                    ambient_temperature: sample.ambient_temperature,
                }
            })
            .collect();

        Self {
            sample_count: data.len(),
            data,
            start_idx,
            end_idx,
            start_time,
            end_time,
            duration_minutes: unit.minutes_between(start_time, end_time),
            max_core_temp,
            peak_idx,
            peak_time: series.timestamp(peak_idx),
            curve_number,
            end_reason,
            origin,
        }
    }

    /// True for a curve located by the detectors
    pub fn is_detected(&self) -> bool {
        self.origin == CurveOrigin::Detected
    }

    /// Core temperatures in order
    pub fn core_temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().map(|s| s.core_temperature)
    }

    /// Minutes from curve start to the peak
    pub fn minutes_to_peak(&self) -> f64 {
        self.peak_idx
            .checked_sub(self.start_idx)
            .and_then(|offset| self.data.get(offset))
            .map_or(0.0, |s| s.minutes_elapsed)
    }
}
