//! Iterative curve segmentation
//!
//! ## Scan
//!
//! The [`Segmenter`] walks the series as a two-state machine:
//!
//! ```text
//!            ┌────────────────────────┐  no start   ┌──────┐
//!   offset ─▶│ SearchingStart{offset} │────────────▶│ done │
//!            └───────────┬────────────┘             └──────┘
//!                        │ start                        ▲
//!                        ▼                              │ exhausted / limit
//!            ┌────────────────────────┐  validate  ┌────┴────┐
//!            │ SearchingEnd{start}    │───────────▶│ advance │
//!            └────────────────────────┘            └────┬────┘
//!                        ▲                              │
//!                        └──────── next offset ─────────┘
//! ```
//!
//! An accepted curve moves the offset to its end index (a new bake may start
//! on the sample where the previous one ended); a rejected candidate moves it
//! one past the end. Both are strictly after the previous offset, so the scan
//! always terminates.
//!
//! ## Modes
//!
//! - **Multi-curve**: every accepted curve is returned; rejected candidates
//!   only show up in [`ScanDiagnostics`].
//! - **Single-curve**: the first accepted curve is returned. When nothing
//!   passes, the whole series becomes the curve
//!   ([`CurveOrigin::FullSeriesFallback`](crate::CurveOrigin)).
//!
//! ```rust
//! use bakecurve_core::{Sample, Segmenter, Series};
//!
//! // Flat 20°C for ten minutes: no bake in it
//! let samples = (0..120).map(|i| Sample::new(i as f64 * 5.0, 20.0)).collect();
//! let series = Series::new(samples).unwrap();
//!
//! assert_eq!(Segmenter::multi_curve().segment(&series).count(), 0);
//!
//! let fallback = Segmenter::single_curve().extract_single(&series);
//! assert_eq!((fallback.start_idx, fallback.end_idx), (0, 119));
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::config::{SegmentationMode, SegmenterConfig};
use crate::curve::Curve;
use crate::detect::{EndDetector, EndOutcome, EndReason, StartDetector};
use crate::errors::ConfigResult;
use crate::series::Series;
use crate::summary::RunSummary;
use crate::time::TimeUnit;
use crate::validate::{Rejection, SegmentValidator};

/// Why the scan stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopReason {
    /// No start signal fired in the remaining tail
    #[default]
    NoStartSignal,
    /// The last candidate reached the end of the series
    SeriesExhausted,
    /// `max_curves` curves were accepted
    CurveLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::NoStartSignal => "no further start signal",
            StopReason::SeriesExhausted => "series exhausted",
            StopReason::CurveLimit => "curve limit reached",
        })
    }
}

/// A candidate that failed validation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RejectedCandidate {
    /// Proposed start (original index)
    pub start_idx: usize,
    /// Proposed end (original index)
    pub end_idx: usize,
    /// Failed check
    pub reason: Rejection,
}

/// What the scan did, for callers that need to explain an empty result
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanDiagnostics {
    /// Start searches performed
    pub iterations: usize,
    /// Offset of every start search, strictly increasing
    pub offsets: Vec<usize>,
    /// Candidates discarded by validation
    pub rejections: Vec<RejectedCandidate>,
    /// Why the scan ended
    pub stop_reason: StopReason,
    /// Free-form remarks (missing state column, fallback used)
    pub notes: Vec<String>,
}

/// Result of a segmentation run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segmentation {
    curves: Vec<Curve>,
    diagnostics: ScanDiagnostics,
    mode: SegmentationMode,
    time_unit: TimeUnit,
}

impl Segmentation {
    /// Number of curves
    pub fn count(&self) -> usize {
        self.curves.len()
    }

    /// True when no curve was found
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Curve by 1-based number
    pub fn curve(&self, number: usize) -> Option<&Curve> {
        number.checked_sub(1).and_then(|idx| self.curves.get(idx))
    }

    /// First curve
    pub fn first(&self) -> Option<&Curve> {
        self.curves.first()
    }

    /// All curves in discovery order
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Take ownership of the curves
    pub fn into_curves(self) -> Vec<Curve> {
        self.curves
    }

    /// Scan diagnostics
    pub fn diagnostics(&self) -> &ScanDiagnostics {
        &self.diagnostics
    }

    /// Mode the run used
    pub fn mode(&self) -> SegmentationMode {
        self.mode
    }

    /// Timestamp unit of the segmented series
    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// Printable report
    pub fn summary(&self) -> RunSummary {
        RunSummary::from(self)
    }
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    SearchingStart { offset: usize },
    SearchingEnd { offset: usize, start: usize },
}

/// Baking curve segmenter
///
/// Stateless across calls: every call takes the series by reference and
/// returns owned curves, so one segmenter can be shared between threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
    start: StartDetector,
    end: EndDetector,
    validator: SegmentValidator,
}

impl Segmenter {
    /// Segmenter for a validated configuration
    pub fn new(config: SegmenterConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Single-curve preset
    pub fn single_curve() -> Self {
        Self::build(SegmenterConfig::single_curve())
    }

    /// Multi-curve preset
    pub fn multi_curve() -> Self {
        Self::build(SegmenterConfig::multi_curve())
    }

    /// Preset for `mode`
    pub fn for_mode(mode: SegmentationMode) -> Self {
        Self::build(SegmenterConfig::for_mode(mode))
    }

    fn build(config: SegmenterConfig) -> Self {
        Self {
            start: StartDetector::from_config(&config),
            end: EndDetector::from_config(&config),
            validator: SegmentValidator::from_config(&config),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment `series` according to the configured mode
    pub fn segment(&self, series: &Series) -> Segmentation {
        let (mut curves, mut diagnostics) = self.scan(series, self.config.max_curves);

        if self.config.mode == SegmentationMode::SingleCurve && curves.is_empty() {
            log_warn!("no valid baking curve found, using the full series");
            diagnostics
                .notes
                .push(String::from("no valid curve; full series used as curve 1"));
            curves.push(Curve::full_series(series));
        } else if curves.is_empty() {
            log_warn!("no valid baking curves found ({})", diagnostics.stop_reason);
            diagnostics.notes.push(format!(
                "no valid baking curves found: {}, {} candidate(s) rejected",
                diagnostics.stop_reason,
                diagnostics.rejections.len()
            ));
        }

        let segmentation = Segmentation {
            curves,
            diagnostics,
            mode: self.config.mode,
            time_unit: series.time_unit(),
        };
        log_info!(
            "segmentation finished ({}, {} rejected):\n{}",
            segmentation.diagnostics.stop_reason,
            segmentation.diagnostics.rejections.len(),
            segmentation.summary()
        );
        segmentation
    }

    /// First valid curve, or the whole series when none passes
    ///
    /// Runs independently of the configured mode and curve limit.
    pub fn extract_single(&self, series: &Series) -> Curve {
        let (curves, _) = self.scan(series, Some(1));
        match curves.into_iter().next() {
            Some(curve) => curve,
            None => {
                log_warn!("no valid baking curve found, using the full series");
                Curve::full_series(series)
            }
        }
    }

    fn scan(&self, series: &Series, limit: Option<usize>) -> (Vec<Curve>, ScanDiagnostics) {
        let mut curves: Vec<Curve> = Vec::new();
        let mut diagnostics = ScanDiagnostics::default();

        if !series.has_state_column() {
            log_debug!("series has no prediction state; thermal-rise detection only");
            diagnostics
                .notes
                .push(String::from("no prediction state column; thermal-rise detection only"));
        }

        let mut state = ScanState::SearchingStart { offset: 0 };
        loop {
            match state {
                ScanState::SearchingStart { offset } => {
                    diagnostics.iterations += 1;
                    diagnostics.offsets.push(offset);

                    match self.start.detect(series, offset) {
                        Some(hit) => {
                            state = ScanState::SearchingEnd {
                                offset,
                                start: hit.index,
                            };
                        }
                        None => {
                            log_debug!("no start signal at or after {}", offset);
                            if curves.is_empty() {
                                diagnostics
                                    .notes
                                    .push(format!("no start signal at or after index {offset}"));
                            }
                            diagnostics.stop_reason = StopReason::NoStartSignal;
                            break;
                        }
                    }
                }

                ScanState::SearchingEnd { offset, start } => {
                    let (end_idx, reason, exhausted) = match self.end.detect(series, start) {
                        EndOutcome::Found(hit) => (hit.index, hit.reason, false),
                        EndOutcome::Exhausted { .. } => {
                            (series.last_index(), EndReason::EndOfData, true)
                        }
                    };

                    let next = match self.validator.validate(series, start, end_idx) {
                        Ok(segment) => {
                            let curve =
                                Curve::from_segment(series, &segment, curves.len() + 1, reason);
                            log_info!(
                                "curve {}: samples {}..={}, {:.1} min, peak {:.1}°C ({})",
                                curve.curve_number,
                                curve.start_idx,
                                curve.end_idx,
                                curve.duration_minutes,
                                curve.max_core_temp,
                                reason
                            );
                            curves.push(curve);

                            if limit.is_some_and(|max| curves.len() >= max) {
                                diagnostics.stop_reason = StopReason::CurveLimit;
                                break;
                            }
                            end_idx
                        }
                        Err(rejection) => {
                            log_debug!(
                                "candidate {}..={} rejected: {}",
                                start,
                                end_idx,
                                rejection
                            );
                            diagnostics.rejections.push(RejectedCandidate {
                                start_idx: start,
                                end_idx,
                                reason: rejection,
                            });
                            end_idx + 1
                        }
                    };

                    if exhausted || next >= series.len() {
                        diagnostics.stop_reason = StopReason::SeriesExhausted;
                        break;
                    }

                    debug_assert!(next > offset, "scan offset must advance");
                    state = ScanState::SearchingStart { offset: next };
                }
            }
        }

        (curves, diagnostics)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::multi_curve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveOrigin;
    use crate::series::Sample;
    use crate::state::ProbeState;

    /// Ambient, heat to `peak`, fast cool back to ambient; 5 s sampling
    fn bake(samples: &mut Vec<Sample>, idle: usize, heat: usize, cool: usize, peak: f64) {
        let mut push = |temp: f64, state: ProbeState| {
            let t = samples.len() as f64 * 5.0;
            samples.push(Sample::new(t, temp).with_state(state));
        };
        for _ in 0..idle {
            push(25.0, ProbeState::NotInserted);
        }
        for i in 1..=heat {
            push(25.0 + (peak - 25.0) * i as f64 / heat as f64, ProbeState::Predicting);
        }
        for i in 1..=cool {
            push(peak - (peak - 25.0) * i as f64 / cool as f64, ProbeState::NotInserted);
        }
    }

    fn two_bakes() -> Series {
        let mut samples = Vec::new();
        bake(&mut samples, 300, 300, 300, 95.0);
        bake(&mut samples, 100, 300, 300, 90.0);
        Series::new(samples).unwrap()
    }

    #[test]
    fn separates_two_bakes() {
        let result = Segmenter::multi_curve().segment(&two_bakes());
        assert_eq!(result.count(), 2);

        let first = result.curve(1).unwrap();
        let second = result.curve(2).unwrap();
        assert_eq!(first.curve_number, 1);
        assert_eq!(second.curve_number, 2);
        assert!(first.end_idx <= second.start_idx);
        assert!((first.max_core_temp - 95.0).abs() < 1e-9);
        assert!((second.max_core_temp - 90.0).abs() < 1e-9);
        assert_eq!(first.end_reason, EndReason::CoolingConfirmed);
        assert!(result.curve(0).is_none());
        assert!(result.curve(3).is_none());
    }

    #[test]
    fn offsets_strictly_increase() {
        let result = Segmenter::multi_curve().segment(&two_bakes());
        let offsets = &result.diagnostics().offsets;
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(offsets[0], 0);
    }

    #[test]
    fn single_curve_stops_after_first() {
        let result = Segmenter::single_curve().segment(&two_bakes());
        assert_eq!(result.count(), 1);
        assert_eq!(result.diagnostics().stop_reason, StopReason::CurveLimit);
        assert!(result.first().unwrap().is_detected());
    }

    #[test]
    fn flat_series_single_curve_falls_back() {
        let samples = (0..240).map(|i| Sample::new(i as f64 * 5.0, 20.0)).collect();
        let series = Series::new(samples).unwrap();

        let result = Segmenter::single_curve().segment(&series);
        assert_eq!(result.count(), 1);
        let curve = result.first().unwrap();
        assert_eq!(curve.origin, CurveOrigin::FullSeriesFallback);
        assert_eq!((curve.start_idx, curve.end_idx), (0, 239));

        let multi = Segmenter::multi_curve().segment(&series);
        assert!(multi.is_empty());
        assert_eq!(multi.diagnostics().stop_reason, StopReason::NoStartSignal);
        assert!(!multi.diagnostics().notes.is_empty());
    }

    #[test]
    fn cool_bake_is_rejected_and_skipped() {
        let mut samples = Vec::new();
        bake(&mut samples, 100, 200, 200, 60.0);
        bake(&mut samples, 100, 300, 300, 95.0);
        let series = Series::new(samples).unwrap();

        let result = Segmenter::multi_curve().segment(&series);
        assert_eq!(result.count(), 1);
        assert_eq!(result.first().unwrap().curve_number, 1);
        assert!((result.first().unwrap().max_core_temp - 95.0).abs() < 1e-9);
        assert!(matches!(
            result.diagnostics().rejections[0].reason,
            Rejection::PeakTooLow { .. }
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SegmenterConfig::multi_curve().with_drops(30.0, 10.0);
        assert!(Segmenter::new(config).is_err());
    }

    #[test]
    fn for_mode_matches_presets() {
        let single = Segmenter::for_mode(SegmentationMode::SingleCurve);
        let multi = Segmenter::for_mode(SegmentationMode::MultiCurve);
        assert_eq!(single.config(), Segmenter::single_curve().config());
        assert_eq!(multi.config(), Segmenter::multi_curve().config());
        assert_eq!(single.config().max_curves, Some(1));
        assert_eq!(multi.config().max_curves, None);
    }

    #[test]
    fn rejected_tail_leaves_a_note() {
        // Warmed to 60°C and never cooled: the exhausted tail fails the peak gate
        let mut samples = Vec::new();
        bake(&mut samples, 100, 200, 0, 60.0);
        for _ in 0..100 {
            let t = samples.len() as f64 * 5.0;
            samples.push(Sample::new(t, 60.0).with_state(ProbeState::Predicting));
        }
        let series = Series::new(samples).unwrap();

        let result = Segmenter::multi_curve().segment(&series);
        assert!(result.is_empty());
        let diagnostics = result.diagnostics();
        assert_eq!(diagnostics.stop_reason, StopReason::SeriesExhausted);
        assert_eq!(diagnostics.rejections.len(), 1);
        assert_eq!(diagnostics.notes.len(), 1);
        assert!(diagnostics.notes[0].contains("1 candidate(s) rejected"));
    }

    #[test]
    fn segmenter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Segmenter>();
        assert_send_sync::<Segmentation>();
    }
}
