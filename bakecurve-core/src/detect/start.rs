//! Start detection
//!
//! Two independent signals propose where a bake begins:
//!
//! - **State transition**: the probe firmware switches from "not inserted"
//!   to an active state. Precise when present, but only some exports carry
//!   the column and firmware sometimes lags the physical insertion.
//! - **Thermal rise**: the core reading climbs more than `rise_threshold_c`
//!   above the mean of the last few samples within a short look-ahead.
//!
//! When both fire, the earlier index wins so no leading ambient samples of
//! the real bake are cut off.

use heapless::Vec as BoundedVec;

use crate::buffer::RollingWindow;
use crate::config::SegmenterConfig;
use crate::constants::thresholds::{MAX_BASELINE_WINDOW_SAMPLES, MAX_RISE_LOOKAHEAD_SAMPLES};
use crate::series::Series;
use crate::state::is_start_transition;
use crate::traits::{SignalKind, StartSignal};

/// Number of signals a [`StartDetector`] evaluates
pub const MAX_START_SIGNALS: usize = 2;

/// Idle-to-active prediction state change
#[derive(Debug, Clone, Copy, Default)]
pub struct StateTransitionSignal;

impl StartSignal for StateTransitionSignal {
    fn kind(&self) -> SignalKind {
        SignalKind::StateTransition
    }

    fn is_available(&self, series: &Series) -> bool {
        series.has_state_column()
    }

    /// First `j` with `j - 1 >= from_idx`, `state[j-1]` idle and `state[j]` active
    fn first_fire(&self, series: &Series, from_idx: usize) -> Option<usize> {
        if !self.is_available(series) {
            return None;
        }
        (from_idx + 1..series.len())
            .find(|&j| is_start_transition(series.state(j - 1), series.state(j)))
    }
}

/// Core temperature rising above a rolling baseline
#[derive(Debug, Clone, Copy)]
pub struct ThermalRiseSignal {
    threshold_c: f64,
    baseline_samples: usize,
    lookahead_samples: usize,
}

impl ThermalRiseSignal {
    /// Signal with explicit threshold and window sizes
    ///
    /// `baseline_samples` is clamped to the rolling window capacity and
    /// `lookahead_samples` to `1..=MAX_RISE_LOOKAHEAD_SAMPLES`.
    pub fn new(threshold_c: f64, baseline_samples: usize, lookahead_samples: usize) -> Self {
        Self {
            threshold_c,
            baseline_samples: baseline_samples.clamp(1, MAX_BASELINE_WINDOW_SAMPLES),
            lookahead_samples: lookahead_samples.clamp(1, MAX_RISE_LOOKAHEAD_SAMPLES),
        }
    }

    /// Signal configured from `config`
    pub fn from_config(config: &SegmenterConfig) -> Self {
        Self::new(
            config.rise_threshold_c,
            config.baseline_window_samples,
            config.rise_lookahead_samples,
        )
    }

    /// Largest reading in `(j, j + lookahead]`, clipped to the series
    fn lookahead_max(&self, series: &Series, j: usize) -> Option<f64> {
        let last = j.saturating_add(self.lookahead_samples).min(series.last_index());
        (j + 1..=last).map(|k| series.core(k)).reduce(f64::max)
    }
}

impl StartSignal for ThermalRiseSignal {
    fn kind(&self) -> SignalKind {
        SignalKind::ThermalRise
    }

    fn first_fire(&self, series: &Series, from_idx: usize) -> Option<usize> {
        let mut baseline: RollingWindow<MAX_BASELINE_WINDOW_SAMPLES> =
            RollingWindow::with_limit(self.baseline_samples);

        for j in from_idx..series.last_index() {
            baseline.push(series.core(j));
            let (Some(mean), Some(ahead)) = (baseline.mean(), self.lookahead_max(series, j)) else {
                continue;
            };
            if ahead - mean > self.threshold_c {
                return Some(j);
            }
        }
        None
    }
}

/// One signal's proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalHit {
    /// Which signal fired
    pub kind: SignalKind,
    /// Where it fired
    pub index: usize,
}

/// Resolved start boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartHit {
    /// Earliest proposed index
    pub index: usize,
    /// Every signal that fired, in evaluation order
    pub hits: BoundedVec<SignalHit, MAX_START_SIGNALS>,
}

impl StartHit {
    /// Signal that produced the resolved index (first on ties)
    pub fn triggered_by(&self) -> Option<SignalKind> {
        self.hits
            .iter()
            .find(|hit| hit.index == self.index)
            .map(|hit| hit.kind)
    }

    /// True when `kind` fired anywhere in the range
    pub fn fired(&self, kind: SignalKind) -> bool {
        self.hits.iter().any(|hit| hit.kind == kind)
    }
}

/// Earliest-of ensemble over the state and thermal signals
#[derive(Debug, Clone, Copy)]
pub struct StartDetector {
    state: StateTransitionSignal,
    thermal: ThermalRiseSignal,
}

impl StartDetector {
    /// Detector configured from `config`
    pub fn from_config(config: &SegmenterConfig) -> Self {
        Self {
            state: StateTransitionSignal,
            thermal: ThermalRiseSignal::from_config(config),
        }
    }

    /// Detector with an explicit thermal signal
    pub fn new(thermal: ThermalRiseSignal) -> Self {
        Self {
            state: StateTransitionSignal,
            thermal,
        }
    }

    /// Earliest start at or after `from_idx`, or `None` when no signal fires
    pub fn detect(&self, series: &Series, from_idx: usize) -> Option<StartHit> {
        if from_idx >= series.len() {
            return None;
        }

        let signals: [&dyn StartSignal; MAX_START_SIGNALS] = [&self.state, &self.thermal];
        let mut hits: BoundedVec<SignalHit, MAX_START_SIGNALS> = BoundedVec::new();
        for signal in signals {
            if !signal.is_available(series) {
                continue;
            }
            if let Some(index) = signal.first_fire(series, from_idx) {
                // Capacity equals the signal count, push cannot fail
                let _ = hits.push(SignalHit {
                    kind: signal.kind(),
                    index,
                });
            }
        }

        let index = hits.iter().map(|hit| hit.index).min()?;
        log_debug!(
            "start at {} (from {}, signals: {:?})",
            index,
            from_idx,
            hits.as_slice()
        );
        Some(StartHit { index, hits })
    }
}
