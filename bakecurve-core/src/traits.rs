//! Core traits for boundary detection
//!
//! Each start signal is an independent predicate over the series. The
//! [`StartDetector`](crate::StartDetector) runs every signal it holds and
//! keeps the earliest hit, so a new signal is added by implementing
//! [`StartSignal`] without touching the driver.

use crate::series::Series;

/// Which start signal fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalKind {
    /// Prediction state left "not inserted" for an active state
    StateTransition,
    /// Core temperature rose above the local baseline
    ThermalRise,
}

impl SignalKind {
    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            SignalKind::StateTransition => "state transition",
            SignalKind::ThermalRise => "thermal rise",
        }
    }
}

/// Independent start predicate
pub trait StartSignal {
    /// Identifies the signal in diagnostics
    fn kind(&self) -> SignalKind;

    /// True when the signal can fire on this series at all
    ///
    /// A state-based signal is unavailable when the series carries no
    /// prediction states; the detector then skips it.
    fn is_available(&self, series: &Series) -> bool {
        let _ = series;
        true
    }

    /// Earliest index `>= from_idx` where the signal fires
    fn first_fire(&self, series: &Series, from_idx: usize) -> Option<usize>;
}

/// Trait for values that can be scanned
pub trait Scannable {
    /// Check the value is a usable reading (not NaN or infinite)
    fn is_usable(&self) -> bool;
}

impl Scannable for f64 {
    fn is_usable(&self) -> bool {
        self.is_finite()
    }
}
