//! Boundary detectors
//!
//! - [`start`]: earliest-of ensemble over the state-transition and
//!   thermal-rise signals
//! - [`end`]: running-peak drop detector with cooling-rate confirmation

pub mod end;
pub mod start;

pub use end::{EndDetector, EndHit, EndOutcome, EndReason, Peak};
pub use start::{
    SignalHit, StartDetector, StartHit, StateTransitionSignal, ThermalRiseSignal,
    MAX_START_SIGNALS,
};
