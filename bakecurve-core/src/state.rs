//! Probe prediction state vocabulary
//!
//! The probe firmware labels every sample with a prediction state. Only two
//! facts matter to segmentation: whether a state means the probe is idle
//! (not inserted) and whether it means a bake is under way. Everything else,
//! including values this crate does not recognise, is neutral and never
//! forms a start transition.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Prediction state reported by the probe
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProbeState {
    /// "Probe Not Inserted"
    NotInserted,
    /// "Probe Inserted"
    Inserted,
    /// "Warming"
    Warming,
    /// "Predicting"
    Predicting,
    /// "Cooking" (older firmware and hand-labelled logs)
    Cooking,
    /// "Removal Prediction Done"
    RemovalPredictionDone,
    /// Anything else, kept verbatim
    Other(String),
}

impl ProbeState {
    /// Idle: probe is out of the product
    pub fn is_idle(&self) -> bool {
        matches!(self, ProbeState::NotInserted)
    }

    /// Active: probe is in the product and the bake is under way
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ProbeState::Inserted | ProbeState::Warming | ProbeState::Predicting | ProbeState::Cooking
        )
    }

    /// Label as written by the probe export
    pub fn label(&self) -> &str {
        match self {
            ProbeState::NotInserted => "Probe Not Inserted",
            ProbeState::Inserted => "Probe Inserted",
            ProbeState::Warming => "Warming",
            ProbeState::Predicting => "Predicting",
            ProbeState::Cooking => "Cooking",
            ProbeState::RemovalPredictionDone => "Removal Prediction Done",
            ProbeState::Other(raw) => raw.as_str(),
        }
    }
}

impl FromStr for ProbeState {
    type Err = core::convert::Infallible;

    /// Never fails; unknown labels become [`ProbeState::Other`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let state = match trimmed.to_ascii_lowercase().as_str() {
            "probe not inserted" | "not inserted" | "idle" => ProbeState::NotInserted,
            "probe inserted" | "inserted" => ProbeState::Inserted,
            "warming" => ProbeState::Warming,
            "predicting" => ProbeState::Predicting,
            "cooking" => ProbeState::Cooking,
            "removal prediction done" => ProbeState::RemovalPredictionDone,
            _ => ProbeState::Other(trimmed.to_string()),
        };
        Ok(state)
    }
}

impl From<&str> for ProbeState {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(state) => state,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ProbeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// True when `previous -> current` is an idle-to-active transition
pub fn is_start_transition(previous: Option<&ProbeState>, current: Option<&ProbeState>) -> bool {
    match (previous, current) {
        (Some(prev), Some(cur)) => prev.is_idle() && cur.is_active(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_probe_labels() {
        assert_eq!(ProbeState::from("Probe Not Inserted"), ProbeState::NotInserted);
        assert_eq!(ProbeState::from(" probe inserted "), ProbeState::Inserted);
        assert_eq!(ProbeState::from("Cooking"), ProbeState::Cooking);
        assert_eq!(
            ProbeState::from("Instant Read"),
            ProbeState::Other("Instant Read".to_string())
        );
    }

    #[test]
    fn idle_and_active_are_disjoint() {
        let all = [
            ProbeState::NotInserted,
            ProbeState::Inserted,
            ProbeState::Warming,
            ProbeState::Predicting,
            ProbeState::Cooking,
            ProbeState::RemovalPredictionDone,
            ProbeState::Other("x".to_string()),
        ];
        for state in &all {
            assert!(!(state.is_idle() && state.is_active()), "{state}");
        }
    }

    #[test]
    fn transition_requires_both_states() {
        let idle = ProbeState::NotInserted;
        let active = ProbeState::Predicting;
        assert!(is_start_transition(Some(&idle), Some(&active)));
        assert!(!is_start_transition(None, Some(&active)));
        assert!(!is_start_transition(Some(&idle), None));
        assert!(!is_start_transition(Some(&active), Some(&active)));
        // Removal is neither idle nor active
        assert!(!is_start_transition(
            Some(&ProbeState::RemovalPredictionDone),
            Some(&active)
        ));
    }
}
