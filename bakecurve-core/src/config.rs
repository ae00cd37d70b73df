//! Segmenter configuration
//!
//! Every threshold the heuristics use is a field here, so tuning for a new
//! probe or product never touches control flow. Two presets exist because
//! the end-of-bake drop means different things in the two modes:
//!
//! | Field                   | single-curve | multi-curve |
//! |-------------------------|-------------:|------------:|
//! | `primary_drop_c`        | 5 °C         | 20 °C       |
//! | `fallback_drop_c`       | 10 °C        | 20 °C       |
//! | `rise_threshold_c`      | 5 °C         | 5 °C        |
//! | `min_cooling_rate`      | 1 °C/min     | 1 °C/min    |
//! | `min_duration_minutes`  | 5 min        | 5 min       |
//! | `min_peak_c`            | 80 °C        | 80 °C       |
//!
//! ```rust
//! use bakecurve_core::{SegmenterConfig, SegmentationMode};
//!
//! let config = SegmenterConfig::multi_curve()
//!     .with_min_peak_c(90.0)
//!     .with_rise_window(4, 5);
//! assert_eq!(config.mode, SegmentationMode::MultiCurve);
//! assert!(config.validate().is_ok());
//! ```

use crate::constants::thresholds::{
    BASELINE_WINDOW_SAMPLES, MAX_BASELINE_WINDOW_SAMPLES, MAX_RISE_LOOKAHEAD_SAMPLES,
    MIN_COOLING_RATE_C_PER_MIN, MIN_DURATION_MINUTES, MIN_PEAK_TEMP_C,
    MULTI_CURVE_FALLBACK_DROP_C, MULTI_CURVE_PRIMARY_DROP_C, RISE_LOOKAHEAD_SAMPLES,
    RISE_THRESHOLD_C, SINGLE_CURVE_FALLBACK_DROP_C, SINGLE_CURVE_PRIMARY_DROP_C,
};
use crate::errors::{ConfigError, ConfigResult};

/// How the caller consumes the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SegmentationMode {
    /// One curve per recording; a failed search falls back to the whole series
    SingleCurve,
    /// Every bake in the recording; failed candidates are discarded
    #[default]
    MultiCurve,
}

/// Thresholds and windows for one segmentation run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SegmenterConfig {
    /// Result consumption mode
    pub mode: SegmentationMode,

    /// Rise above baseline that marks a thermal start (°C)
    pub rise_threshold_c: f64,

    /// Samples after the candidate index searched for the rise
    pub rise_lookahead_samples: usize,

    /// Samples averaged into the local baseline
    pub baseline_window_samples: usize,

    /// Drop from peak that proposes an end (°C)
    pub primary_drop_c: f64,

    /// Drop from peak accepted without rate confirmation (°C)
    pub fallback_drop_c: f64,

    /// Cooling rate that confirms a primary drop (°C/min)
    pub min_cooling_rate_c_per_min: f64,

    /// A curve must last strictly longer than this (minutes)
    pub min_duration_minutes: f64,

    /// A curve must peak strictly above this (°C)
    pub min_peak_c: f64,

    /// Stop after this many accepted curves
    pub max_curves: Option<usize>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self::multi_curve()
    }
}

impl SegmenterConfig {
    /// Preset for locating one bake in a recording
    pub fn single_curve() -> Self {
        Self {
            mode: SegmentationMode::SingleCurve,
            primary_drop_c: SINGLE_CURVE_PRIMARY_DROP_C,
            fallback_drop_c: SINGLE_CURVE_FALLBACK_DROP_C,
            max_curves: Some(1),
            ..Self::shared()
        }
    }

    /// Preset for separating every bake in a recording
    pub fn multi_curve() -> Self {
        Self {
            mode: SegmentationMode::MultiCurve,
            primary_drop_c: MULTI_CURVE_PRIMARY_DROP_C,
            fallback_drop_c: MULTI_CURVE_FALLBACK_DROP_C,
            max_curves: None,
            ..Self::shared()
        }
    }

    /// Preset for `mode`
    pub fn for_mode(mode: SegmentationMode) -> Self {
        match mode {
            SegmentationMode::SingleCurve => Self::single_curve(),
            SegmentationMode::MultiCurve => Self::multi_curve(),
        }
    }

    fn shared() -> Self {
        Self {
            mode: SegmentationMode::MultiCurve,
            rise_threshold_c: RISE_THRESHOLD_C,
            rise_lookahead_samples: RISE_LOOKAHEAD_SAMPLES,
            baseline_window_samples: BASELINE_WINDOW_SAMPLES,
            primary_drop_c: MULTI_CURVE_PRIMARY_DROP_C,
            fallback_drop_c: MULTI_CURVE_FALLBACK_DROP_C,
            min_cooling_rate_c_per_min: MIN_COOLING_RATE_C_PER_MIN,
            min_duration_minutes: MIN_DURATION_MINUTES,
            min_peak_c: MIN_PEAK_TEMP_C,
            max_curves: None,
        }
    }

    /// Set the thermal-rise threshold
    pub fn with_rise_threshold_c(mut self, threshold: f64) -> Self {
        self.rise_threshold_c = threshold;
        self
    }

    /// Set baseline window and look-ahead, in samples
    pub fn with_rise_window(mut self, baseline_samples: usize, lookahead_samples: usize) -> Self {
        self.baseline_window_samples = baseline_samples;
        self.rise_lookahead_samples = lookahead_samples;
        self
    }

    /// Set primary and fallback drop thresholds
    pub fn with_drops(mut self, primary_c: f64, fallback_c: f64) -> Self {
        self.primary_drop_c = primary_c;
        self.fallback_drop_c = fallback_c;
        self
    }

    /// Set the confirming cooling rate
    pub fn with_min_cooling_rate(mut self, c_per_min: f64) -> Self {
        self.min_cooling_rate_c_per_min = c_per_min;
        self
    }

    /// Set the minimum duration
    pub fn with_min_duration_minutes(mut self, minutes: f64) -> Self {
        self.min_duration_minutes = minutes;
        self
    }

    /// Set the minimum peak
    pub fn with_min_peak_c(mut self, celsius: f64) -> Self {
        self.min_peak_c = celsius;
        self
    }

    /// Limit the number of accepted curves
    pub fn with_max_curves(mut self, max: Option<usize>) -> Self {
        self.max_curves = max;
        self
    }

    /// Check every field
    pub fn validate(&self) -> ConfigResult<()> {
        positive("rise_threshold_c", self.rise_threshold_c)?;
        positive("primary_drop_c", self.primary_drop_c)?;
        positive("fallback_drop_c", self.fallback_drop_c)?;
        positive("min_cooling_rate_c_per_min", self.min_cooling_rate_c_per_min)?;
        positive("min_duration_minutes", self.min_duration_minutes)?;
        // Any finite peak is allowed, including zero or below
        if !self.min_peak_c.is_finite() {
            return Err(ConfigError::InvalidThreshold {
                name: "min_peak_c",
                value: self.min_peak_c,
            });
        }

        if self.fallback_drop_c < self.primary_drop_c {
            return Err(ConfigError::FallbackTighterThanPrimary {
                primary: self.primary_drop_c,
                fallback: self.fallback_drop_c,
            });
        }

        window(
            "baseline_window_samples",
            self.baseline_window_samples,
            MAX_BASELINE_WINDOW_SAMPLES,
        )?;
        window(
            "rise_lookahead_samples",
            self.rise_lookahead_samples,
            MAX_RISE_LOOKAHEAD_SAMPLES,
        )?;

        if self.max_curves == Some(0) {
            return Err(ConfigError::ZeroMaxCurves);
        }
        Ok(())
    }

    /// Parse a JSON configuration; missing fields take multi-curve defaults
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        use alloc::string::ToString;

        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> ConfigResult<alloc::string::String> {
        use alloc::string::ToString;

        serde_json::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

fn positive(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

fn window(name: &'static str, value: usize, max: usize) -> ConfigResult<()> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::WindowOutOfRange {
            name,
            value,
            min: 1,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(SegmenterConfig::single_curve().validate().is_ok());
        assert!(SegmenterConfig::multi_curve().validate().is_ok());
    }

    #[test]
    fn presets_keep_distinct_drops() {
        let single = SegmenterConfig::single_curve();
        let multi = SegmenterConfig::multi_curve();
        assert_eq!(single.primary_drop_c, 5.0);
        assert_eq!(single.fallback_drop_c, 10.0);
        assert_eq!(multi.primary_drop_c, 20.0);
        assert_eq!(multi.fallback_drop_c, 20.0);
        assert_eq!(single.max_curves, Some(1));
        assert_eq!(multi.max_curves, None);
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let config = SegmenterConfig::multi_curve().with_rise_threshold_c(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { name: "rise_threshold_c", .. })
        ));

        let config = SegmenterConfig::multi_curve().with_min_cooling_rate(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_tight_fallback() {
        let config = SegmenterConfig::single_curve().with_drops(10.0, 5.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::FallbackTighterThanPrimary {
                primary: 10.0,
                fallback: 5.0
            })
        );
    }

    #[test]
    fn rejects_window_out_of_range() {
        let config = SegmenterConfig::multi_curve().with_rise_window(0, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WindowOutOfRange { name: "baseline_window_samples", .. })
        ));
        let config = SegmenterConfig::multi_curve().with_rise_window(3, 10_000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_max_curves() {
        let config = SegmenterConfig::multi_curve().with_max_curves(Some(0));
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxCurves));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_overrides_defaults() {
        let config = SegmenterConfig::from_json(
            r#"{ "mode": "single_curve", "primary_drop_c": 8.0, "fallback_drop_c": 12.0 }"#,
        )
        .unwrap();
        assert_eq!(config.mode, SegmentationMode::SingleCurve);
        assert_eq!(config.primary_drop_c, 8.0);
        assert_eq!(config.min_peak_c, 80.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_is_validated() {
        let err = SegmenterConfig::from_json(r#"{ "primary_drop_c": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold { .. }));

        let err = SegmenterConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip_keeps_preset() {
        let single = SegmenterConfig::single_curve();
        let json = single.to_json().unwrap();
        assert_eq!(SegmenterConfig::from_json(&json).unwrap(), single);
    }
}
