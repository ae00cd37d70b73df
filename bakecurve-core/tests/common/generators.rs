//! Synthetic probe recordings
//!
//! A recording is assembled phase by phase. Temperatures move linearly
//! between phase targets; optional sensor noise comes from a small LCG so
//! every run is deterministic.

use bakecurve_core::constants::{MS_PER_SECOND, NOMINAL_SAMPLE_INTERVAL_S};
use bakecurve_core::{ProbeState, Sample, Series, TimeUnit};

/// Probe logging interval used by the generators (seconds)
pub const INTERVAL_S: f64 = NOMINAL_SAMPLE_INTERVAL_S;

/// Room temperature the recordings start from (°C)
pub const AMBIENT_C: f64 = 25.0;

/// Phase-by-phase recording builder
pub struct RecordingBuilder {
    samples: Vec<Sample>,
    temperature: f64,
    interval: f64,
    noise: f64,
    seed: u32,
    with_state: bool,
    time_unit: TimeUnit,
}

impl RecordingBuilder {
    /// Empty recording at ambient temperature, 5 s sampling
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            temperature: AMBIENT_C,
            interval: INTERVAL_S,
            noise: 0.0,
            seed: 42,
            with_state: true,
            time_unit: TimeUnit::Seconds,
        }
    }

    /// Add uniform noise of ±`amplitude` °C to every reading
    pub fn with_noise(mut self, amplitude: f64) -> Self {
        self.noise = amplitude;
        self
    }

    /// Drop the prediction state column
    pub fn without_state(mut self) -> Self {
        self.with_state = false;
        self
    }

    /// Log timestamps in milliseconds instead of seconds
    ///
    /// Samples already pushed are rescaled, so the call may come at any
    /// point in the chain.
    pub fn in_milliseconds(mut self) -> Self {
        if self.time_unit == TimeUnit::Seconds {
            for sample in &mut self.samples {
                sample.timestamp *= MS_PER_SECOND;
            }
        }
        self.time_unit = TimeUnit::Milliseconds;
        self
    }

    /// Probe out of the product at a constant temperature
    pub fn idle(mut self, samples: usize, temp: f64) -> Self {
        self.temperature = temp;
        for _ in 0..samples {
            self.push(ProbeState::NotInserted);
        }
        self
    }

    /// Linear heating to `peak` while the probe predicts
    pub fn heat(self, samples: usize, peak: f64) -> Self {
        self.ramp(samples, peak, ProbeState::Predicting)
    }

    /// Linear cooling to `temp` after removal
    pub fn cool(self, samples: usize, temp: f64) -> Self {
        self.ramp(samples, temp, ProbeState::NotInserted)
    }

    /// Constant temperature while the probe stays in
    pub fn hold(mut self, samples: usize) -> Self {
        for _ in 0..samples {
            self.push(ProbeState::Predicting);
        }
        self
    }

    /// Change at a constant rate (°C per minute), probe still in
    pub fn drift(mut self, samples: usize, c_per_min: f64) -> Self {
        let step = c_per_min * self.interval / 60.0;
        for _ in 0..samples {
            self.temperature += step;
            self.push(ProbeState::Predicting);
        }
        self
    }

    /// Raw samples
    pub fn samples(self) -> Vec<Sample> {
        self.samples
    }

    /// Validated series
    pub fn build(self) -> Series {
        let unit = self.time_unit;
        Series::with_unit(self.samples, unit).expect("generated recording is valid")
    }

    fn ramp(mut self, samples: usize, target: f64, state: ProbeState) -> Self {
        let from = self.temperature;
        for i in 1..=samples {
            self.temperature = from + (target - from) * i as f64 / samples as f64;
            self.push(state.clone());
        }
        self
    }

    fn push(&mut self, state: ProbeState) {
        let seconds = self.samples.len() as f64 * self.interval;
        let timestamp = match self.time_unit {
            TimeUnit::Seconds => seconds,
            TimeUnit::Milliseconds => seconds * MS_PER_SECOND,
        };
        let noise = if self.noise > 0.0 {
            self.random_noise(self.noise)
        } else {
            0.0
        };
        let mut sample = Sample::new(timestamp, self.temperature + noise);
        if self.with_state {
            sample = sample.with_state(state);
        }
        self.samples.push(sample);
    }

    fn random_noise(&mut self, amplitude: f64) -> f64 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = self.seed as f64 / u32::MAX as f64;
        (uniform - 0.5) * 2.0 * amplitude
    }
}

/// One bake: idle, heat to `peak`, cool back to ambient
pub fn single_bake(peak: f64) -> RecordingBuilder {
    RecordingBuilder::new()
        .idle(300, AMBIENT_C)
        .heat(300, peak)
        .cool(300, AMBIENT_C)
}

/// Two bakes to ~95°C and ~90°C separated by an idle gap
pub fn two_bakes() -> RecordingBuilder {
    single_bake(95.0)
        .idle(100, AMBIENT_C)
        .heat(300, 90.0)
        .cool(300, AMBIENT_C)
}

/// Flat 20°C recording with no bake in it
pub fn flat(samples: usize) -> RecordingBuilder {
    RecordingBuilder::new().idle(samples, 20.0)
}
