//! Pre-built recordings with known outcomes
//!
//! Each scenario names the number of curves the multi-curve preset must
//! find. The single-curve preset always returns exactly one curve.

use bakecurve_core::Series;

use super::generators::{flat, single_bake, two_bakes, RecordingBuilder, AMBIENT_C};

/// Recording plus expectation
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub series: Series,
    pub expected_curves: usize,
}

/// Every standard scenario
pub fn standard() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "single_bake",
            description: "One bake to 95°C with idle lead-in and cooling tail",
            series: single_bake(95.0).build(),
            expected_curves: 1,
        },
        Scenario {
            name: "two_bakes",
            description: "Two bakes separated by a short idle gap",
            series: two_bakes().build(),
            expected_curves: 2,
        },
        Scenario {
            name: "noisy_two_bakes",
            description: "Two bakes with ±0.3°C sensor noise",
            series: two_bakes().with_noise(0.3).build(),
            expected_curves: 2,
        },
        Scenario {
            name: "flat_idle",
            description: "Probe never inserted",
            series: flat(600).build(),
            expected_curves: 0,
        },
        Scenario {
            name: "lukewarm_then_hot",
            description: "A bake that never passes 80°C followed by a real one",
            series: single_bake(60.0)
                .idle(100, AMBIENT_C)
                .heat(300, 95.0)
                .cool(300, AMBIENT_C)
                .build(),
            expected_curves: 1,
        },
        Scenario {
            name: "unfinished_bake",
            description: "Recording stops while the product is still hot",
            series: RecordingBuilder::new()
                .idle(200, AMBIENT_C)
                .heat(300, 92.0)
                .hold(100)
                .build(),
            expected_curves: 1,
        },
        Scenario {
            name: "millisecond_timestamps",
            description: "Two bakes logged with millisecond timestamps",
            series: two_bakes().in_milliseconds().build(),
            expected_curves: 2,
        },
    ]
}
