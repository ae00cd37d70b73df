//! Common test utilities for integration tests
//!
//! This module provides:
//! - Synthetic probe recordings built from idle/heat/cool phases
//! - Named scenarios with their expected curve counts
//! - Assertion helpers for the segmentation invariants

#![allow(dead_code)]

pub mod generators;
pub mod scenarios;

use bakecurve_core::{Curve, Segmentation, SegmenterConfig, Series};

/// Assert every invariant a segmentation result must hold
pub fn assert_invariants(series: &Series, config: &SegmenterConfig, result: &Segmentation) {
    let curves = result.curves();

    for (i, curve) in curves.iter().enumerate() {
        assert_eq!(curve.curve_number, i + 1, "curves are numbered in order");
        assert!(curve.start_idx <= curve.end_idx);
        assert!(curve.end_idx < series.len());
        assert_rebased(series, curve);

        if curve.is_detected() {
            assert!(
                curve.duration_minutes > config.min_duration_minutes,
                "curve {} lasts {:.2} min",
                curve.curve_number,
                curve.duration_minutes
            );
            assert!(
                curve.max_core_temp > config.min_peak_c,
                "curve {} peaks at {:.1}°C",
                curve.curve_number,
                curve.max_core_temp
            );
        }
    }

    for pair in curves.windows(2) {
        assert!(
            pair[0].end_idx <= pair[1].start_idx,
            "curve {} overlaps curve {}",
            pair[0].curve_number,
            pair[1].curve_number
        );
    }

    let offsets = &result.diagnostics().offsets;
    assert!(
        offsets.windows(2).all(|w| w[0] < w[1]),
        "scan offsets must strictly increase: {offsets:?}"
    );
}

/// Assert a curve is a re-based copy of its original range
pub fn assert_rebased(series: &Series, curve: &Curve) {
    assert_eq!(curve.sample_count, curve.end_idx - curve.start_idx + 1);
    assert_eq!(curve.data.len(), curve.sample_count);
    assert_eq!(curve.data[0].timestamp, 0.0);
    assert_eq!(curve.start_time, series.timestamp(curve.start_idx));

    for (offset, sample) in curve.data.iter().enumerate() {
        let original = series.timestamp(curve.start_idx + offset);
        assert!((sample.timestamp - (original - curve.start_time)).abs() < 1e-9);
        assert_eq!(sample.core_temperature, series.core(curve.start_idx + offset));
    }
}
