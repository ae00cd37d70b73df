//! Single-Curve Extraction Example
//!
//! Locates the one bake in a probe recording, the way a quick-look tool
//! that shows "the" curve of a file would.
//!
//! ## What You'll Learn
//!
//! - Building a `Series` from samples
//! - Running the single-curve preset
//! - Reading the re-based curve data
//! - What happens when no bake can be found
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_single_curve
//! ```

use bakecurve_core::{CurveOrigin, ProbeState, Sample, SegmentResult, Segmenter, Series};

fn main() -> SegmentResult<()> {
    println!("=== Bakecurve Single-Curve Example ===\n");

    // 25 min recording: 5 min idle, 12.5 min heating to 96°C, cooling
    let mut samples = Vec::new();
    for i in 0..300 {
        let (temp, state) = match i {
            0..=59 => (24.0, ProbeState::NotInserted),
            60..=209 => (24.0 + (i - 59) as f64 * 0.48, ProbeState::Predicting),
            _ => (96.0 - (i - 209) as f64 * 0.6, ProbeState::NotInserted),
        };
        samples.push(Sample::new(i as f64 * 5.0, temp).with_state(state));
    }
    let series = Series::new(samples)?;
    println!(
        "Recording: {} samples over {:.1} minutes",
        series.len(),
        series.span_minutes()
    );

    let segmenter = Segmenter::single_curve();
    let curve = segmenter.extract_single(&series);

    println!("\nExtracted curve:");
    println!("  Samples {}..={} of the recording", curve.start_idx, curve.end_idx);
    println!("  Duration: {:.1} minutes", curve.duration_minutes);
    println!(
        "  Peak: {:.1}°C after {:.1} minutes",
        curve.max_core_temp,
        curve.minutes_to_peak()
    );
    println!("  Ended by: {}", curve.end_reason);

    println!("\nFirst minutes of the re-based curve:");
    for sample in curve.data.iter().step_by(12).take(5) {
        println!(
            "  t={:6.1}s ({:4.1} min)  core {:5.1}°C",
            sample.timestamp, sample.minutes_elapsed, sample.core_temperature
        );
    }

    // A recording without any bake still yields a curve in this mode
    let idle = Series::new((0..120).map(|i| Sample::new(i as f64 * 5.0, 21.0)).collect())?;
    let fallback = segmenter.extract_single(&idle);
    assert_eq!(fallback.origin, CurveOrigin::FullSeriesFallback);
    println!(
        "\nIdle recording: no bake found, whole series returned ({} samples)",
        fallback.sample_count
    );

    Ok(())
}
