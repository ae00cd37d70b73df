//! Multi-Curve Segmentation Example
//!
//! Splits a long session containing several bakes into separate curves and
//! steps through them with a cursor.
//!
//! ## What You'll Learn
//!
//! - Running the multi-curve preset
//! - Printing the run summary
//! - Inspecting rejected candidates
//! - Navigating curves with `CurveCursor`
//! - Tuning thresholds through `SegmenterConfig`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_multi_curve
//! ```

use bakecurve_core::{ProbeState, Sample, Segmenter, SegmenterConfig, Series};

/// Append idle, heat and cool phases to `samples`
fn bake(samples: &mut Vec<Sample>, idle: usize, heat: usize, peak: f64, cool: usize) {
    let mut push = |temp: f64, state: ProbeState| {
        let timestamp = samples.len() as f64 * 5.0;
        samples.push(Sample::new(timestamp, temp).with_state(state));
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Bakecurve Multi-Curve Example ===\n");

    let mut samples = Vec::new();
    bake(&mut samples, 300, 300, 95.0, 300); // bread
    bake(&mut samples, 100, 200, 65.0, 200); // warmed, never baked
    bake(&mut samples, 100, 300, 90.0, 300); // rolls
    let series = Series::new(samples)?;

    let result = Segmenter::multi_curve().segment(&series);
    print!("{}", result.summary());

    println!("\nDiscarded candidates:");
    for rejected in &result.diagnostics().rejections {
        println!(
            "  samples {}..={}: {}",
            rejected.start_idx, rejected.end_idx, rejected.reason
        );
    }

    println!("\nStepping through curves:");
    let mut cursor = result.cursor();
    while let Some(curve) = cursor.current() {
        println!(
            "  Curve {} peaks at {:.1}°C, ended by {}",
            curve.curve_number, curve.max_core_temp, curve.end_reason
        );
        if cursor.next_curve().is_none() {
            break;
        }
    }

    // Only keep bakes that reached 92°C
    let strict = Segmenter::new(SegmenterConfig::multi_curve().with_min_peak_c(92.0))?;
    let strict_result = strict.segment(&series);
    println!(
        "\nWith min peak 92°C: {} curve(s), {} rejected",
        strict_result.count(),
        strict_result.diagnostics().rejections.len()
    );

    Ok(())
}
