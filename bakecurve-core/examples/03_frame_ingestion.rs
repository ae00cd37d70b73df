//! Frame Ingestion Example
//!
//! Feeds the engine from a table of named columns, as produced by whatever
//! reads the probe export, and checks the data before segmenting.
//!
//! ## What You'll Learn
//!
//! - Building a `Frame` with nullable columns
//! - Column-name fallbacks for the core temperature
//! - Advisory quality checks with `inspect`
//! - Handling malformed input errors
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_frame_ingestion
//! ```

use bakecurve_core::{inspect, Column, ColumnNames, Frame, SegmentError, Segmenter, Series};

fn main() -> Result<(), SegmentError> {
    println!("=== Bakecurve Frame Ingestion Example ===\n");

    let rows = 700;
    let mut timestamps = Vec::with_capacity(rows);
    let mut core = Vec::with_capacity(rows);
    let mut ambient = Vec::with_capacity(rows);
    let mut states = Vec::with_capacity(rows);
    for i in 0..rows {
        let (temp, state) = match i {
            0..=99 => (23.0, "Probe Not Inserted"),
            100..=399 => (23.0 + (i - 99) as f64 * 0.24, "Predicting"),
            _ => (95.0 - (i - 399) as f64 * 0.2, "Removal Prediction Done"),
        };
        timestamps.push(Some(i as f64 * 5.0));
        core.push(Some(temp));
        // The oven sensor drops out for a while; optional columns may be null
        ambient.push(if (200..260).contains(&i) { None } else { Some(180.0) });
        states.push(Some(state.to_string()));
    }

    // Older exports only carry `CoreAverage`; it is found through the
    // default fallback names
    let frame = Frame::new()
        .with_column("Timestamp", Column::Numeric(timestamps))
        .with_column("CoreAverage", Column::Numeric(core))
        .with_column("VirtualAmbientTemperature", Column::Numeric(ambient))
        .with_column("PredictionState", Column::Text(states));

    let series = Series::from_frame(&frame, &ColumnNames::default())?;
    println!("Loaded {} samples", series.len());

    let issues = inspect(&series);
    if issues.is_empty() {
        println!("No data quality issues");
    }
    for issue in &issues {
        println!("Quality: {issue}");
    }

    let result = Segmenter::multi_curve().segment(&series);
    print!("\n{}", result.summary());

    // A frame without any core temperature column is rejected up front
    let broken = Frame::new().with_column("Timestamp", Column::Numeric(vec![Some(0.0)]));
    match Series::from_frame(&broken, &ColumnNames::default()) {
        Err(err) => println!("\nRejected frame: {err}"),
        Ok(_) => println!("\nUnexpectedly accepted frame"),
    }

    Ok(())
}
