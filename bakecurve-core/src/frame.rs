//! Column-table ingestion
//!
//! Whatever reads the probe export (CSV reader, dataframe library, database
//! query) hands the engine a [`Frame`]: named columns of nullable cells. This
//! module turns one into a [`Series`], resolving column names and rejecting
//! malformed required columns.
//!
//! Probe exports changed column names over firmware releases, so the core
//! temperature is looked up through an ordered list of candidates.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::errors::{SegmentError, SegmentResult};
use crate::series::{Sample, Series};
use crate::state::ProbeState;
use crate::time::TimeUnit;

/// One column of cells
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric cells; `None` is a null cell
    Numeric(Vec<Option<f64>>),
    /// Text cells; `None` is a null cell
    Text(Vec<Option<String>>),
}

impl Column {
    /// Row count
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(cells) => cells.len(),
            Column::Text(cells) => cells.len(),
        }
    }

    /// True when the column has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named columns, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<(String, Column)>,
}

impl Frame {
    /// Empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a column
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        self.insert(name, column);
        self
    }

    /// Add (or replace) a column in place
    pub fn insert(&mut self, name: impl Into<String>, column: Column) {
        let name = name.into();
        if let Some(slot) = self.columns.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = column;
        } else {
            self.columns.push((name, column));
        }
    }

    /// Column by exact name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, column)| column)
    }

    /// Column names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }
}

/// Column names used to build a [`Series`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnNames {
    /// Timestamp column
    pub timestamp: String,
    /// Core temperature candidates, first match wins
    pub core_temperature: Vec<String>,
    /// Prediction state column (optional in the frame)
    pub prediction_state: String,
    /// Virtual surface temperature column (optional in the frame)
    pub surface_temperature: String,
    /// Virtual ambient temperature column (optional in the frame)
    pub ambient_temperature: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            timestamp: "Timestamp".to_string(),
            core_temperature: vec![
                "VirtualCoreTemperature".to_string(),
                "CoreTemperature".to_string(),
                "CoreAverage".to_string(),
            ],
            prediction_state: "PredictionState".to_string(),
            surface_temperature: "VirtualSurfaceTemperature".to_string(),
            ambient_temperature: "VirtualAmbientTemperature".to_string(),
        }
    }
}

impl Series {
    /// Build a series from a frame with timestamps in seconds
    pub fn from_frame(frame: &Frame, names: &ColumnNames) -> SegmentResult<Self> {
        Self::from_frame_with_unit(frame, names, TimeUnit::Seconds)
    }

    /// Build a series from a frame
    ///
    /// Timestamp and core temperature are required, numeric and null-free.
    /// The optional columns may be absent. An optional column of the wrong
    /// kind (numeric states, text temperatures) is ignored like an absent one,
    /// so detection degrades to the thermal signal instead of failing.
    pub fn from_frame_with_unit(
        frame: &Frame,
        names: &ColumnNames,
        time_unit: TimeUnit,
    ) -> SegmentResult<Self> {
        let timestamps = required_numeric(frame, &names.timestamp)?;
        let rows = timestamps.len();

        let core_name = names
            .core_temperature
            .iter()
            .find(|name| frame.column(name).is_some())
            .ok_or_else(|| SegmentError::MissingColumn {
                name: names.core_temperature.join(" | "),
            })?;
        let core = required_numeric(frame, core_name)?;
        check_len(core_name, rows, core.len())?;

        let states = match frame.column(&names.prediction_state) {
            None => None,
            Some(Column::Text(cells)) => {
                check_len(&names.prediction_state, rows, cells.len())?;
                Some(cells)
            }
            Some(Column::Numeric(_)) => None,
        };
        let surface = optional_numeric(frame, &names.surface_temperature, rows)?;
        let ambient = optional_numeric(frame, &names.ambient_temperature, rows)?;

        let mut samples = Vec::with_capacity(rows);
        for index in 0..rows {
            let timestamp = timestamps[index].ok_or_else(|| SegmentError::MissingValue {
                column: names.timestamp.clone(),
                index,
            })?;
            let core_temperature = core[index].ok_or_else(|| SegmentError::MissingValue {
                column: core_name.clone(),
                index,
            })?;
            let mut sample = Sample::new(timestamp, core_temperature);
            sample.prediction_state = states
                .and_then(|cells| cells[index].as_deref())
                .map(ProbeState::from);
            sample.surface_temperature = surface.and_then(|cells| cells[index]);
            sample.ambient_temperature = ambient.and_then(|cells| cells[index]);
            samples.push(sample);
        }

        Series::with_unit(samples, time_unit)
    }
}

fn required_numeric<'a>(frame: &'a Frame, name: &str) -> SegmentResult<&'a [Option<f64>]> {
    match frame.column(name) {
        Some(Column::Numeric(cells)) => Ok(cells.as_slice()),
        Some(Column::Text(_)) => Err(SegmentError::NonNumericColumn {
            name: name.to_string(),
        }),
        None => Err(SegmentError::MissingColumn {
            name: name.to_string(),
        }),
    }
}

fn optional_numeric<'a>(
    frame: &'a Frame,
    name: &str,
    rows: usize,
) -> SegmentResult<Option<&'a [Option<f64>]>> {
    match frame.column(name) {
        Some(Column::Numeric(cells)) => {
            check_len(name, rows, cells.len())?;
            Ok(Some(cells.as_slice()))
        }
        _ => Ok(None),
    }
}

fn check_len(column: &str, expected: usize, found: usize) -> SegmentResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(SegmentError::LengthMismatch {
            column: column.to_string(),
            expected,
            found,
        })
    }
}
