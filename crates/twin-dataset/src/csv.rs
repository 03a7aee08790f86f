//! CSV dataset writer.
//!
//! Column order matches the trainer's reader:
//! `timestamp, hour_of_day, temperature, soil_moisture,
//! irrigation_decision, moisture_change_last_hour`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{DatasetResult, DatasetRow};

/// Writes the labeled series to a single CSV file.
pub struct DatasetCsvWriter {
    writer: Writer<File>,
    finished: bool,
}

impl DatasetCsvWriter {
    /// Open (or create) the file at `path` and write the header row.
    pub fn new(path: &Path) -> DatasetResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record([
            "timestamp",
            "hour_of_day",
            "temperature",
            "soil_moisture",
            "irrigation_decision",
            "moisture_change_last_hour",
        ])?;
        Ok(Self { writer, finished: false })
    }

    /// Append a batch of rows.
    ///
    /// Floats are written at full precision — rounding belongs to
    /// presentation boundaries, not training data.
    pub fn write_rows(&mut self, rows: &[DatasetRow]) -> DatasetResult<()> {
        for row in rows {
            self.writer.write_record(&[
                row.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                row.hour_of_day.to_string(),
                row.temperature.to_string(),
                row.soil_moisture.to_string(),
                row.irrigation_decision.to_string(),
                row.moisture_change_last_hour.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Flush and close.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> DatasetResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

/// Generate-and-write convenience: one call from the CLI binary.
pub fn write_dataset(path: &Path, rows: &[DatasetRow]) -> DatasetResult<()> {
    let mut writer = DatasetCsvWriter::new(path)?;
    writer.write_rows(rows)?;
    writer.finish()
}
