// Reading source trait for sensor data ingestion
use crate::domain::reading::SensorData;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("data file '{}' not found", .0.display())]
    DataFileNotFound(PathBuf),

    #[error("failed to read '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("required column '{0}' is missing from the header")]
    MissingColumn(String),

    #[error("line {line}: '{value}' in column '{column}' is not a number")]
    MalformedField {
        line: u64,
        column: String,
        value: String,
    },

    #[error("{location}: {column} reading {value} is not finite")]
    NonFinite {
        location: String,
        column: String,
        value: f64,
    },
}

pub trait ReadingSource {
    /// Human-readable origin of the readings, shown before processing
    fn describe(&self) -> String;

    /// Load every parameter's series. Each known parameter is present,
    /// possibly with an empty series.
    fn load(&self) -> Result<SensorData, IngestError>;
}

/// Reject NaN and infinite readings
pub fn ensure_finite(value: f64, location: &str, column: &str) -> Result<f64, IngestError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IngestError::NonFinite {
            location: location.to_string(),
            column: column.to_string(),
            value,
        })
    }
}
