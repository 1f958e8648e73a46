// CSV reading source: timestamp,temperature,humidity,pressure
use crate::application::reading_source::{ensure_finite, IngestError, ReadingSource};
use crate::domain::reading::{Parameter, SensorData, TimeSeries};
use csv::StringRecord;
use std::path::PathBuf;

const TIMESTAMP_COLUMN: &str = "timestamp";

#[derive(Debug, Clone)]
pub struct CsvReadingSource {
    path: PathBuf,
}

impl CsvReadingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn csv_error(&self, source: csv::Error) -> IngestError {
        IngestError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

impl ReadingSource for CsvReadingSource {
    fn describe(&self) -> String {
        format!("Reading CSV: {}", self.path.display())
    }

    fn load(&self) -> Result<SensorData, IngestError> {
        if !self.path.is_file() {
            return Err(IngestError::DataFileNotFound(self.path.clone()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;

        let headers = reader.headers().map_err(|e| self.csv_error(e))?.clone();
        let timestamp_idx = column_index(&headers, TIMESTAMP_COLUMN)?;
        let columns = Parameter::ALL
            .into_iter()
            .map(|p| column_index(&headers, p.name()).map(|idx| (p, idx)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut data = SensorData::new();
        for parameter in Parameter::ALL {
            data.insert_series(parameter, TimeSeries::new());
        }

        for result in reader.records() {
            let record = result.map_err(|e| self.csv_error(e))?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let timestamp = record.get(timestamp_idx).unwrap_or_default();

            for (parameter, idx) in &columns {
                let raw = record.get(*idx).unwrap_or_default();
                let value = parse_reading(raw, parameter.name(), line)?;
                data.record(*parameter, timestamp, value);
            }
        }

        tracing::debug!(
            "Loaded {} timestamps from {}",
            data.series(Parameter::Temperature).map(TimeSeries::len).unwrap_or(0),
            self.path.display()
        );

        Ok(data)
    }
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, IngestError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| IngestError::MissingColumn(column.to_string()))
}

fn parse_reading(raw: &str, column: &str, line: u64) -> Result<f64, IngestError> {
    let value = raw.parse::<f64>().map_err(|_| IngestError::MalformedField {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })?;
    ensure_finite(value, &format!("line {}", line), column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_csv() {
        let file = write_csv(
            "timestamp,temperature,humidity,pressure\n\
             2024-05-01 08:00,20.0,45,101325\n\
             2024-05-01 09:00, 28.5 ,47.5,101300\n",
        );

        let data = CsvReadingSource::new(file.path()).load().unwrap();

        let temperature = data.series(Parameter::Temperature).unwrap();
        assert_eq!(temperature.timestamps(), vec!["2024-05-01 08:00", "2024-05-01 09:00"]);
        assert_eq!(temperature.values(), vec![20.0, 28.5]);
        assert_eq!(data.series(Parameter::Humidity).unwrap().values(), vec![45.0, 47.5]);
        assert_eq!(
            data.series(Parameter::Pressure).unwrap().values(),
            vec![101325.0, 101300.0]
        );
    }

    #[test]
    fn test_columns_found_by_header_name() {
        let file = write_csv(
            "pressure,timestamp,note,humidity,temperature\n\
             101000,t1,ok,40,19.5\n",
        );

        let data = CsvReadingSource::new(file.path()).load().unwrap();
        assert_eq!(data.series(Parameter::Temperature).unwrap().values(), vec![19.5]);
        assert_eq!(data.series(Parameter::Pressure).unwrap().values(), vec![101000.0]);
    }

    #[test]
    fn test_duplicate_timestamp_keeps_last_value() {
        let file = write_csv(
            "timestamp,temperature,humidity,pressure\n\
             t1,20,40,100000\n\
             t2,21,41,100000\n\
             t1,25,42,100000\n",
        );

        let data = CsvReadingSource::new(file.path()).load().unwrap();
        let temperature = data.series(Parameter::Temperature).unwrap();
        assert_eq!(temperature.timestamps(), vec!["t1", "t2"]);
        assert_eq!(temperature.values(), vec![25.0, 21.0]);
    }

    #[test]
    fn test_header_only_file_yields_empty_series() {
        let file = write_csv("timestamp,temperature,humidity,pressure\n");
        let data = CsvReadingSource::new(file.path()).load().unwrap();
        for parameter in Parameter::ALL {
            assert!(data.series(parameter).unwrap().is_empty());
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let err = CsvReadingSource::new(&path).load().unwrap_err();
        assert!(matches!(err, IngestError::DataFileNotFound(p) if p == path));
    }

    #[test]
    fn test_missing_column() {
        let file = write_csv("timestamp,temperature,pressure\nt1,20,100000\n");
        let err = CsvReadingSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn(c) if c == "humidity"));
    }

    #[test]
    fn test_malformed_number_reports_line_and_column() {
        let file = write_csv(
            "timestamp,temperature,humidity,pressure\n\
             t1,20,40,100000\n\
             t2,warm,41,100000\n",
        );

        let err = CsvReadingSource::new(file.path()).load().unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 3: 'warm' in column 'temperature' is not a number"
        );
    }

    #[test]
    fn test_non_finite_number_rejected() {
        let file = write_csv("timestamp,temperature,humidity,pressure\nt1,20,NaN,100000\n");
        let err = CsvReadingSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, IngestError::NonFinite { column, .. } if column == "humidity"));
    }
}
