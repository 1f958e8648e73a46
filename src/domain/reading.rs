// Sensor reading domain models
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Measured quantity. Declaration order is the display and output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Temperature,
    Humidity,
    Pressure,
}

impl Parameter {
    pub const ALL: [Parameter; 3] = [
        Parameter::Temperature,
        Parameter::Humidity,
        Parameter::Pressure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Temperature => "temperature",
            Parameter::Humidity => "humidity",
            Parameter::Pressure => "pressure",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.name() == s.trim())
            .ok_or_else(|| format!("unknown parameter '{}'", s))
    }
}

/// Jump-detection thresholds, one per parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl Thresholds {
    pub fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }

    pub fn for_parameter(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Humidity => self.humidity,
            Parameter::Pressure => self.pressure,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(7.0, 20.0, 5000.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: String,
    pub value: f64,
}

/// Insertion-ordered timestamp → value mapping.
///
/// Re-inserting an existing timestamp replaces its value but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    readings: Vec<Reading>,
    positions: HashMap<String, usize>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, timestamp: impl Into<String>, value: f64) {
        let timestamp = timestamp.into();
        match self.positions.get(&timestamp) {
            Some(&idx) => self.readings[idx].value = value,
            None => {
                self.positions.insert(timestamp.clone(), self.readings.len());
                self.readings.push(Reading { timestamp, value });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    pub fn values(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.value).collect()
    }

    pub fn timestamps(&self) -> Vec<&str> {
        self.readings.iter().map(|r| r.timestamp.as_str()).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut series = TimeSeries::new();
        for (timestamp, value) in iter {
            series.insert(timestamp, value);
        }
        series
    }
}

/// All series ingested in one run, keyed by parameter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorData {
    series: BTreeMap<Parameter, TimeSeries>,
}

impl SensorData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, parameter: Parameter, timestamp: &str, value: f64) {
        self.series
            .entry(parameter)
            .or_default()
            .insert(timestamp, value);
    }

    pub fn insert_series(&mut self, parameter: Parameter, series: TimeSeries) {
        self.series.insert(parameter, series);
    }

    pub fn series(&self, parameter: Parameter) -> Option<&TimeSeries> {
        self.series.get(&parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_timestamp_overwrites_in_place() {
        let mut series = TimeSeries::new();
        series.insert("t1", 1.0);
        series.insert("t2", 2.0);
        series.insert("t1", 5.0);

        assert_eq!(series.len(), 2);
        assert_eq!(series.timestamps(), vec!["t1", "t2"]);
        assert_eq!(series.values(), vec![5.0, 2.0]);
    }

    #[test]
    fn test_parameter_from_str() {
        assert_eq!("humidity".parse::<Parameter>(), Ok(Parameter::Humidity));
        assert_eq!(" pressure ".parse::<Parameter>(), Ok(Parameter::Pressure));
        assert!("wind".parse::<Parameter>().is_err());
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.for_parameter(Parameter::Temperature), 7.0);
        assert_eq!(thresholds.for_parameter(Parameter::Humidity), 20.0);
        assert_eq!(thresholds.for_parameter(Parameter::Pressure), 5000.0);
    }

    #[test]
    fn test_sensor_data_records_per_parameter() {
        let mut data = SensorData::new();
        data.record(Parameter::Pressure, "t1", 101325.0);
        data.record(Parameter::Temperature, "t1", 21.0);

        assert_eq!(data.series(Parameter::Pressure).unwrap().values(), vec![101325.0]);
        assert_eq!(data.series(Parameter::Temperature).unwrap().len(), 1);
        assert!(data.series(Parameter::Humidity).is_none());
    }
}
