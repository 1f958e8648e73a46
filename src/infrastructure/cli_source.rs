// Single sample supplied on the command line
use crate::application::reading_source::{ensure_finite, IngestError, ReadingSource};
use crate::domain::reading::{Parameter, SensorData};

pub const CLI_TIMESTAMP: &str = "CLI_INPUT";

#[derive(Debug, Clone, Copy)]
pub struct CliReadingSource {
    temperature: f64,
    humidity: f64,
    pressure: f64,
}

impl CliReadingSource {
    pub fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

impl ReadingSource for CliReadingSource {
    fn describe(&self) -> String {
        "Using command-line readings".to_string()
    }

    fn load(&self) -> Result<SensorData, IngestError> {
        let mut data = SensorData::new();
        for (parameter, value) in [
            (Parameter::Temperature, self.temperature),
            (Parameter::Humidity, self.humidity),
            (Parameter::Pressure, self.pressure),
        ] {
            let value = ensure_finite(value, "command line", parameter.name())?;
            data.record(parameter, CLI_TIMESTAMP, value);
        }
        Ok(data)
    }
}
