// Statistic names and result records
use super::reading::Parameter;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Average,
    Min,
    Max,
    Median,
    Jumps,
}

impl Statistic {
    pub fn name(&self) -> &'static str {
        match self {
            Statistic::Average => "average",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Median => "median",
            Statistic::Jumps => "jumps",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Statistic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "average" => Ok(Statistic::Average),
            "min" => Ok(Statistic::Min),
            "max" => Ok(Statistic::Max),
            "median" => Ok(Statistic::Median),
            "jumps" => Ok(Statistic::Jumps),
            other => Err(format!("unknown statistic '{}'", other)),
        }
    }
}

/// Computed value of one statistic. `Number(None)` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(Option<f64>),
    Timestamps(Vec<String>),
}

/// Statistic → value for a single parameter, in the order first requested
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatRecord(Vec<(Statistic, StatValue)>);

impl StatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; a statistic already present keeps its position
    pub fn insert(&mut self, statistic: Statistic, value: StatValue) {
        match self.0.iter_mut().find(|(s, _)| *s == statistic) {
            Some(entry) => entry.1 = value,
            None => self.0.push((statistic, value)),
        }
    }

    pub fn statistic_count(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for StatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (statistic, value) in &self.0 {
            map.serialize_entry(statistic, value)?;
        }
        map.end()
    }
}

/// The persisted document: one record per configured parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatsReport(BTreeMap<Parameter, StatRecord>);

impl StatsReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, parameter: Parameter, record: StatRecord) {
        self.0.insert(parameter, record);
    }

    pub fn parameter_count(&self) -> usize {
        self.0.len()
    }
}

/// Requested statistic names per parameter, as listed in the configuration.
///
/// Names stay unresolved here; the dispatcher decides what an unknown name means.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticRequests(BTreeMap<Parameter, Vec<String>>);

impl StatisticRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, parameter: Parameter, names: Vec<String>) {
        self.0.insert(parameter, names);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &[String])> {
        self.0.iter().map(|(p, names)| (*p, names.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
