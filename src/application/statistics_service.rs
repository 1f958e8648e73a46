// Statistics service - Resolves requested statistic names and computes them per parameter
use crate::domain::aggregates;
use crate::domain::reading::{Parameter, SensorData, Thresholds, TimeSeries};
use crate::domain::statistics::{StatRecord, StatValue, Statistic, StatisticRequests, StatsReport};
use thiserror::Error;

/// What to do with a statistic name that is not one of the known statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownStatisticPolicy {
    #[default]
    Ignore,
    Fail,
}

#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
    #[error("unknown statistic '{name}' requested for {parameter}")]
    UnknownStatistic { parameter: Parameter, name: String },
}

#[derive(Debug, Clone)]
pub struct StatisticsService {
    thresholds: Thresholds,
    policy: UnknownStatisticPolicy,
}

impl StatisticsService {
    pub fn new(thresholds: Thresholds, policy: UnknownStatisticPolicy) -> Self {
        Self { thresholds, policy }
    }

    /// Build a record for every configured parameter.
    ///
    /// Parameters without a request get no record; configured parameters
    /// missing from `data` are computed over an empty series.
    pub fn compute_report(
        &self,
        data: &SensorData,
        requests: &StatisticRequests,
    ) -> Result<StatsReport, DispatchError> {
        let empty = TimeSeries::new();
        let mut report = StatsReport::new();

        for (parameter, names) in requests.iter() {
            let series = data.series(parameter).unwrap_or(&empty);
            let record = self.compute_record(parameter, series, names)?;
            report.insert(parameter, record);
        }

        Ok(report)
    }

    pub fn compute_record<S: AsRef<str>>(
        &self,
        parameter: Parameter,
        series: &TimeSeries,
        names: &[S],
    ) -> Result<StatRecord, DispatchError> {
        let mut record = StatRecord::new();

        for name in names {
            let name = name.as_ref();
            let statistic = match name.parse::<Statistic>() {
                Ok(statistic) => statistic,
                Err(_) => match self.policy {
                    UnknownStatisticPolicy::Ignore => {
                        tracing::warn!("Ignoring unknown statistic '{}' for {}", name, parameter);
                        continue;
                    }
                    UnknownStatisticPolicy::Fail => {
                        return Err(DispatchError::UnknownStatistic {
                            parameter,
                            name: name.to_string(),
                        });
                    }
                },
            };

            record.insert(statistic, self.compute(statistic, parameter, series));
        }

        tracing::debug!(
            "Computed {} statistics for {} over {} readings",
            record.statistic_count(),
            parameter,
            series.len()
        );

        Ok(record)
    }

    pub fn compute(&self, statistic: Statistic, parameter: Parameter, series: &TimeSeries) -> StatValue {
        let values = series.values();
        match statistic {
            Statistic::Average => StatValue::Number(aggregates::average(&values)),
            Statistic::Min => StatValue::Number(aggregates::min(&values)),
            Statistic::Max => StatValue::Number(aggregates::max(&values)),
            Statistic::Median => StatValue::Number(aggregates::median(&values)),
            Statistic::Jumps => StatValue::Timestamps(aggregates::detect_jumps(
                &values,
                &series.timestamps(),
                self.thresholds.for_parameter(parameter),
            )),
        }
    }
}
