// Report service - One run over ingested data: tables for every parameter, statistics for configured ones
use crate::application::statistics_service::{DispatchError, StatisticsService};
use crate::domain::reading::{Parameter, SensorData, TimeSeries};
use crate::domain::statistics::{StatisticRequests, StatsReport};
use crate::presentation::table::{render_table, TableStyle};

#[derive(Debug, Clone)]
pub struct Report {
    pub tables: Vec<(Parameter, String)>,
    pub stats: StatsReport,
}

#[derive(Debug, Clone)]
pub struct ReportService {
    statistics: StatisticsService,
    style: TableStyle,
}

impl ReportService {
    pub fn new(statistics: StatisticsService, style: TableStyle) -> Self {
        Self { statistics, style }
    }

    pub fn build(&self, data: &SensorData, requests: &StatisticRequests) -> Result<Report, DispatchError> {
        let empty = TimeSeries::new();

        let tables = Parameter::ALL
            .into_iter()
            .map(|parameter| {
                let series = data.series(parameter).unwrap_or(&empty);
                (parameter, render_table(parameter.name(), series, self.style))
            })
            .collect();

        if requests.is_empty() {
            tracing::warn!("No statistics configured, results will be empty");
        }
        for (parameter, _) in requests.iter() {
            if data.series(parameter).is_none_or(TimeSeries::is_empty) {
                tracing::warn!("No readings for configured parameter {}", parameter);
            }
        }

        let stats = self.statistics.compute_report(data, requests)?;

        Ok(Report { tables, stats })
    }
}
